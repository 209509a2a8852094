//! # 문자열 유틸리티
//!
//! 요청 DTO와 설정 로깅에서 공통으로 쓰는 문자열 처리 함수들입니다.

/// 빈 문자열을 `None`으로 바꿉니다.
///
/// 공백은 제거하지 않습니다. `" "`는 제공된 값으로 취급되어 형식 검증에서 걸러집니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(non_empty(Some("".to_string())), None);
/// assert_eq!(non_empty(Some("bob".to_string())), Some("bob".to_string()));
/// ```
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 비밀값을 로그에 남길 수 있는 형태로 가립니다.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return "(disabled)".to_string();
    }
    let visible: String = value.chars().take(2).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(non_empty(Some("  ".to_string())), Some("  ".to_string()));
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(disabled)");
        assert_eq!(mask_secret("s3cr3t-key"), "s3***");
        assert_eq!(mask_secret("한글키값"), "한글***");
    }
}
