//! 사용자 생성 요청 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::NewUser;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 누락된 필드는 빈 문자열로 채워지며, 검증 단계에서 "... is required"로 거부됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            full_name: request.full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"username":"jdoe"}"#).unwrap();

        assert_eq!(request.username, "jdoe");
        assert!(request.email.is_empty());
        assert!(request.full_name.is_empty());
    }
}
