//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserPatch;
use crate::utils::string_utils::non_empty;

/// 부분 수정 요청 DTO
///
/// 모든 필드는 선택 사항입니다. 빈 문자열은 "제공되지 않음"과 같게 취급됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    /// 제공된 필드만 패치에 담습니다.
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            username: non_empty(request.username),
            email: non_empty(request.email),
            full_name: non_empty(request.full_name),
        }
    }
}
