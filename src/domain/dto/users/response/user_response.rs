use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    /// 외부 식별자
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            public_id,
            username,
            email,
            full_name,
            created_at,
            updated_at,
        } = user;

        Self {
            id,
            uuid: public_id,
            username,
            email,
            full_name,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}
