//! User Entity Implementation
//!
//! 저장소에 기록되는 사용자 엔티티와, 저장소에 전달되는 생성/수정 입력 타입을 정의합니다.

use mongodb::bson::{doc, DateTime, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `id`, `public_id`, 타임스탬프는 저장소가 부여하며 호출자가 지정할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 부여하는 순차 정수 ID (1부터 시작)
    pub id: i64,
    /// 외부 식별자 (UUID 문자열, unique)
    pub public_id: String,
    /// 사용자명 (unique)
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

/// 생성 요청으로부터 만들어지는 사용자 골격
///
/// 식별자와 타임스탬프는 비워둔 채 저장소에 전달됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl NewUser {
    /// 저장소가 부여한 식별자/시간으로 완전한 엔티티를 만듭니다.
    pub fn into_user(self, id: i64, public_id: String, now: DateTime) -> User {
        User {
            id,
            public_id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 부분 수정 내용
///
/// `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl UserPatch {
    /// 패치를 엔티티에 적용합니다. 제공되지 않은 필드는 그대로 유지됩니다.
    pub fn apply_to(&self, user: &mut User, now: DateTime) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        user.updated_at = now;
    }

    /// MongoDB `$set` 문서로 변환합니다. `updated_at`은 항상 포함됩니다.
    pub fn to_set_document(&self, now: DateTime) -> Document {
        let mut set = doc! { "updated_at": now };
        if let Some(username) = &self.username {
            set.insert("username", username.as_str());
        }
        if let Some(email) = &self.email {
            set.insert("email", email.as_str());
        }
        if let Some(full_name) = &self.full_name {
            set.insert("full_name", full_name.as_str());
        }
        set
    }
}
