//! 사용자 레코드 응답 DTO
//!
//! 저장된 레코드를 HTTP 응답 형태로 변환합니다. `_id`는 24자리 hex
//! 문자열로, 타임스탬프는 밀리초 정밀도의 RFC 3339 문자열로 직렬화되어
//! 저장 정밀도와 응답 표현이 일치합니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "serialize_date_millis")]
    pub birth_date: DateTime<Utc>,
    pub phone: String,
    pub status: String,
    pub marketing_source: String,
    pub is_deleted: bool,
    #[serde(serialize_with = "serialize_date_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_date_millis")]
    pub updated_at: DateTime<Utc>,
}

/// `2020-01-01T00:00:00.000Z` 형태의 밀리초 고정 RFC 3339 직렬화
fn serialize_date_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            birth_date,
            phone,
            status,
            marketing_source,
            is_deleted,
            created_at,
            updated_at,
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            first_name,
            last_name,
            birth_date,
            phone,
            status,
            marketing_source,
            is_deleted,
            created_at,
            updated_at,
        }
    }
}
