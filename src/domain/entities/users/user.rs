//! User Record Schema
//!
//! 사용자 레코드의 핵심 스키마 구현체입니다.
//! MongoDB `users` 컬렉션의 문서 형태와 서버 기본값을 정의합니다.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// 사용자 레코드가 저장되는 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// 사용자 레코드 엔티티
///
/// 저장 필드는 camelCase로 직렬화되며, `_id`와 `createdAt`/`updatedAt`은
/// 서버가 할당합니다. 레코드는 물리적으로 삭제되지 않고 `isDeleted`
/// 플래그로만 비활성화됩니다 (active → soft-deleted, 단방향).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 소프트 삭제된 레코드 포함)
    pub email: String,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 생년월일
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub birth_date: DateTime<Utc>,
    /// 전화번호
    pub phone: String,
    /// 자유 형식 분류 태그 (예: "DQL")
    pub status: String,
    /// 유입 경로 태그 (예: "Facebook")
    pub marketing_source: String,
    /// 소프트 삭제 여부
    pub is_deleted: bool,
    /// 생성 시간
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 레코드 생성
    ///
    /// 서버 기본값(`isDeleted=false`, 생성/수정 타임스탬프)을 적용합니다.
    /// MongoDB가 저장 시점에 ObjectId를 할당합니다.
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        birth_date: DateTime<Utc>,
        phone: String,
        status: String,
        marketing_source: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            birth_date,
            phone,
            status,
            marketing_source,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 목록 조회에 노출되는 활성 레코드인지 확인
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User::new(
            "johnsmith@example.com".to_string(),
            "John".to_string(),
            "Smith".to_string(),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            "(000) 000-0000".to_string(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();

        assert!(user.id.is_none());
        assert!(!user.is_deleted);
        assert!(user.is_active());
        assert_eq!(user.status, "");
        assert_eq!(user.marketing_source, "");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string() {
        let mut user = sample_user();
        assert_eq!(user.id_string(), None);

        let oid = ObjectId::new();
        user.id = Some(oid);
        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }
}
