//! # 사용자 부분 업데이트 요청 DTO
//!
//! PATCH 요청의 본문을 표현합니다. 모든 필드가 선택이며, 제공된 필드만
//! `$set` 업데이트 문서로 변환됩니다. `_id`, `createdAt`, `updatedAt`,
//! `isDeleted`는 이 구조체의 필드가 아니므로 클라이언트가 본문에 포함해도
//! 역직렬화 단계에서 버려집니다 (계약상 "무시").

use chrono::{DateTime, Utc};
use mongodb::bson::Document;
use serde::Deserialize;
use validator::Validate;

/// 사용자 부분 업데이트 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// { "lastName": "Testing", "status": "DQL" }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub marketing_source: Option<String>,
}

impl UpdateUserRequest {
    /// 제공된 필드만 담은 `$set` 업데이트 문서를 생성합니다.
    ///
    /// `updatedAt`은 항상 현재 시각으로 갱신됩니다.
    pub fn into_set_document(self) -> Document {
        let mut set_doc = Document::new();

        if let Some(email) = self.email {
            set_doc.insert("email", email);
        }
        if let Some(first_name) = self.first_name {
            set_doc.insert("firstName", first_name);
        }
        if let Some(last_name) = self.last_name {
            set_doc.insert("lastName", last_name);
        }
        if let Some(birth_date) = self.birth_date {
            set_doc.insert("birthDate", mongodb::bson::DateTime::from_chrono(birth_date));
        }
        if let Some(phone) = self.phone {
            set_doc.insert("phone", phone);
        }
        if let Some(status) = self.status {
            set_doc.insert("status", status);
        }
        if let Some(marketing_source) = self.marketing_source {
            set_doc.insert("marketingSource", marketing_source);
        }

        set_doc.insert(
            "updatedAt",
            mongodb::bson::DateTime::from_chrono(Utc::now()),
        );

        set_doc
    }

    /// 업데이트할 필드가 하나라도 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.birth_date.is_none()
            && self.phone.is_none()
            && self.status.is_none()
            && self.marketing_source.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_body_builds_partial_set_document() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{ "lastName": "Testing" }"#).unwrap();

        let set_doc = request.into_set_document();

        assert_eq!(set_doc.get_str("lastName").unwrap(), "Testing");
        assert!(set_doc.contains_key("updatedAt"));
        assert!(!set_doc.contains_key("firstName"));
        assert!(!set_doc.contains_key("email"));
    }

    #[test]
    fn test_immutable_fields_are_dropped() {
        // 계약상 _id/isDeleted/createdAt/updatedAt은 본문에 있어도 무시된다
        let request: UpdateUserRequest = serde_json::from_str(
            r#"{
                "isDeleted": "true",
                "lastName": "Testing",
                "_id": "01",
                "createdAt": "1999-01-01T00:00:00.000Z",
                "updatedAt": "1999-01-01T00:00:00.000Z"
            }"#,
        )
        .unwrap();

        let set_doc = request.into_set_document();

        assert_eq!(set_doc.get_str("lastName").unwrap(), "Testing");
        assert!(!set_doc.contains_key("isDeleted"));
        assert!(!set_doc.contains_key("_id"));
        assert!(!set_doc.contains_key("createdAt"));
        // updatedAt은 서버 시각으로만 설정된다
        assert!(set_doc.get_datetime("updatedAt").is_ok());
    }

    #[test]
    fn test_empty_body() {
        let request: UpdateUserRequest = serde_json::from_str("{}").unwrap();

        assert!(request.is_empty());

        let set_doc = request.into_set_document();
        assert_eq!(set_doc.len(), 1);
        assert!(set_doc.contains_key("updatedAt"));
    }

    #[test]
    fn test_invalid_optional_email_is_rejected() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{ "email": "broken" }"#).unwrap();

        assert!(request.validate().is_err());
    }
}
