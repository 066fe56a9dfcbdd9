//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 레코드 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
//!
//! ## 검증 규칙
//!
//! - `email`: RFC 5322 이메일 형식 (중복 여부는 리포지토리 계층에서 검증)
//! - `firstName`, `lastName`, `phone`: 필수, 빈 문자열 불가
//! - `birthDate`: 필수, RFC 3339 타임스탬프
//! - `status`, `marketingSource`: 선택, 생략 시 빈 문자열

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::User;

/// 새로운 사용자 레코드 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "johnsmith@example.com",
///   "firstName": "John",
///   "lastName": "Smith",
///   "birthDate": "2020-01-01T00:00:00.000Z",
///   "phone": "(111) 222-3333",
///   "status": "DQL",
///   "marketingSource": "Facebook"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "이름은 필수입니다"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "성은 필수입니다"))]
    pub last_name: String,

    pub birth_date: DateTime<Utc>,

    #[validate(length(min = 1, message = "전화번호는 필수입니다"))]
    pub phone: String,

    /// 선택 필드, 생략 시 빈 문자열
    #[serde(default)]
    pub status: String,

    /// 선택 필드, 생략 시 빈 문자열
    #[serde(default)]
    pub marketing_source: String,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(
            request.email,
            request.first_name,
            request.last_name,
            request.birth_date,
            request.phone,
            request.status,
            request.marketing_source,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Result<CreateUserRequest> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_optional_tags_default_to_empty_string() {
        let request = parse(
            r#"{
                "email": "a@x.com",
                "firstName": "A",
                "lastName": "B",
                "birthDate": "2020-01-01T00:00:00.000Z",
                "phone": "(111) 222-3333"
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.status, "");
        assert_eq!(request.marketing_source, "");
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // phone 누락
        let result = parse(
            r#"{
                "email": "a@x.com",
                "firstName": "A",
                "lastName": "B",
                "birthDate": "2020-01-01T00:00:00.000Z"
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = parse(
            r#"{
                "email": "not-an-email",
                "firstName": "A",
                "lastName": "B",
                "birthDate": "2020-01-01T00:00:00.000Z",
                "phone": "(111) 222-3333"
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_round_trip_into_user() {
        let request = parse(
            r#"{
                "email": "a@x.com",
                "firstName": "A",
                "lastName": "B",
                "birthDate": "2020-01-01T00:00:00.000Z",
                "phone": "(111) 222-3333",
                "status": "DQL",
                "marketingSource": "Facebook"
            }"#,
        )
        .unwrap();

        let user = User::from(request.clone());

        assert_eq!(user.email, request.email);
        assert_eq!(user.first_name, request.first_name);
        assert_eq!(user.last_name, request.last_name);
        assert_eq!(user.birth_date, request.birth_date);
        assert_eq!(user.phone, request.phone);
        assert_eq!(user.status, "DQL");
        assert_eq!(user.marketing_source, "Facebook");
        assert!(!user.is_deleted);
    }
}
