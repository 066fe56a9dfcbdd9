//! # 대량 등록 행 DTO
//!
//! 업로드된 CSV의 한 행을 표현합니다. 외부 명명 규칙(`firstname`,
//! `lastname`, `birth_date`, `provider`)을 사용하므로 레코드 스키마로
//! 변환하면서 필드명을 맞춥니다. 모든 컬럼은 선택 문자열로 읽고,
//! 필수값 누락이나 날짜 파싱 실패는 해당 행만 실패로 처리합니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

/// CSV 한 행의 원시 데이터
///
/// # CSV 예제
///
/// ```csv
/// firstname,lastname,email,phone,provider,birth_date,status
/// John,Smith,johnsmith@example.com,(000) 000-0000,Facebook,1990-05-04,DQL
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkUserRow {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// 레코드의 `marketingSource`로 매핑됩니다
    pub provider: Option<String>,
    /// 레코드의 `birthDate`로 매핑됩니다
    pub birth_date: Option<String>,
    pub status: Option<String>,
}

impl BulkUserRow {
    /// 행을 서버 기본값이 적용된 사용자 레코드로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 컬럼 누락 또는 `birth_date`
    ///   파싱 실패
    pub fn into_user(self) -> AppResult<User> {
        let email = require_column(self.email, "email")?;
        let first_name = require_column(self.firstname, "firstname")?;
        let last_name = require_column(self.lastname, "lastname")?;
        let phone = require_column(self.phone, "phone")?;
        let birth_date = parse_birth_date(&require_column(self.birth_date, "birth_date")?)?;

        Ok(User::new(
            email,
            first_name,
            last_name,
            birth_date,
            phone,
            self.status.unwrap_or_default(),
            self.provider.unwrap_or_default(),
        ))
    }
}

fn require_column(value: Option<String>, column: &str) -> AppResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::ValidationError(format!(
            "{} 컬럼은 필수입니다",
            column
        ))),
    }
}

/// `birth_date` 컬럼 파싱
///
/// RFC 3339 타임스탬프와 `YYYY-MM-DD` 날짜 형식을 허용합니다.
fn parse_birth_date(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap().and_utc())
        .map_err(|_| {
            AppError::ValidationError(format!("birth_date 값을 해석할 수 없습니다: {}", raw))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row() -> BulkUserRow {
        BulkUserRow {
            firstname: Some("John".to_string()),
            lastname: Some("Smith".to_string()),
            email: Some("johnsmith@example.com".to_string()),
            phone: Some("(000) 000-0000".to_string()),
            provider: Some("Facebook".to_string()),
            birth_date: Some("1990-05-04".to_string()),
            status: Some("DQL".to_string()),
        }
    }

    #[test]
    fn test_external_names_are_renamed() {
        let user = sample_row().into_user().unwrap();

        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Smith");
        assert_eq!(user.marketing_source, "Facebook");
        assert_eq!(
            user.birth_date,
            Utc.with_ymd_and_hms(1990, 5, 4, 0, 0, 0).unwrap()
        );
        // 대량 등록 행에도 서버 기본값이 적용된다
        assert!(!user.is_deleted);
    }

    #[test]
    fn test_missing_tags_default_to_empty_string() {
        let row = BulkUserRow {
            provider: None,
            status: None,
            ..sample_row()
        };

        let user = row.into_user().unwrap();
        assert_eq!(user.status, "");
        assert_eq!(user.marketing_source, "");
    }

    #[test]
    fn test_missing_email_fails_row() {
        let row = BulkUserRow {
            email: None,
            ..sample_row()
        };

        assert!(row.into_user().is_err());
    }

    #[test]
    fn test_rfc3339_birth_date_accepted() {
        let row = BulkUserRow {
            birth_date: Some("2020-01-01T00:00:00.000Z".to_string()),
            ..sample_row()
        };

        let user = row.into_user().unwrap();
        assert_eq!(
            user.birth_date,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_unparseable_birth_date_fails_row() {
        let row = BulkUserRow {
            birth_date: Some("04/05/1990".to_string()),
            ..sample_row()
        };

        assert!(row.into_user().is_err());
    }
}
