//! # CSV 파서 유틸리티
//!
//! 업로드된 CSV 파일 버퍼를 대량 등록 행으로 역직렬화합니다.
//! 헤더와 필드의 앞뒤 공백은 제거하며, 파일 자체가 CSV로 해석 불가능한
//! 경우 ValidationError를 반환합니다.

use csv::{ReaderBuilder, Trim};

use crate::domain::dto::users::request::BulkUserRow;
use crate::errors::{AppError, AppResult};

/// CSV 바이트 버퍼를 대량 등록 행 목록으로 파싱합니다.
///
/// 행 단위 의미 검증(필수 컬럼, 날짜 형식)은 여기서 하지 않습니다.
/// 그 검증은 [`BulkUserRow::into_user`]가 행 단위로 수행하므로,
/// 여기서의 실패는 파일 전체가 CSV가 아닌 경우뿐입니다.
///
/// # 예제
///
/// ```rust,ignore
/// let rows = parse_users_csv(file_bytes)?;
/// let summary = user_service.bulk_user_insertion(rows).await?;
/// ```
pub fn parse_users_csv(bytes: &[u8]) -> AppResult<Vec<BulkUserRow>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();

    for record in reader.deserialize::<BulkUserRow>() {
        let row = record
            .map_err(|e| AppError::ValidationError(format!("CSV 파싱 실패: {}", e)))?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
firstname,lastname,email,phone,provider,birth_date,status
John,Smith,johnsmith@example.com,(000) 000-0000,Facebook,1990-05-04,DQL
Jane, Doe ,janedoe@example.com,(111) 222-3333,,1992-11-30,
";

    #[test]
    fn test_parses_rows_with_external_headers() {
        let rows = parse_users_csv(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].firstname.as_deref(), Some("John"));
        assert_eq!(rows[0].provider.as_deref(), Some("Facebook"));
        assert_eq!(rows[0].birth_date.as_deref(), Some("1990-05-04"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let rows = parse_users_csv(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(rows[1].lastname.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_empty_columns_become_empty_values() {
        let rows = parse_users_csv(SAMPLE_CSV.as_bytes()).unwrap();

        // 빈 컬럼은 행 단위 변환에서 기본값 처리된다
        let user = rows[1].clone().into_user().unwrap();
        assert_eq!(user.marketing_source, "");
        assert_eq!(user.status, "");
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let rows =
            parse_users_csv(b"firstname,lastname,email,phone,provider,birth_date,status\n")
                .unwrap();

        assert!(rows.is_empty());
    }
}
