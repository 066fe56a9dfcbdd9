//! # 사용자 목록 조회 쿼리 DTO
//!
//! GET /users 쿼리스트링을 검증된 조회 계획으로 변환합니다.
//!
//! ## 파라미터
//!
//! - 동등 필터: `email`, `firstName`, `lastName`, `phone`, `status`,
//!   `marketingSource` — 값은 항상 리터럴 문자열 동등 비교로만 사용되며
//!   쿼리 연산자로 해석되지 않습니다. 허용 목록 밖의 키는 무시됩니다.
//! - `page`: 1부터 시작하는 페이지 번호 (기본값 1)
//! - `limit`: 페이지 크기 (기본값/최대값은 [`PaginationConfig`] 참조)
//! - `sort`: "1" 오름차순 / "-1" 내림차순 (기본값 "-1")
//! - `sortBy`: 정렬 필드 (기본값 "createdAt")
//!
//! 생략된 파라미터는 명시적 기본값을 사용하고, 존재하지만 형식이 잘못된
//! 파라미터는 422 ValidationError로 거부됩니다.

use std::collections::HashMap;

use crate::config::PaginationConfig;
use crate::errors::{AppError, AppResult};

/// 동등 필터가 허용되는 레코드 필드
pub const FILTERABLE_FIELDS: &[&str] = &[
    "email",
    "firstName",
    "lastName",
    "phone",
    "status",
    "marketingSource",
];

/// 정렬이 허용되는 레코드 필드
pub const SORTABLE_FIELDS: &[&str] = &[
    "email",
    "firstName",
    "lastName",
    "birthDate",
    "phone",
    "status",
    "marketingSource",
    "createdAt",
    "updatedAt",
];

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// 쿼리스트링 값("1"/"-1")에서 정렬 방향을 파싱합니다.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1" => Some(SortDirection::Ascending),
            "-1" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// MongoDB 정렬 문서에 쓰이는 값
    pub fn as_i32(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }

    /// 엔벨로프에 에코되는 쿼리스트링 표현
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Ascending => "1",
            SortDirection::Descending => "-1",
        }
    }
}

/// 검증이 끝난 목록 조회 쿼리
///
/// 엔벨로프 에코용 문자열(`page_echo` 등)은 클라이언트가 보낸 값을 그대로,
/// 생략된 경우에는 적용된 기본값을 담습니다.
#[derive(Debug, Clone)]
pub struct UserListQuery {
    /// 허용 목록을 통과한 동등 필터 (필드명, 리터럴 값)
    pub filters: Vec<(String, String)>,
    pub page: u64,
    pub limit: i64,
    pub sort_by: String,
    pub sort: SortDirection,
    pub page_echo: String,
    pub limit_echo: String,
    pub sort_echo: String,
    pub sort_by_echo: String,
}

impl UserListQuery {
    /// 원시 쿼리스트링 맵에서 조회 쿼리를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `page`/`limit`이 숫자가 아니거나
    ///   범위를 벗어난 경우, `sort`/`sortBy` 값이 허용되지 않는 경우
    pub fn from_query_map(params: &HashMap<String, String>) -> AppResult<Self> {
        let page = match params.get("page") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::ValidationError(format!("page 값이 올바르지 않습니다: {}", raw))
            })?,
            None => 1,
        };

        let limit = match params.get("limit") {
            Some(raw) => {
                let limit = raw.parse::<i64>().map_err(|_| {
                    AppError::ValidationError(format!("limit 값이 올바르지 않습니다: {}", raw))
                })?;

                if limit < 1 || limit > PaginationConfig::max_limit() {
                    return Err(AppError::ValidationError(format!(
                        "limit은 1 이상 {} 이하이어야 합니다",
                        PaginationConfig::max_limit()
                    )));
                }

                limit
            }
            None => PaginationConfig::default_limit(),
        };

        let sort = match params.get("sort") {
            Some(raw) => SortDirection::parse(raw).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "sort는 \"1\" 또는 \"-1\"이어야 합니다: {}",
                    raw
                ))
            })?,
            None => SortDirection::Descending,
        };

        let sort_by = match params.get("sortBy") {
            Some(raw) => {
                if !SORTABLE_FIELDS.contains(&raw.as_str()) {
                    return Err(AppError::ValidationError(format!(
                        "정렬할 수 없는 필드입니다: {}",
                        raw
                    )));
                }
                raw.clone()
            }
            None => "createdAt".to_string(),
        };

        // 허용 목록에 있는 키만 리터럴 동등 필터로 수집한다.
        // 값은 BSON 문자열로만 바인딩되므로 연산자 주입이 불가능하다.
        let filters = FILTERABLE_FIELDS
            .iter()
            .filter_map(|field| {
                params
                    .get(*field)
                    .map(|value| (field.to_string(), value.clone()))
            })
            .collect();

        Ok(Self {
            filters,
            page,
            limit,
            sort_by: sort_by.clone(),
            sort,
            page_echo: params
                .get("page")
                .cloned()
                .unwrap_or_else(|| page.to_string()),
            limit_echo: params
                .get("limit")
                .cloned()
                .unwrap_or_else(|| limit.to_string()),
            sort_echo: params
                .get("sort")
                .cloned()
                .unwrap_or_else(|| sort.as_query_value().to_string()),
            sort_by_echo: params.get("sortBy").cloned().unwrap_or(sort_by),
        })
    }

    /// 페이지네이션 오프셋: `limit × max(0, page − 1)`
    ///
    /// `page`는 상한 없이 파싱되므로 곱셈은 포화 연산으로 수행한다.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_omitted() {
        let query = UserListQuery::from_query_map(&params(&[])).unwrap();

        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort, SortDirection::Descending);
        assert_eq!(query.sort_by, "createdAt");
        assert!(query.filters.is_empty());
        assert_eq!(query.offset(), 0);

        // 기본값도 엔벨로프에 문자열로 에코된다
        assert_eq!(query.page_echo, "1");
        assert_eq!(query.limit_echo, "10");
        assert_eq!(query.sort_echo, "-1");
        assert_eq!(query.sort_by_echo, "createdAt");
    }

    #[test]
    fn test_parameters_echoed_as_received() {
        let query = UserListQuery::from_query_map(&params(&[
            ("limit", "20"),
            ("page", "1"),
            ("sort", "-1"),
            ("sortBy", "createdAt"),
        ]))
        .unwrap();

        assert_eq!(query.page_echo, "1");
        assert_eq!(query.limit_echo, "20");
        assert_eq!(query.sort_echo, "-1");
        assert_eq!(query.sort_by_echo, "createdAt");
    }

    #[test]
    fn test_offset_derivation() {
        let query =
            UserListQuery::from_query_map(&params(&[("page", "3"), ("limit", "20")])).unwrap();

        assert_eq!(query.offset(), 40);

        // page=0은 음수 오프셋 대신 0으로 고정된다
        let query =
            UserListQuery::from_query_map(&params(&[("page", "0"), ("limit", "20")])).unwrap();
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        // u64 최댓값의 page도 패닉 없이 포화된 오프셋을 돌려준다
        let query = UserListQuery::from_query_map(&params(&[
            ("page", "18446744073709551615"),
            ("limit", "100"),
        ]))
        .unwrap();

        assert_eq!(query.offset(), u64::MAX);
    }

    #[test]
    fn test_allowlisted_filters_collected() {
        let query = UserListQuery::from_query_map(&params(&[
            ("lastName", "Testing"),
            ("status", "DQL"),
        ]))
        .unwrap();

        let mut filters = query.filters.clone();
        filters.sort();
        assert_eq!(
            filters,
            vec![
                ("lastName".to_string(), "Testing".to_string()),
                ("status".to_string(), "DQL".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_and_structural_keys_ignored() {
        let query = UserListQuery::from_query_map(&params(&[
            ("$where", "1 == 1"),
            ("isDeleted", "true"),
            ("password", "x"),
            ("firstName", "Cypress"),
        ]))
        .unwrap();

        assert_eq!(
            query.filters,
            vec![("firstName".to_string(), "Cypress".to_string())]
        );
    }

    #[test]
    fn test_operator_like_values_kept_literal() {
        // 값에 연산자 모양이 들어와도 필터 값은 그대로의 문자열이다
        let query =
            UserListQuery::from_query_map(&params(&[("lastName", "{\"$ne\": null}")])).unwrap();

        assert_eq!(query.filters[0].1, "{\"$ne\": null}");
    }

    #[test]
    fn test_malformed_parameters_rejected() {
        assert!(UserListQuery::from_query_map(&params(&[("page", "abc")])).is_err());
        assert!(UserListQuery::from_query_map(&params(&[("limit", "-5")])).is_err());
        assert!(UserListQuery::from_query_map(&params(&[("limit", "5000")])).is_err());
        assert!(UserListQuery::from_query_map(&params(&[("sort", "up")])).is_err());
        assert!(UserListQuery::from_query_map(&params(&[("sortBy", "$where")])).is_err());
    }

    #[test]
    fn test_sort_direction_values() {
        assert_eq!(SortDirection::parse("1"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::parse("-1"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::parse("2"), None);

        assert_eq!(SortDirection::Ascending.as_i32(), 1);
        assert_eq!(SortDirection::Descending.as_i32(), -1);
        assert_eq!(SortDirection::Descending.as_query_value(), "-1");
    }
}
