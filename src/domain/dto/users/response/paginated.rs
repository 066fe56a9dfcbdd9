//! 페이지네이션 엔벨로프 DTO
//!
//! 목록 결과를 조회에 사용된 페이징 파라미터와 함께 감쌉니다.
//! `page`/`limit`/`sort`/`sortBy`는 클라이언트가 보낸 문자열 그대로
//! (생략 시 적용된 기본값으로) 에코됩니다. 전체 건수는 계산하지 않습니다.

use serde::Serialize;

use crate::domain::dto::users::request::UserListQuery;

/// 페이지네이션 엔벨로프
///
/// # JSON 예제
///
/// ```json
/// {
///   "data": [ ... ],
///   "page": "1",
///   "limit": "20",
///   "sort": "-1",
///   "sortBy": "createdAt"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: String,
    pub limit: String,
    pub sort: String,
    pub sort_by: String,
}

impl<T> PaginatedResponse<T> {
    /// 목록 결과와 조회 쿼리의 에코 값으로 엔벨로프를 생성합니다.
    pub fn new(data: Vec<T>, query: &UserListQuery) -> Self {
        Self {
            data,
            page: query.page_echo.clone(),
            limit: query.limit_echo.clone(),
            sort: query.sort_echo.clone(),
            sort_by: query.sort_by_echo.clone(),
        }
    }
}
