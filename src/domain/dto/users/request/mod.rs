//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON/쿼리스트링/CSV 데이터를 구조화된 Rust
//! 타입으로 변환하고 검증하는 요청 DTO들을 정의합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **형식 검증**: 이메일, 필수 필드 등 기본 형식 규칙 (validator)
//! 3. **비즈니스 검증**: 서비스/리포지토리 계층에서 중복 확인 등 수행
//!
//! 검증 실패는 상위 에러 핸들러에서 HTTP 422 Unprocessable Entity
//! 응답으로 변환됩니다.

pub mod bulk_user_row;
pub mod create_user;
pub mod query_user;
pub mod update_user;

pub use bulk_user_row::BulkUserRow;
pub use create_user::CreateUserRequest;
pub use query_user::{SortDirection, UserListQuery};
pub use update_user::UpdateUserRequest;
