//! 사용자 관련 응답 DTO 모듈

pub mod paginated;
pub mod upload_users;
pub mod user_response;

pub use paginated::PaginatedResponse;
pub use upload_users::UploadUsersResponse;
pub use user_response::UserResponse;
