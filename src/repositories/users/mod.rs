//! 사용자 리포지토리 모듈

pub mod user_repo;

pub use user_repo::{BulkInsertFailure, BulkInsertOutcome, UserRepository};
