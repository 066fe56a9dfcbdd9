//! 사용자 디렉토리 서비스 백엔드
//!
//! MongoDB 기반의 사용자 레코드 관리 REST 서비스입니다.
//! 사용자 생성, 필터/정렬/페이지네이션 목록 조회, 부분 업데이트,
//! 소프트 삭제, CSV 대량 등록을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 부분 업데이트, 소프트 삭제
//! - **목록 조회**: 필드 동등 필터 + 정렬 + 페이지네이션 엔벨로프
//! - **대량 등록**: CSV 업로드 기반 unordered bulk insert
//! - **MongoDB**: 사용자 데이터 영구 저장 (유니크 이메일 인덱스)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, DTO 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_service_backend::db::Database;
//! use users_service_backend::services::users::UserService;
//!
//! let database = Database::new().await?;
//! let user_service = UserService::new(&database);
//!
//! let user = user_service.create_user(request).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
