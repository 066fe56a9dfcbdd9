//! API 라우트 설정 모듈
//!
//! REST 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 CRUD/대량 등록 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /users` - 사용자 생성
/// - `GET /users` - 목록 조회 (필터/정렬/페이지네이션)
/// - `POST /users/upload` - CSV 대량 등록
/// - `GET /users/{id}` - 단일 조회 (소프트 삭제 포함)
/// - `PATCH /users/{id}` - 부분 업데이트
/// - `DELETE /users/{id}` - 소프트 삭제
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_users)
            .service(handlers::users::upload_users)
            .service(handlers::users::get_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:9000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "users_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
