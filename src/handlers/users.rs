//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201, 422, 409 |
//! | `GET` | `/users` | 목록 조회 (필터/정렬/페이지네이션) | 200, 422 |
//! | `GET` | `/users/{id}` | 단일 조회 (소프트 삭제 포함) | 200, 404, 422 |
//! | `PATCH` | `/users/{id}` | 부분 업데이트 | 200, 404, 422 |
//! | `DELETE` | `/users/{id}` | 소프트 삭제 | 200, 404, 422 |
//! | `POST` | `/users/upload` | CSV 대량 등록 | 200, 422 |

use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use futures_util::TryStreamExt;
use validator::Validate;

use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest, UserListQuery};
use crate::domain::dto::users::response::PaginatedResponse;
use crate::errors::{AppError, AppResult};
use crate::services::users::UserService;
use crate::utils::csv_parser;

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
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
///
/// # 응답
///
/// * `201 Created` - 생성된 레코드 (제출한 필드가 그대로 반영됨)
/// * `422 Unprocessable Entity` - 필수 필드 누락/형식 오류
/// * `409 Conflict` - 이메일 중복
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 목록 조회 핸들러
///
/// 소프트 삭제된 레코드는 반환하지 않습니다. 동등 필터와
/// `page`/`limit`/`sort`/`sortBy` 파라미터를 지원하며, 페이징 파라미터는
/// 받은 그대로 엔벨로프에 에코됩니다.
///
/// # 엔드포인트
///
/// `GET /users?lastName=Smith&limit=20&page=1&sort=-1&sortBy=createdAt`
#[get("")]
pub async fn get_users(
    service: web::Data<UserService>,
    params: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let query = UserListQuery::from_query_map(&params)?;

    let users = service.get_all_users(&query).await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(users, &query)))
}

/// 단일 사용자 조회 핸들러
///
/// ID로 레코드를 직접 조회합니다. 소프트 삭제된 레코드도 조회되며,
/// 이 경우 `isDeleted`가 true로 표시됩니다.
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 업데이트 핸들러
///
/// 본문에 제공된 필드만 변경됩니다. `_id`, `createdAt`, `updatedAt`,
/// `isDeleted`는 본문에 있어도 무시되며, 변경할 필드가 하나도 남지 않는
/// 본문은 422로 거부됩니다.
///
/// # 엔드포인트
///
/// `PATCH /users/{user_id}`
#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 소프트 삭제 핸들러
///
/// `isDeleted`만 true로 갱신하고, 갱신된 레코드를 반환합니다.
/// 이후 목록 조회에서 제외되지만 레코드는 저장소에 남습니다.
///
/// # 엔드포인트
///
/// `DELETE /users/{user_id}`
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.soft_delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// CSV 대량 등록 핸들러
///
/// multipart `file` 필드로 CSV 파일 하나를 받습니다. CSV가 아닌 콘텐츠는
/// 422로 거부하고, 행 단위 실패(검증/이메일 충돌)는 배치를 중단하지 않고
/// 요약에 집계합니다.
///
/// # 엔드포인트
///
/// `POST /users/upload`
///
/// # 응답
///
/// ```json
/// { "successCount": 8, "failedCount": 2 }
/// ```
#[post("/upload")]
pub async fn upload_users(
    service: web::Data<UserService>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let file_bytes = read_csv_file(&mut payload).await?;

    let rows = csv_parser::parse_users_csv(&file_bytes)?;

    let summary = service.bulk_user_insertion(rows).await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// multipart 페이로드에서 `file` 필드의 CSV 바이트를 읽습니다.
///
/// # Errors
///
/// * `AppError::UnsupportedMedia` - `file` 필드가 없거나 content type이
///   `text/csv`가 아닌 경우
async fn read_csv_file(payload: &mut Multipart) -> AppResult<Vec<u8>> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::ValidationError(format!("multipart 처리 실패: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let is_csv = field
            .content_type()
            .map(|mime| mime.essence_str().eq_ignore_ascii_case("text/csv"))
            .unwrap_or(false);

        if !is_csv {
            return Err(AppError::UnsupportedMedia(
                "업로드된 파일이 CSV 파일이 아닙니다".to_string(),
            ));
        }

        let mut buffer = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::ValidationError(format!("파일 수신 실패: {}", e)))?
        {
            buffer.extend_from_slice(&chunk);
        }

        return Ok(buffer);
    }

    Err(AppError::UnsupportedMedia(
        "업로드된 파일이 CSV 파일이 아닙니다".to_string(),
    ))
}
