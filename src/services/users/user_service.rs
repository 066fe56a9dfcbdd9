//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 생명주기(생성 → 부분 업데이트 → 소프트 삭제)와
//! 목록 조회, CSV 대량 등록의 비즈니스 로직을 담당합니다.
//! 엔티티 ↔ DTO 변환과 NotFound/Conflict 분류가 이 계층에서 일어나며,
//! 실제 저장소 연산은 [`UserRepository`]에 위임합니다.

use log::{info, warn};
use mongodb::bson::oid::ObjectId;

use crate::db::Database;
use crate::domain::dto::users::{
    request::{BulkUserRow, CreateUserRequest, UpdateUserRequest, UserListQuery},
    response::{UploadUsersResponse, UserResponse},
};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 시작 시점에 한 번 생성되어 actix 앱 데이터로 주입되고,
/// 워커 간에 복제되어 공유됩니다. 내부 상태는 컬렉션 핸들뿐입니다.
#[derive(Clone)]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: UserRepository,
}

impl UserService {
    /// 주입된 데이터베이스 핸들로 서비스를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            user_repo: UserRepository::new(db),
        }
    }

    /// 시작 시 인덱스를 보장합니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        self.user_repo.create_indexes().await
    }

    /// 새 사용자 레코드 생성
    ///
    /// 서버 기본값을 적용해 저장하고 생성된 레코드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 중복
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let user = self.user_repo.insert_one(User::from(request)).await?;

        info!("사용자 생성됨: {}", user.id_string().unwrap_or_default());

        Ok(UserResponse::from(user))
    }

    /// 활성 사용자 목록 조회
    ///
    /// 소프트 삭제된 레코드는 결과에 포함되지 않습니다.
    pub async fn get_all_users(&self, query: &UserListQuery) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_many(query).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 단일 사용자 조회 (소프트 삭제된 레코드 포함)
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let object_id = parse_object_id(id)?;

        self.user_repo
            .find_by_id(&object_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자 부분 업데이트
    ///
    /// 제공된 필드만 변경하며, 불변 필드는 DTO 역직렬화 단계에서 이미
    /// 버려진 상태입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ID 형식, 또는 변경할 필드가
    ///   하나도 없는 본문
    /// * `AppError::NotFound` - 해당 ID의 레코드 없음
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let object_id = parse_object_id(id)?;

        ensure_update_has_fields(&request)?;

        self.user_repo
            .update_by_id(&object_id, request.into_set_document())
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 사용자 소프트 삭제
    ///
    /// `isDeleted`만 true로 바꾸어 이후 목록 조회에서 제외합니다.
    /// 갱신된 레코드를 반환하며, 레코드는 저장소에 남습니다.
    pub async fn soft_delete_user(&self, id: &str) -> AppResult<UserResponse> {
        let object_id = parse_object_id(id)?;

        let deleted = self
            .user_repo
            .soft_delete_by_id(&object_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        info!("사용자 소프트 삭제됨: {}", id);

        Ok(deleted)
    }

    /// CSV 행 대량 등록
    ///
    /// 행 단위로 레코드 변환을 시도하고, 변환에 실패한 행은 저장소에
    /// 보내지 않고 실패로 집계합니다. 저장 단계의 개별 실패(이메일 충돌)는
    /// unordered bulk insert가 나머지 행에 영향을 주지 않게 처리합니다.
    ///
    /// `failedCount = 전체 행 수 − 저장 성공 행 수`
    pub async fn bulk_user_insertion(
        &self,
        rows: Vec<BulkUserRow>,
    ) -> AppResult<UploadUsersResponse> {
        let total = rows.len();
        let mut users = Vec::with_capacity(total);

        for (index, row) in rows.into_iter().enumerate() {
            match row.into_user() {
                Ok(user) => users.push(user),
                Err(e) => warn!("대량 등록 행 {} 검증 실패: {}", index, e),
            }
        }

        let outcome = self.user_repo.bulk_insert(users).await?;

        let summary = UploadUsersResponse {
            success_count: outcome.inserted_count,
            failed_count: total - outcome.inserted_count,
        };

        info!(
            "대량 등록 완료: 성공 {}건, 실패 {}건",
            summary.success_count, summary.failed_count
        );

        Ok(summary)
    }
}

/// ObjectId 문자열 파싱
fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 변경할 필드가 하나도 없는 PATCH 본문 거부
///
/// 빈 본문을 허용하면 `updatedAt`만 갱신되는 쓰기가 발생합니다.
fn ensure_update_has_fields(request: &UpdateUserRequest) -> AppResult<()> {
    if request.is_empty() {
        return Err(AppError::ValidationError(
            "변경할 필드가 없습니다".to_string(),
        ));
    }

    Ok(())
}
