//! # 사용자 리포지토리 구현
//!
//! 사용자 레코드의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 검증된 조회/변경 입력을 MongoDB 드라이버 연산으로 번역하며,
//! 필터링, 정렬, 페이지네이션, bulk write는 모두 드라이버에 위임합니다.
//!
//! ## 특징
//!
//! - **소프트 삭제 불변식**: 모든 목록 조회 필터에 `isDeleted=false` 고정
//! - **리터럴 필터**: 클라이언트 필터 값은 BSON 문자열로만 바인딩
//! - **데이터 무결성**: 이메일 유니크 인덱스 + E11000 충돌 매핑

use futures_util::stream::TryStreamExt;
use log::warn;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};

use crate::db::Database;
use crate::domain::dto::users::request::UserListQuery;
use crate::domain::entities::users::{USERS_COLLECTION, User};
use crate::errors::{AppError, AppResult};

/// MongoDB 듀플리킷 키 에러 코드 (E11000)
const DUPLICATE_KEY_CODE: i32 = 11000;

/// unordered bulk insert의 실패 행 상세
#[derive(Debug, Clone)]
pub struct BulkInsertFailure {
    /// 배치 내 행 인덱스
    pub index: usize,
    pub message: String,
}

/// unordered bulk insert 결과 요약
#[derive(Debug, Clone, Default)]
pub struct BulkInsertOutcome {
    pub inserted_count: usize,
    pub failures: Vec<BulkInsertFailure>,
}

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 CRUD 연산을 담당합니다. 소프트 삭제 정책에 따라
/// 레코드를 물리적으로 제거하는 연산은 제공하지 않습니다.
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// 주입된 데이터베이스 핸들로 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 이메일은 소프트 삭제된 레코드를 포함해 전역 유니크이므로
    /// 삭제 여부와 무관하게 조회합니다.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회 (소프트 삭제된 레코드 포함)
    pub async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 레코드 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일이 이미 사용 중인 경우
    ///   (사전 조회 + 경합 대비 E11000 매핑)
    /// * `AppError::DatabaseError` - 그 외 드라이버 오류
    pub async fn insert_one(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 활성 레코드 목록 조회
    ///
    /// 동등 필터 AND `isDeleted=false` 조건으로 정렬/스킵/제한을 적용해
    /// 조회합니다. 필터/정렬 문서 구성은 [`active_filter`]와
    /// [`sort_document`]를 참조하세요.
    pub async fn find_many(&self, query: &UserListQuery) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(active_filter(query))
            .sort(sort_document(query))
            .skip(query.offset())
            .limit(query.limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 부분 업데이트 적용
    ///
    /// `find_one_and_update`로 조회와 업데이트를 원자적으로 수행하고
    /// 갱신된 레코드를 반환합니다. 해당 ID가 없으면 `None`입니다.
    pub async fn update_by_id(&self, id: &ObjectId, set_doc: Document) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_doc })
            .with_options(options)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })
    }

    /// 소프트 삭제
    ///
    /// `isDeleted`를 true로 설정하고 갱신된 레코드를 반환합니다.
    /// 레코드는 저장소에서 제거되지 않습니다.
    pub async fn soft_delete_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        let set_doc = doc! {
            "isDeleted": true,
            "updatedAt": mongodb::bson::DateTime::now(),
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// unordered bulk insert
    ///
    /// 개별 행의 실패(예: 이메일 중복)가 나머지 행의 저장을 막지 않도록
    /// unordered 모드로 실행하고, 저장 건수와 실패 상세를 요약합니다.
    pub async fn bulk_insert(&self, users: Vec<User>) -> AppResult<BulkInsertOutcome> {
        if users.is_empty() {
            return Ok(BulkInsertOutcome::default());
        }

        match self.collection.insert_many(&users).ordered(false).await {
            Ok(result) => Ok(BulkInsertOutcome {
                inserted_count: result.inserted_ids.len(),
                failures: Vec::new(),
            }),
            Err(error) => bulk_insert_outcome(users.len(), error),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// - `email`: 유니크 인덱스 (중복 이메일 차단)
    /// - `isDeleted`, `status`, `marketingSource`: 필터 성능용 보조 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let is_deleted_index = IndexModel::builder()
            .keys(doc! { "isDeleted": 1 })
            .options(IndexOptions::builder().name("is_deleted".to_string()).build())
            .build();

        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1 })
            .options(IndexOptions::builder().name("status".to_string()).build())
            .build();

        let marketing_source_index = IndexModel::builder()
            .keys(doc! { "marketingSource": 1 })
            .options(
                IndexOptions::builder()
                    .name("marketing_source".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([
                email_index,
                is_deleted_index,
                status_index,
                marketing_source_index,
            ])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 목록 조회 필터 문서 구성
///
/// 모든 동등 필터에 `isDeleted=false`를 AND로 고정합니다. 필터 값은
/// BSON 문자열로만 삽입되므로 클라이언트 입력이 쿼리 연산자로 해석될 수
/// 없습니다.
fn active_filter(query: &UserListQuery) -> Document {
    let mut filter = doc! { "isDeleted": false };

    for (field, value) in &query.filters {
        filter.insert(field.as_str(), value.as_str());
    }

    filter
}

/// 정렬 문서 구성
fn sort_document(query: &UserListQuery) -> Document {
    doc! { query.sort_by.as_str(): query.sort.as_i32() }
}

/// unordered bulk insert 드라이버 오류를 결과 요약으로 변환
///
/// 행 단위 write error 목록이 있으면 unordered 모드에서 나머지 행은 모두
/// 저장된 것이므로 건수를 역산합니다. write concern 실패처럼 행 단위
/// 정보가 없는 오류는 저장 건수를 알 수 없으므로 그대로 전파합니다.
fn bulk_insert_outcome(
    batch_size: usize,
    error: mongodb::error::Error,
) -> AppResult<BulkInsertOutcome> {
    let write_errors = match *error.kind {
        ErrorKind::InsertMany(ref insert_error) => match insert_error.write_errors {
            Some(ref write_errors) => write_errors,
            None => return Err(AppError::DatabaseError(error.to_string())),
        },
        _ => return Err(AppError::DatabaseError(error.to_string())),
    };

    let failures: Vec<BulkInsertFailure> = write_errors
        .iter()
        .map(|write_error| BulkInsertFailure {
            index: write_error.index,
            message: write_error.message.clone(),
        })
        .collect();

    for failure in &failures {
        warn!(
            "bulk insert 실패 행 {}: {}",
            failure.index, failure.message
        );
    }

    Ok(BulkInsertOutcome {
        inserted_count: batch_size.saturating_sub(failures.len()),
        failures,
    })
}

/// E11000 듀플리킷 키 에러 여부 확인
///
/// `insert_one`은 write error로, `find_one_and_update`는 command error로
/// 중복 키 위반을 보고하므로 두 형태를 모두 확인합니다.
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(ref command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
