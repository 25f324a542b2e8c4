//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 저장소로 사용하는 [`AccountDirectory`] 구현체입니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: `username` 유니크 인덱스로 동시 가입 경쟁에서도 중복 방지
//! - **명시적 에러 매핑**: 중복 키(11000)는 `DuplicateUsername`으로 변환

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::users::Account;
use super::AccountDirectory;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장소
///
/// - **컬렉션명**: `users`
/// - **인덱스**: username(unique), created_at(desc)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식
/// - **DuplicateUsername**: 사용자명 유니크 제약 위반
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Database::new().await?;
/// let repo = MongoAccountRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let created = repo.create(account).await?;
/// let found = repo.find_by_username(&created.username).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MongoAccountRepository {
    collection: Collection<Account>,
}

impl MongoAccountRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Account>(Self::COLLECTION_NAME),
        }
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 무시하므로 시작할 때마다 호출해도 됩니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("ID inválido.".to_string()))
    }

    fn map_write_error(error: mongodb::error::Error) -> AppError {
        match *error.kind {
            ErrorKind::Write(WriteFailure::WriteError(ref write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                AppError::DuplicateUsername
            }
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

#[async_trait]
impl AccountDirectory for MongoAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut account: Account) -> Result<Account, AppError> {
        // 인덱스가 최종 방어선이고, 이 확인은 흔한 경우를 빠르게 거절하기 위함
        if self.find_by_username(&account.username).await?.is_some() {
            return Err(AppError::DuplicateUsername);
        }

        let result = self.collection
            .insert_one(&account)
            .await
            .map_err(Self::map_write_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("insert_one이 ObjectId를 반환하지 않았습니다".to_string())
        })?;
        account.id = Some(id);

        debug!("계정 생성: id={}", id.to_hex());
        Ok(account)
    }

    async fn update_profile(
        &self,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<Option<Account>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "username": username },
                doc! { "$set": { "name": name, "password_hash": password_hash } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;

        let result = self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
