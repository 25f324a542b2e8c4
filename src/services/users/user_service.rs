//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생명주기(등록, 조회, 수정, 삭제)를 관리하는 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        UserService                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Registration        │  Profile            │  Removal       │
//! │  • Input validation  │  • Own info         │  • By id       │
//! │  • Password hash     │  • Name/password    │  • bool result │
//! │  • Duplicate check   │  • Re-hash always   │                │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          AccountDirectory (MongoDB / In-memory)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **해싱 필수**: 비밀번호를 설정하는 모든 경로는 해셔를 거침
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외
//! - **중복 방지**: 사용자명 유니크 제약

use std::sync::Arc;
use log::info;

use crate::core::errors::AppError;
use crate::domain::dto::users::{AccountResponse, CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::Account;
use crate::repositories::users::AccountDirectory;
use crate::services::auth::PasswordHasher;

/// 계정이 조회되지 않을 때의 메시지
pub const ACCOUNT_NOT_FOUND_MESSAGE: &str = "Usuário não foi encontrado na base de dados!";

#[derive(Debug, Clone)]
pub struct UserService {
    directory: Arc<dyn AccountDirectory>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(directory: Arc<dyn AccountDirectory>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { directory, hasher }
    }

    /// 새 사용자 등록
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: 필드 규칙 위반 시 위반 목록 반환
    /// 2. **비밀번호 해싱**: 평문은 저장하지 않음
    /// 3. **저장**: 사용자명이 이미 있으면 `DuplicateUsername`
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidFields` - 입력 검증 실패
    /// * `AppError::DuplicateUsername` - 사용자명 중복
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<AccountResponse, AppError> {
        request.check()?;

        let birth_date = request.birth_date.ok_or_else(|| {
            AppError::InternalError("검증 이후 birth_date가 비어 있습니다".to_string())
        })?;
        let password_hash = self.hasher.hash(&request.password)?;

        let account = Account::new(request.name, request.username, password_hash, birth_date);
        let created = self.directory.create(account).await?;

        info!("사용자 등록 완료: {}", created.username);
        Ok(AccountResponse::from(created))
    }

    /// ID로 사용자 삭제
    ///
    /// 삭제되었으면 `true`, 해당 ID의 사용자가 없으면 `false`를 반환합니다.
    pub async fn delete_user(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.directory.delete(id).await?;

        if deleted {
            info!("사용자 삭제 완료: id={}", id);
        }

        Ok(deleted)
    }

    /// 로그인한 사용자 자신의 정보 조회
    pub async fn get_user_info(&self, username: &str) -> Result<AccountResponse, AppError> {
        let account = self.directory
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(ACCOUNT_NOT_FOUND_MESSAGE.to_string()))?;

        Ok(AccountResponse::from(account))
    }

    /// 로그인한 사용자의 이름과 비밀번호 변경
    ///
    /// 비밀번호는 항상 새로 해싱됩니다.
    pub async fn update_user(
        &self,
        username: &str,
        request: UpdateUserRequest,
    ) -> Result<AccountResponse, AppError> {
        request.check()?;

        let password_hash = self.hasher.hash(&request.password)?;
        let updated = self.directory
            .update_profile(username, &request.name, &password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound(ACCOUNT_NOT_FOUND_MESSAGE.to_string()))?;

        info!("사용자 정보 수정 완료: {}", username);
        Ok(AccountResponse::from(updated))
    }
}
