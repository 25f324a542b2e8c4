//! 테스트 전용 계정 디렉터리

use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::users::Account;
use super::AccountDirectory;

/// 모든 호출이 연결 오류로 실패하는 디렉터리
///
/// 오류 문자열에 접속 URI가 들어 있어 응답으로 새어 나가는지 확인할 때 씁니다.
#[derive(Debug, Default)]
pub struct UnreachableDirectory;

pub const UNREACHABLE_URI: &str = "mongodb://admin:pw@db:27017";

impl UnreachableDirectory {
    fn failure() -> AppError {
        AppError::DatabaseError(format!("server selection timeout: {}", UNREACHABLE_URI))
    }
}

#[async_trait]
impl AccountDirectory for UnreachableDirectory {
    async fn find_by_username(&self, _username: &str) -> Result<Option<Account>, AppError> {
        Err(Self::failure())
    }

    async fn create(&self, _account: Account) -> Result<Account, AppError> {
        Err(Self::failure())
    }

    async fn update_profile(
        &self,
        _username: &str,
        _name: &str,
        _password_hash: &str,
    ) -> Result<Option<Account>, AppError> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: &str) -> Result<bool, AppError> {
        Err(Self::failure())
    }
}
