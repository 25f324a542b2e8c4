use std::fmt::Debug;
use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::entities::users::Account;

/// 계정 디렉터리
///
/// 사용자명 유일성은 구현체가 보장해야 합니다. 같은 사용자명으로 동시에
/// 두 번 `create`가 호출되면 정확히 하나만 성공하고 나머지는
/// `AppError::DuplicateUsername`을 반환합니다.
///
/// `id` 인자는 ObjectId 16진수 문자열이며, 형식이 잘못되면
/// `AppError::ValidationError`를 반환합니다.
#[async_trait]
pub trait AccountDirectory: Send + Sync + Debug {
    /// 사용자명으로 조회 (대소문자 구분)
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError>;

    /// 새 계정을 저장하고 ID가 할당된 계정을 반환
    async fn create(&self, account: Account) -> Result<Account, AppError>;

    /// 이름과 비밀번호 해시를 교체하고 갱신된 계정을 반환
    ///
    /// 계정이 없으면 `Ok(None)`.
    async fn update_profile(
        &self,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<Option<Account>, AppError>;

    /// 삭제되었으면 `true`, 대상이 없었으면 `false`
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
