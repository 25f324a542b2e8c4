//! 메모리 기반 계정 디렉터리
//!
//! `ACCOUNT_STORE=memory`로 실행하거나 테스트에서 사용합니다.
//! 프로세스가 종료되면 데이터는 사라집니다.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::core::errors::AppError;
use crate::domain::entities::users::Account;
use super::AccountDirectory;

/// In-memory implementation of [`AccountDirectory`]
///
/// 사용자명 인덱스는 계정 맵과 같은 락 안에서 갱신되므로
/// 동시 가입 경쟁에서도 사용자명 유일성이 유지됩니다.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    accounts: HashMap<ObjectId, Account>,
    /// username -> id
    usernames: HashMap<String, ObjectId>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("ID inválido.".to_string()))
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        let store = self.inner.read().await;
        Ok(store
            .usernames
            .get(username)
            .and_then(|id| store.accounts.get(id))
            .cloned())
    }

    async fn create(&self, mut account: Account) -> Result<Account, AppError> {
        let mut store = self.inner.write().await;

        if store.usernames.contains_key(&account.username) {
            return Err(AppError::DuplicateUsername);
        }

        let id = ObjectId::new();
        account.id = Some(id);
        store.usernames.insert(account.username.clone(), id);
        store.accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn update_profile(
        &self,
        username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<Option<Account>, AppError> {
        let mut store = self.inner.write().await;

        let Some(id) = store.usernames.get(username).copied() else {
            return Ok(None);
        };

        Ok(store.accounts.get_mut(&id).map(|account| {
            account.name = name.to_string();
            account.password_hash = password_hash.to_string();
            account.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;
        let mut store = self.inner.write().await;

        match store.accounts.remove(&object_id) {
            Some(account) => {
                store.usernames.remove(&account.username);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn account(username: &str) -> Account {
        Account::new(
            "Matheus Silva".to_string(),
            username.to_string(),
            "sha256$abc".to_string(),
            NaiveDate::from_ymd_opt(2003, 11, 14).unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_is_findable() {
        let repo = InMemoryAccountRepository::new();
        let created = repo.create(account("MatheusSS09")).await.unwrap();
        assert!(created.id_string().is_some());

        let by_name = repo.find_by_username("MatheusSS09").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);
        assert_eq!(by_name.username, "MatheusSS09");
    }

    #[actix_web::test]
    async fn test_username_lookup_is_case_sensitive() {
        let repo = InMemoryAccountRepository::new();
        repo.create(account("MatheusSS09")).await.unwrap();

        assert!(repo.find_by_username("matheusss09").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryAccountRepository::new();
        repo.create(account("MatheusSS09")).await.unwrap();

        let result = repo.create(account("MatheusSS09")).await;
        assert!(matches!(result, Err(AppError::DuplicateUsername)));
    }

    #[actix_web::test]
    async fn test_concurrent_creates_admit_exactly_one() {
        let repo = InMemoryAccountRepository::new();

        let (first, second) = futures_util::future::join(
            repo.create(account("same")),
            repo.create(account("same")),
        )
        .await;

        assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
    }

    #[actix_web::test]
    async fn test_update_profile_replaces_name_and_hash() {
        let repo = InMemoryAccountRepository::new();
        let created = repo.create(account("MatheusSS09")).await.unwrap();

        let updated = repo
            .update_profile("MatheusSS09", "Matheus S. Silva", "sha256$new")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Matheus S. Silva");
        assert_eq!(updated.password_hash, "sha256$new");
        assert_eq!(updated.created_at, created.created_at);
        assert!(repo.update_profile("ghost", "x", "y").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_delete_frees_username() {
        let repo = InMemoryAccountRepository::new();
        let created = repo.create(account("MatheusSS09")).await.unwrap();
        let id = created.id_string().unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.delete(&id).await.unwrap());
        assert!(repo.find_by_username("MatheusSS09").await.unwrap().is_none());
        assert!(repo.create(account("MatheusSS09")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_malformed_id_is_validation_error() {
        let repo = InMemoryAccountRepository::new();
        assert!(matches!(repo.delete("not-an-id").await, Err(AppError::ValidationError(_))));
        assert!(matches!(repo.delete("42").await, Err(AppError::ValidationError(_))));
    }
}
