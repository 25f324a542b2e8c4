use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::Account;

/// 계정 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            name,
            username,
            birth_date,
            created_at,
            ..
        } = account;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            username,
            birth_date,
            created_at: DateTime::from_timestamp_millis(created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
