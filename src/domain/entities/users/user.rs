//! Account Entity Implementation
//!
//! 사용자 계정 엔티티의 핵심 구현체입니다.

use std::fmt;
use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 계정 엔티티
///
/// - `id`: 생성 시 할당되며 이후 변경되지 않음
/// - `username`: 시스템 전체에서 유일, 대소문자 구분, 생성 후 변경 불가
/// - `password_hash`: 항상 해시된 값 (평문은 저장되지 않음)
/// - `created_at`: 생성 시 한 번만 설정
#[derive(Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 로그인 ID이자 토큰의 subject
    pub username: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 생년월일 (과거 날짜)
    pub birth_date: NaiveDate,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Account {
    /// 새 계정 생성
    ///
    /// `password_hash`는 반드시 해셔를 거친 값이어야 합니다.
    /// ID는 저장 시점에 할당됩니다.
    pub fn new(name: String, username: String, password_hash: String, birth_date: NaiveDate) -> Self {
        Self {
            id: None,
            name,
            username,
            password_hash,
            birth_date,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password_hash", &"[hidden]")
            .field("birth_date", &self.birth_date)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Account {
        Account::new(
            "Matheus Silva".to_string(),
            "MatheusSS09".to_string(),
            "$2b$04$hash".to_string(),
            NaiveDate::from_ymd_opt(2003, 11, 14).unwrap(),
        )
    }

    #[test]
    fn test_new_account_has_no_id() {
        let account = sample();
        assert!(account.id.is_none());
        assert!(account.id_string().is_none());
    }

    #[test]
    fn test_debug_hides_password_hash() {
        let rendered = format!("{:?}", sample());
        assert!(rendered.contains("MatheusSS09"));
        assert!(!rendered.contains("$2b$04$hash"));
    }

    #[test]
    fn test_bson_roundtrip_keeps_object_id() {
        let mut account = sample();
        let id = ObjectId::new();
        account.id = Some(id);

        let document = mongodb::bson::to_document(&account).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), id);

        let restored: Account = mongodb::bson::from_document(document).unwrap();
        assert_eq!(restored.id_string(), Some(id.to_hex()));
        assert_eq!(restored.birth_date, account.birth_date);
    }
}
