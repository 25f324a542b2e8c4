//! 비밀번호 해싱 전략
//!
//! 운영 환경은 [`BcryptPasswordHasher`]를 사용합니다. 테스트 빌드에서만
//! bcrypt cost 없이 동작하는 `DeterministicPasswordHasher`가 추가됩니다.
//! 두 구현 모두 평문을 그대로 반환하는 일은 없습니다.

use std::fmt::Debug;
#[cfg(test)]
use sha2::{Digest, Sha256};

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, ErrorContext};

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// 평문 비밀번호를 단방향 해시로 변환
    ///
    /// 빈 입력은 호출 전에 검증 단계에서 거부되어야 합니다.
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    /// 평문이 저장된 해시와 일치하는지 확인
    ///
    /// 해시 형식이 잘못된 경우에도 에러 대신 `false`를 반환합니다.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// bcrypt 기반 해셔 (솔트 자동 생성)
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST`와 실행 환경에 맞는 cost로 생성
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        bcrypt::hash(plaintext, self.cost).context("비밀번호 해싱 실패")
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("저장된 비밀번호 해시를 해석할 수 없습니다: {}", e);
                false
            }
        }
    }
}

/// 테스트용 결정적 해셔
///
/// `sha256$<hex>` 형식을 만들며 같은 입력에는 항상 같은 출력을 냅니다.
/// bcrypt cost 없이 빠르게 동작하므로 HTTP 테스트에서 사용합니다.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct DeterministicPasswordHasher;

#[cfg(test)]
impl DeterministicPasswordHasher {
    const PREFIX: &'static str = "sha256$";

    pub fn new() -> Self {
        Self
    }

    fn digest(plaintext: &str) -> String {
        format!("{}{:x}", Self::PREFIX, Sha256::digest(plaintext.as_bytes()))
    }
}

#[cfg(test)]
impl PasswordHasher for DeterministicPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        Ok(Self::digest(plaintext))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        if !hash.starts_with(Self::PREFIX) {
            return false;
        }

        constant_time_eq(Self::digest(plaintext).as_bytes(), hash.as_bytes())
    }
}

#[cfg(test)]
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
