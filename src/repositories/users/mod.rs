//! 사용자 계정 리포지토리
//!
//! - [`AccountDirectory`] - 저장소 추상화 trait
//! - [`MongoAccountRepository`] - MongoDB `users` 컬렉션 구현
//! - [`InMemoryAccountRepository`] - 프로세스 메모리 구현 (로컬 실행, 테스트)

pub mod account_directory;
pub mod memory_repo;
pub mod user_repo;
#[cfg(test)]
pub(crate) mod test_support;

pub use account_directory::AccountDirectory;
pub use memory_repo::InMemoryAccountRepository;
pub use user_repo::MongoAccountRepository;
