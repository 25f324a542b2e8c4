//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//! 모든 엔티티는 `serde`로 BSON 직렬화되며 `_id` 필드는 `ObjectId`로 매핑됩니다.

pub mod users;

pub use users::*;
