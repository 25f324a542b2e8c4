//! 토큰 클레임 모델

pub mod token;

pub use token::*;
