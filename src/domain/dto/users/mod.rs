//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! | 엔드포인트 | 요청 DTO | 응답 DTO |
//! |-----------|----------|----------|
//! | `POST /login` | `LoginRequest` | `Token` |
//! | `POST /user` | `CreateUserRequest` | `AccountResponse` |
//! | `GET /user/info` | - | `AccountResponse` |
//! | `PUT /user/update` | `UpdateUserRequest` | `AccountResponse` |
//! | `DELETE /user/{id}` | - | `MessageResponse` |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
