//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 관련 DTO
//! │   ├── request/        # 요청 DTO (클라이언트 → 서버)
//! │   │   ├── create_user.rs
//! │   │   ├── update_user.rs
//! │   │   ├── auth_request.rs
//! │   │   └── rules.rs    # 공통 검증 규칙
//! │   └── response/       # 응답 DTO (서버 → 클라이언트)
//! │       └── user_response.rs
//! └── tokens/             # 로그인 토큰 응답
//!     └── response.rs
//! ```
//!
//! ## 필드 설계
//!
//! - **JSON 필드명**: camelCase (`birthDate`, `createdAt`)
//! - **민감한 정보**: 비밀번호 해시는 어떤 응답 DTO에도 포함되지 않음
//! - **날짜/시간**: `birthDate`는 `YYYY-MM-DD`, `createdAt`은 RFC 3339
//!
//! ## 검증 에러 응답
//!
//! ```json
//! {
//!   "errors": [
//!     { "field": "password", "message": "A senha não pode ser nula." },
//!     { "field": "name", "message": "O nome não deve ser nulo e nem conter espaços em branco." }
//!   ]
//! }
//! ```

pub mod users;
pub mod tokens;

pub use users::*;
pub use tokens::*;
