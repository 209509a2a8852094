//! HTTP 요청 핸들러 모듈
//!
//! 요청 추출과 응답 변환만 담당하며 비즈니스 규칙은 서비스 계층에 둡니다.
//! 핸들러는 `web::Data<UserService>`로 주입된 서비스를 사용합니다.

pub mod users;
