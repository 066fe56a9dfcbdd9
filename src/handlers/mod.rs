//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 요청 DTO 바인딩과 검증, 서비스 호출, 응답 변환을 담당합니다.

pub mod users;
