//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 사용자 레코드 스키마와
//! 요청/응답 DTO들을 담당합니다.

pub mod dto;
pub mod entities;
