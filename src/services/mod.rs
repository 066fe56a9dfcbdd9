//! 비즈니스 로직을 담당하는 서비스 모듈

pub mod users;
