//! 서버 및 페이지네이션 설정 관리 모듈
//!
//! HTTP 서버 바인딩과 목록 조회 페이지네이션 관련 설정을 관리합니다.

use log::error;
use std::env;

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 바인딩 호스트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// * `HOST` - 바인딩 주소 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버 바인딩 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// * `PORT` - 바인딩 포트 (기본값: 9000)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse::<u16>()
            .unwrap_or_else(|e| {
                error!("PORT 파싱 실패: {}. 기본값 9000 사용", e);
                9000
            })
    }

    /// 워커 스레드 수를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// * `HTTP_WORKERS` - 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .unwrap_or_else(|_| "4".to_string())
            .parse::<usize>()
            .unwrap_or_else(|e| {
                error!("HTTP_WORKERS 파싱 실패: {}. 기본값 4 사용", e);
                4
            })
    }
}

/// 목록 조회 페이지네이션 설정
pub struct PaginationConfig;

impl PaginationConfig {
    /// limit 파라미터 생략 시 사용할 기본 페이지 크기
    ///
    /// # Environment Variables
    ///
    /// * `DEFAULT_PAGE_LIMIT` - 기본 페이지 크기 (기본값: 10)
    pub fn default_limit() -> i64 {
        env::var("DEFAULT_PAGE_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<i64>()
            .unwrap_or_else(|e| {
                error!("DEFAULT_PAGE_LIMIT 파싱 실패: {}. 기본값 10 사용", e);
                10
            })
    }

    /// 한 번의 목록 조회에서 허용하는 최대 페이지 크기
    ///
    /// # Environment Variables
    ///
    /// * `MAX_PAGE_LIMIT` - 최대 페이지 크기 (기본값: 100)
    pub fn max_limit() -> i64 {
        env::var("MAX_PAGE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<i64>()
            .unwrap_or_else(|e| {
                error!("MAX_PAGE_LIMIT 파싱 실패: {}. 기본값 100 사용", e);
                100
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        // 환경 변수가 설정되지 않은 테스트 환경 기준
        assert_eq!(PaginationConfig::default_limit(), 10);
        assert_eq!(PaginationConfig::max_limit(), 100);
    }

    #[test]
    fn test_server_defaults() {
        assert_eq!(ServerConfig::host(), "127.0.0.1");
        assert_eq!(ServerConfig::port(), 9000);
    }
}
