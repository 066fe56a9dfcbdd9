//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 검증된 조회/변경 입력을
//! 드라이버 연산으로 번역합니다.

pub mod users;
