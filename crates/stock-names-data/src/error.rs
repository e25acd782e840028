//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// HTTP 전송 오류
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 데이터 가져오기 오류 (외부 소스 응답 이상)
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// 파싱 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 종목을 찾을 수 없음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 설정 오류
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
