//! 에러 타입 정의.

use std::fmt;

use stock_names_data::DataError;

/// Collector 에러 타입
#[derive(Debug)]
pub enum CollectorError {
    /// 데이터 소스 에러 (종목 목록 조회 실패 등)
    Provider(DataError),
    /// 파일 입출력 에러
    Io(std::io::Error),
    /// CSV 직렬화 에러
    Csv(csv::Error),
    /// 설정 에러
    Config(String),
}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(e) => write!(f, "Data source error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CollectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<DataError> for CollectorError {
    fn from(err: DataError) -> Self {
        Self::Provider(err)
    }
}

impl From<std::io::Error> for CollectorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CollectorError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
