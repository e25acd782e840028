//! 시장 데이터 Provider.
//!
//! 이 crate는 다음을 제공합니다:
//! - 시장 구분 (KOSPI, KOSDAQ)
//! - 종목 목록/종목명 조회를 위한 `MarketDataProvider` trait
//! - 한국거래소(KRX) 정보데이터시스템 클라이언트

pub mod error;
pub mod market;
pub mod provider;

pub use error::{DataError, Result};
pub use market::Market;
pub use provider::{KrxMarketDataProvider, MarketDataProvider};
