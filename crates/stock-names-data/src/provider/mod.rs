//! 데이터 Provider 모듈.
//!
//! ## 한국거래소(KRX)
//! - `KrxMarketDataProvider`: KRX 정보데이터시스템 (data.krx.co.kr)
//! - 시장별 상장 종목 목록, 단축코드 기준 종목명 조회

pub mod krx;

use async_trait::async_trait;

use crate::{Market, Result};

pub use krx::KrxMarketDataProvider;

/// 시장 데이터 Provider trait.
///
/// 수집기는 이 trait만을 통해 외부 데이터 소스에 접근합니다.
/// 연결, 인증, 재시도는 구현체의 몫이 아니며 수집기도 관여하지 않습니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider 이름.
    fn name(&self) -> &str;

    /// 시장에 상장된 종목 코드 목록 (Provider가 반환한 순서 그대로).
    async fn list_tickers(&self, market: Market) -> Result<Vec<String>>;

    /// 종목 코드로 현재 종목명 조회.
    async fn ticker_name(&self, ticker: &str) -> Result<String>;
}
