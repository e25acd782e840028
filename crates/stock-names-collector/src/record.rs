//! 수집 레코드.

use serde::{Deserialize, Serialize};
use stock_names_data::Market;

/// 종목 레코드 (CSV 한 행).
///
/// 필드 순서가 곧 CSV 컬럼 순서입니다: `ticker,name,market`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// 종목 코드 (예: 005930)
    pub ticker: String,
    /// 종목명 (예: 삼성전자)
    pub name: String,
    /// 시장
    pub market: Market,
}

impl StockRecord {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>, market: Market) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            market,
        }
    }
}

/// 종목명 조회에 실패한 종목.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveFailure {
    pub market: Market,
    pub ticker: String,
    /// 실패 사유 (에러 메시지)
    pub reason: String,
}
