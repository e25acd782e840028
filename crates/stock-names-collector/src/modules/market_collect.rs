//! 시장별 종목명 수집 모듈.

use std::time::Instant;

use stock_names_data::{Market, MarketDataProvider};

use crate::{CollectionStats, ResolveFailure, Result, StockRecord};

/// 한 시장의 수집 결과.
#[derive(Debug, Clone)]
pub struct MarketCollection {
    pub market: Market,
    /// Provider가 반환한 종목 수
    pub ticker_count: usize,
    /// 종목명 조회에 성공한 레코드 (조회 순서 유지)
    pub records: Vec<StockRecord>,
    /// 종목명 조회에 실패한 종목
    pub failures: Vec<ResolveFailure>,
    pub stats: CollectionStats,
}

/// 진행률 로그 간격 (전체의 10% 단위, 최소 1).
pub fn progress_step(total: usize) -> usize {
    (total / 10).max(1)
}

/// 지정된 시장의 종목 정보를 수집.
///
/// 종목 목록 조회 실패는 그대로 반환합니다. 개별 종목명 조회 실패는
/// 로그를 남기고 `failures`에 기록한 뒤 다음 종목으로 넘어갑니다.
pub async fn collect_market(
    provider: &dyn MarketDataProvider,
    market: Market,
) -> Result<MarketCollection> {
    let start = Instant::now();
    let mut stats = CollectionStats::new();

    tracing::info!(market = %market, "{} 시장 종목 수집 시작", market);

    let tickers = provider.list_tickers(market).await?;
    let total = tickers.len();
    stats.total = total;

    tracing::info!(market = %market, count = total, "{} 시장 총 {}개 종목 발견", market, total);

    let step = progress_step(total);
    let mut records = Vec::with_capacity(total);
    let mut failures = Vec::new();

    for (idx, ticker) in tickers.into_iter().enumerate() {
        let idx = idx + 1;

        match provider.ticker_name(&ticker).await {
            Ok(name) => {
                records.push(StockRecord::new(ticker, name, market));
                stats.success += 1;

                if idx % step == 0 {
                    let progress = (idx as f64 / total as f64) * 100.0;
                    tracing::info!(market = %market, "{} 시장 {:.1}% 완료", market, progress);
                }
            }
            Err(e) => {
                tracing::error!(
                    market = %market,
                    ticker = %ticker,
                    error = %e,
                    "종목 {} 처리 중 오류 발생: {}",
                    ticker,
                    e
                );
                stats.errors += 1;
                failures.push(ResolveFailure {
                    market,
                    ticker,
                    reason: e.to_string(),
                });
            }
        }
    }

    stats.elapsed = start.elapsed();

    Ok(MarketCollection {
        market,
        ticker_count: total,
        records,
        failures,
        stats,
    })
}

/// 시장별 결과를 수집 순서대로 이어 붙임.
pub fn aggregate(collections: &[MarketCollection]) -> Vec<StockRecord> {
    collections
        .iter()
        .flat_map(|c| c.records.iter().cloned())
        .collect()
}
