//! 종목명 수집 실행기.
//!
//! 한 번의 실행은 다음 순서를 따릅니다:
//! KOSPI 조회 → KOSPI 종목명 → KOSDAQ 조회 → KOSDAQ 종목명 → 병합 → CSV 저장 → 파일 확인.
//! 종목 목록 조회, 저장 단계의 오류는 실행 전체를 중단시킵니다.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stock_names_data::{Market, MarketDataProvider};
use tracing::Instrument;

use crate::modules::{aggregate, collect_market, csv_export, MarketCollection};
use crate::{CollectionStats, ResolveFailure, Result};

/// 수집 완료 메시지
pub const COMPLETION_MESSAGE: &str = "데이터 수집 완료";

/// 수집 실행 결과.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    /// 수집 기준일
    pub date: NaiveDate,
    /// 저장된 CSV 경로
    pub path: PathBuf,
    /// 시장별 통계 (수집 순서)
    pub stats: Vec<(Market, CollectionStats)>,
    /// 종목명 조회 실패 목록
    pub failures: Vec<ResolveFailure>,
    /// 저장된 레코드 수
    pub total_records: usize,
    /// 저장 후 확인한 파일 크기 (bytes)
    pub file_size: Option<u64>,
    pub message: String,
}

/// 종목명 수집기.
pub struct Collector {
    provider: Box<dyn MarketDataProvider>,
}

impl Collector {
    pub fn new(provider: Box<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// 수집 실행.
    ///
    /// `date`는 실행 시작 시점의 날짜로, 파일명에 그대로 사용됩니다.
    /// 실행 중 로그는 모두 `collection_run` span 아래에 기록됩니다.
    pub async fn run(&self, date: NaiveDate, output_dir: &Path) -> Result<CollectionReport> {
        let span = tracing::info_span!(
            "collection_run",
            provider = self.provider.name(),
            date = %date.format("%Y%m%d")
        );

        async {
            self.run_stages(date, output_dir)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "프로세스 실행 중 오류 발생: {}", e))
        }
        .instrument(span)
        .await
    }

    async fn run_stages(&self, date: NaiveDate, output_dir: &Path) -> Result<CollectionReport> {
        tracing::info!("종목명 수집 프로세스 시작");
        tracing::info!("수집 날짜: {}", date.format("%Y%m%d"));

        let mut collections: Vec<MarketCollection> = Vec::with_capacity(Market::ALL.len());
        for market in Market::ALL {
            let collection = collect_market(self.provider.as_ref(), market).await?;
            tracing::info!(
                market = %market,
                count = collection.records.len(),
                "{} 종목 {}개 수집 완료",
                market,
                collection.records.len()
            );
            collection.stats.log_summary(market.as_str());
            collections.push(collection);
        }

        let records = aggregate(&collections);
        tracing::info!(count = records.len(), "전체 {}개 종목 데이터 생성 완료", records.len());

        let failures: Vec<ResolveFailure> = collections
            .iter()
            .flat_map(|c| c.failures.iter().cloned())
            .collect();
        if !failures.is_empty() {
            let tickers: Vec<&str> = failures.iter().map(|f| f.ticker.as_str()).collect();
            tracing::warn!(
                count = failures.len(),
                "종목명 조회 실패 {}개: {}",
                failures.len(),
                tickers.join(",")
            );
        }

        let path = csv_export::output_path(output_dir, date);
        csv_export::write_records(&path, &records)?;
        tracing::info!("데이터 저장 완료: {}", path.display());

        let file_size = csv_export::file_size(&path);
        if let Some(size) = file_size {
            tracing::info!("저장된 파일 크기: {:.2}KB", size as f64 / 1024.0);
        }

        Ok(CollectionReport {
            date,
            path,
            stats: collections
                .into_iter()
                .map(|c| (c.market, c.stats))
                .collect(),
            failures,
            total_records: records.len(),
            file_size,
            message: COMPLETION_MESSAGE.to_string(),
        })
    }
}
