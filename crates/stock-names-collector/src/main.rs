//! KOSPI/KOSDAQ 종목명 수집 CLI.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use stock_names_collector::{Collector, CollectorConfig};
use stock_names_data::KrxMarketDataProvider;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stock-names-collector")]
#[command(about = "KOSPI/KOSDAQ 종목명을 수집하여 날짜별 CSV로 저장합니다", long_about = None)]
#[command(version)]
struct Cli {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// CSV 출력 디렉토리 (기본: 현재 작업 디렉토리)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 로깅 초기화 (guard가 살아 있는 동안만 유효)
    let _log_guard = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "stock_names_collector={0},stock_names_data={0}",
                    cli.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .set_default();

    let mut config = CollectorConfig::from_env().context("설정 로드 실패")?;
    if cli.output_dir.is_some() {
        config.output_dir = cli.output_dir;
    }
    let output_dir = config
        .resolve_output_dir()
        .context("출력 디렉토리 확인 실패")?;
    tracing::debug!(
        krx_base_url = %config.krx_base_url,
        output_dir = %output_dir.display(),
        "설정 로드 완료"
    );

    let provider = KrxMarketDataProvider::with_base_url(&config.krx_base_url)
        .context("KRX Provider 생성 실패")?;
    let collector = Collector::new(Box::new(provider));

    let today = chrono::Local::now().date_naive();
    let report = collector
        .run(today, &output_dir)
        .await
        .context("종목명 수집 실패")?;

    println!("{}", report.message);

    Ok(())
}
