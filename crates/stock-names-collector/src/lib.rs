//! KOSPI/KOSDAQ 종목명 수집기.
//!
//! 이 crate는 다음을 제공합니다:
//! - 시장별 종목 목록 조회 및 종목명 변환 (실패 종목은 건너뜀)
//! - KOSPI → KOSDAQ 순서로 결과 병합
//! - 날짜별 CSV 파일 저장 (`stock_names_YYYYMMDD.csv`, UTF-8 BOM)

pub mod collector;
pub mod config;
pub mod error;
pub mod modules;
pub mod record;
pub mod stats;

pub use collector::{CollectionReport, Collector, COMPLETION_MESSAGE};
pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use record::{ResolveFailure, StockRecord};
pub use stats::CollectionStats;
