//! 데이터 수집 모듈.

pub mod csv_export;
pub mod market_collect;

pub use csv_export::{output_file_name, output_path, read_records, write_records};
pub use market_collect::{aggregate, collect_market, progress_step, MarketCollection};
