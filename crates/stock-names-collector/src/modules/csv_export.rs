//! CSV 저장 모듈.
//!
//! 스프레드시트 호환을 위해 UTF-8 BOM을 붙여 저장합니다.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{Result, StockRecord};

/// UTF-8 BOM
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV 헤더 (컬럼 순서 고정)
pub const CSV_HEADER: [&str; 3] = ["ticker", "name", "market"];

/// 출력 파일명 (`stock_names_YYYYMMDD.csv`).
pub fn output_file_name(date: NaiveDate) -> String {
    format!("stock_names_{}.csv", date.format("%Y%m%d"))
}

/// 출력 파일 경로.
pub fn output_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(output_file_name(date))
}

/// 종목 레코드를 CSV 파일로 저장.
///
/// 레코드가 없어도 헤더 행은 기록합니다.
pub fn write_records(path: &Path, records: &[StockRecord]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(())
}

/// `write_records`로 저장한 CSV 파일을 다시 읽음.
pub fn read_records(path: &Path) -> Result<Vec<StockRecord>> {
    let bytes = fs::read(path)?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let mut rdr = csv::Reader::from_reader(content);
    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<StockRecord>, csv::Error>>()?;

    Ok(records)
}

/// 저장된 파일 크기 (파일이 없으면 None).
pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|m| m.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_names_data::Market;

    /// 테스트 종료 시 삭제되는 임시 디렉토리.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path =
                std::env::temp_dir().join(format!("stock-names-csv-{}", uuid::Uuid::new_v4()));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn join(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_output_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(output_file_name(date), "stock_names_20240305.csv");
        assert_eq!(
            output_path(Path::new("/data"), date),
            PathBuf::from("/data/stock_names_20240305.csv")
        );
    }

    #[test]
    fn test_write_records_layout() {
        let dir = TempDir::new();
        let path = dir.join("layout.csv");
        let records = vec![
            StockRecord::new("005930", "삼성전자", Market::Kospi),
            StockRecord::new("091990", "셀트리온헬스케어", Market::Kosdaq),
        ];

        write_records(&path, &records).unwrap();
        let bytes = fs::read(&path).unwrap();

        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "ticker,name,market\n005930,삼성전자,KOSPI\n091990,셀트리온헬스케어,KOSDAQ\n"
        );
    }

    #[test]
    fn test_write_records_empty_has_header() {
        let dir = TempDir::new();
        let path = dir.join("empty.csv");

        write_records(&path, &[]).unwrap();
        let bytes = fs::read(&path).unwrap();
        let records = read_records(&path).unwrap();

        assert_eq!(&bytes[UTF8_BOM.len()..], b"ticker,name,market\n");
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_back_quoted_fields() {
        let dir = TempDir::new();
        let path = dir.join("quoted.csv");
        let records = vec![
            StockRecord::new("900110", "이스트아시아홀딩스, Inc.", Market::Kosdaq),
            StockRecord::new("000020", "동화\"약품\"", Market::Kospi),
        ];

        write_records(&path, &records).unwrap();
        let read_back = read_records(&path).unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn test_file_size_missing() {
        let dir = TempDir::new();
        assert_eq!(file_size(&dir.join("does-not-exist.csv")), None);
    }

    #[test]
    fn test_write_records_missing_dir_fails() {
        let dir = TempDir::new();
        let path = dir.join("no-such-dir").join("stock_names_20240102.csv");

        let result = write_records(&path, &[]);

        assert!(matches!(result, Err(crate::CollectorError::Io(_))));
        assert_eq!(file_size(&path), None);
    }
}
