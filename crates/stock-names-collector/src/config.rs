//! 환경변수 기반 설정 모듈.
//!
//! 모든 항목은 선택 사항이며, 설정하지 않으면 KRX 기본 주소와
//! 현재 작업 디렉토리를 사용합니다.

use std::path::PathBuf;

use crate::error::CollectorError;
use crate::Result;
use stock_names_data::provider::krx::DEFAULT_BASE_URL;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// KRX 정보데이터시스템 Base URL
    pub krx_base_url: String,
    /// CSV 출력 디렉토리 (None이면 현재 작업 디렉토리)
    pub output_dir: Option<PathBuf>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            krx_base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: None,
        }
    }
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let krx_base_url = env_var_or("KRX_BASE_URL", DEFAULT_BASE_URL);
        if krx_base_url.trim().is_empty() {
            return Err(CollectorError::Config(
                "KRX_BASE_URL 환경변수가 비어 있습니다".to_string(),
            ));
        }

        Ok(Self {
            krx_base_url,
            output_dir: std::env::var("STOCK_NAMES_OUTPUT_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    /// 출력 디렉토리 결정 (미설정 시 현재 작업 디렉토리)
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// 환경변수 값 조회 (없으면 기본값 사용)
fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CollectorConfig::default();
        assert_eq!(config.krx_base_url, "http://data.krx.co.kr");
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_resolve_output_dir_defaults_to_cwd() {
        let config = CollectorConfig::default();
        assert_eq!(
            config.resolve_output_dir().unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_resolve_output_dir_explicit() {
        let config = CollectorConfig {
            output_dir: Some(PathBuf::from("/tmp/stock-names")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_output_dir().unwrap(),
            PathBuf::from("/tmp/stock-names")
        );
    }

    #[test]
    fn test_env_var_or_default() {
        assert_eq!(
            env_var_or("STOCK_NAMES_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
