//! 시장 구분.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DataError;

/// 국내 주식 시장.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    /// 유가증권시장
    #[serde(rename = "KOSPI")]
    Kospi,
    /// 코스닥시장
    #[serde(rename = "KOSDAQ")]
    Kosdaq,
}

impl Market {
    /// 수집 순서대로 정렬된 전체 시장.
    pub const ALL: [Market; 2] = [Market::Kospi, Market::Kosdaq];

    /// 시장 이름 (KOSPI, KOSDAQ).
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Kospi => "KOSPI",
            Market::Kosdaq => "KOSDAQ",
        }
    }

    /// KRX 시장 코드 (STK, KSQ).
    pub fn krx_code(&self) -> &'static str {
        match self {
            Market::Kospi => "STK",
            Market::Kosdaq => "KSQ",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "KOSPI" => Ok(Market::Kospi),
            "KOSDAQ" => Ok(Market::Kosdaq),
            other => Err(DataError::ParseError(format!("알 수 없는 시장: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_codes() {
        assert_eq!(Market::Kospi.krx_code(), "STK");
        assert_eq!(Market::Kosdaq.krx_code(), "KSQ");
        assert_eq!(Market::ALL, [Market::Kospi, Market::Kosdaq]);
    }

    #[test]
    fn test_market_parse() {
        assert_eq!("kospi".parse::<Market>().unwrap(), Market::Kospi);
        assert_eq!("KOSDAQ".parse::<Market>().unwrap(), Market::Kosdaq);
        assert!("KONEX".parse::<Market>().is_err());
    }

    #[test]
    fn test_market_display_matches_serde() {
        let json = serde_json::to_string(&Market::Kosdaq).unwrap();
        assert_eq!(json, format!("\"{}\"", Market::Kosdaq));
    }
}
