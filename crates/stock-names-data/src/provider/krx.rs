//! KRX 정보데이터시스템 클라이언트.
//!
//! data.krx.co.kr 의 `getJsonData.cmd` 엔드포인트로 종목 정보를 조회합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use stock_names_data::{KrxMarketDataProvider, Market, MarketDataProvider};
//!
//! let provider = KrxMarketDataProvider::new()?;
//! let tickers = provider.list_tickers(Market::Kospi).await?;
//! let name = provider.ticker_name("005930").await?;
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::MarketDataProvider;
use crate::{DataError, Market, Result};

/// 기본 Base URL.
pub const DEFAULT_BASE_URL: &str = "http://data.krx.co.kr";

const JSON_DATA_PATH: &str = "/comm/bldAttendant/getJsonData.cmd";

/// 전종목 기본정보
const BLD_LISTED_ISSUES: &str = "dbms/MDC/STAT/standard/MDCSTAT01901";
/// 상장종목 검색
const BLD_ISSUE_FINDER: &str = "dbms/comm/finder/finder_stkisu";

/// 전종목 기본정보 응답.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(rename = "OutBlock_1", default)]
    out_block: Option<Vec<ListedIssue>>,
}

#[derive(Debug, Deserialize)]
struct ListedIssue {
    #[serde(rename = "ISU_SRT_CD")]
    ticker: String,
}

/// 상장종목 검색 응답.
#[derive(Debug, Deserialize)]
struct FinderResponse {
    #[serde(default)]
    block1: Option<Vec<FinderIssue>>,
}

#[derive(Debug, Deserialize)]
struct FinderIssue {
    short_code: String,
    #[serde(rename = "codeName")]
    name: String,
}

/// KRX 시장 데이터 Provider.
///
/// 요청 타임아웃은 설정하지 않습니다. 응답이 없으면 호출이 끝날 때까지 대기합니다.
#[derive(Clone)]
pub struct KrxMarketDataProvider {
    client: reqwest::Client,
    base_url: String,
}

impl KrxMarketDataProvider {
    /// 기본 Base URL로 Provider 생성.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// 지정한 Base URL로 Provider 생성 (프록시, 테스트 서버).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(DataError::ConfigError("KRX Base URL이 비어 있습니다".to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0")
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `getJsonData.cmd` 요청 실행.
    async fn post_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, JSON_DATA_PATH);
        let bld = params
            .iter()
            .find(|(k, _)| *k == "bld")
            .map(|(_, v)| *v)
            .unwrap_or_default();

        tracing::debug!(url = %url, bld = bld, "KRX 요청");

        let response = self
            .client
            .post(&url)
            .form(params)
            .header("Referer", format!("{}/contents/MDC/MDI/mdiLoader", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::FetchError(format!(
                "KRX 응답 오류 [{}]: {} - {}",
                bld, status, body
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| DataError::ParseError(format!("KRX 응답 파싱 실패 [{}]: {}", bld, e)))
    }
}

#[async_trait]
impl MarketDataProvider for KrxMarketDataProvider {
    fn name(&self) -> &str {
        "KRX"
    }

    async fn list_tickers(&self, market: Market) -> Result<Vec<String>> {
        let params = [
            ("bld", BLD_LISTED_ISSUES),
            ("mktId", market.krx_code()),
            ("share", "1"),
            ("csvxls_isNo", "false"),
        ];

        let data: ListingResponse = self.post_json(&params).await?;

        let tickers: Vec<String> = data
            .out_block
            .unwrap_or_default()
            .into_iter()
            .map(|issue| issue.ticker)
            .collect();

        tracing::debug!(market = %market, count = tickers.len(), "KRX 종목 목록 조회");
        Ok(tickers)
    }

    async fn ticker_name(&self, ticker: &str) -> Result<String> {
        let params = [
            ("bld", BLD_ISSUE_FINDER),
            ("mktsel", "ALL"),
            ("typeNo", "0"),
            ("searchText", ticker),
        ];

        let data: FinderResponse = self.post_json(&params).await?;

        // 검색은 부분 일치이므로 단축코드가 정확히 같은 항목만 사용
        data.block1
            .unwrap_or_default()
            .into_iter()
            .find(|issue| issue.short_code == ticker)
            .map(|issue| issue.name)
            .ok_or_else(|| DataError::NotFound(format!("종목 {}", ticker)))
    }
}
