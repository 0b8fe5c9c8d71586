use std::sync::mpsc::Sender;
use std::thread;

use serde::Deserialize;
use thiserror::Error;
use tokio::runtime::Runtime;

use crate::config::ANALYTICS;
#[cfg(debug_assertions)]
use crate::config::DF;
use crate::models::AnalysisResult;

/// Why a fetch produced nothing. `Display` is the user-facing banner text:
/// service errors verbatim, transport problems as one generic hint.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The service answered, but with an `{error}` payload.
    #[error("{0}")]
    Service(String),

    /// Connection refused, timeout, bad status, or a body that parses as
    /// neither payload shape. Detail is kept for the logs only.
    #[error("Could not reach the analytics service. Check it is running on port 8000.")]
    Connection(String),
}

/// Completion of one request, tagged with the generation it was issued
/// under so the session can drop superseded arrivals.
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub generation: u64,
    pub outcome: Result<AnalysisResult, FetchError>,
}

/// The two body shapes `/stock/{symbol}` answers with. Both arrive with a
/// success transport status; `{error}` is an application-level failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnalyticsResponse {
    Failure { error: String },
    Payload(AnalysisResult),
}

async fn fetch_analysis(symbol: &str) -> Result<AnalysisResult, FetchError> {
    let url = ANALYTICS.stock_url(symbol);

    #[cfg(debug_assertions)]
    if DF.log_fetch {
        log::info!("GET {}", url);
    }

    let response = reqwest::get(&url)
        .await
        .map_err(|e| FetchError::Connection(e.to_string()))?
        .error_for_status()
        .map_err(|e| FetchError::Connection(e.to_string()))?;

    match response
        .json::<AnalyticsResponse>()
        .await
        .map_err(|e| FetchError::Connection(e.to_string()))?
    {
        AnalyticsResponse::Payload(result) => Ok(result),
        AnalyticsResponse::Failure { error } => Err(FetchError::Service(error)),
    }
}

/// Run one request on its own thread and deliver the outcome through `tx`.
/// The UI thread drains the channel each frame; nothing here touches
/// session state, and a superseded request is never aborted mid-flight.
pub fn spawn_fetch(symbol: String, generation: u64, tx: Sender<FetchCompletion>) {
    thread::spawn(move || {
        let outcome = match Runtime::new() {
            Ok(rt) => rt.block_on(fetch_analysis(&symbol)),
            Err(e) => Err(FetchError::Connection(format!("runtime: {}", e))),
        };

        if let Err(err) = &outcome {
            log::warn!("fetch for {} failed: {:?}", symbol, err);
        }
        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!("fetch for {} done (generation {})", symbol, generation);
        }

        // Receiver gone means the app is shutting down.
        let _ = tx.send(FetchCompletion {
            generation,
            outcome,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatValue;

    const SUCCESS_BODY: &str = r##"{
        "symbol": "TCS.NS",
        "price": 3842.1,
        "advice": "STRONG BUY",
        "color": "#00d09c",
        "rsi": 31.55,
        "chartData": [
            {"time": "2025-01-02", "price": 3800.0},
            {"time": "2025-01-03", "price": 3842.1}
        ],
        "stats": {"mCap": 123400000, "pe": "N/A", "high52": 4254.75, "low52": 3056.05},
        "news": [
            {"title": "TCS wins large deal", "publisher": "Mint"},
            {"title": "IT stocks rally", "publisher": "Market News"}
        ]
    }"##;

    #[test]
    fn test_success_body_parses_to_payload() {
        let body: AnalyticsResponse = serde_json::from_str(SUCCESS_BODY).unwrap();
        let result = match body {
            AnalyticsResponse::Payload(result) => result,
            AnalyticsResponse::Failure { error } => panic!("unexpected failure: {}", error),
        };
        assert_eq!(result.symbol, "TCS.NS");
        assert_eq!(result.advice, "STRONG BUY");
        assert_eq!(result.chart_data[1].price, 3842.1);
        assert_eq!(result.stats.pe, StatValue::Sentinel("N/A".to_string()));
        assert_eq!(result.news[1].publisher, "Market News");
    }

    #[test]
    fn test_error_body_parses_to_failure() {
        let body: AnalyticsResponse =
            serde_json::from_str(r#"{"error": "Stock data not found. Please check the ticker symbol."}"#)
                .unwrap();
        match body {
            AnalyticsResponse::Failure { error } => {
                assert!(error.starts_with("Stock data not found"));
            }
            AnalyticsResponse::Payload(_) => panic!("expected failure shape"),
        }
    }

    #[test]
    fn test_unrecognized_body_is_rejected() {
        assert!(serde_json::from_str::<AnalyticsResponse>(r#"{"bogus": 1}"#).is_err());
        assert!(serde_json::from_str::<AnalyticsResponse>("not json").is_err());
    }

    #[test]
    fn test_service_error_text_surfaces_verbatim() {
        let err = FetchError::Service("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_connection_error_text_is_generic() {
        let err = FetchError::Connection("connection refused".to_string());
        assert!(err.to_string().contains("port 8000"));
        assert!(!err.to_string().contains("refused"));
    }
}
