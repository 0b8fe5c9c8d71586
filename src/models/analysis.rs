use serde::Deserialize;

/// One point of the historical price series, in payload order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub time: String,
    pub price: f64,
}

/// A stat the analytics service either computed or marked "N/A".
/// The wire value is a bare number or the literal sentinel string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Num(f64),
    Sentinel(String),
}

impl StatValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Num(v) => Some(*v),
            StatValue::Sentinel(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KeyStats {
    #[serde(rename = "mCap")]
    pub m_cap: StatValue,
    pub pe: StatValue,
    pub high52: StatValue,
    pub low52: StatValue,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub publisher: String,
}

/// Everything the analytics service computed for one symbol.
/// Replaced wholesale on every successful fetch, never merged.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub symbol: String,
    pub price: f64,
    pub advice: String,
    /// CSS color the advice badge should be filled with, as sent.
    pub color: String,
    pub rsi: f64,
    #[serde(rename = "chartData")]
    pub chart_data: Vec<ChartPoint>,
    pub stats: KeyStats,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_value_number() {
        let v: StatValue = serde_json::from_str("123400000").unwrap();
        assert_eq!(v.as_number(), Some(123_400_000.0));
    }

    #[test]
    fn test_stat_value_sentinel() {
        let v: StatValue = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(v.as_number(), None);
        assert_eq!(v, StatValue::Sentinel("N/A".to_string()));
    }

    #[test]
    fn test_missing_news_defaults_to_empty() {
        let json = r##"{
            "symbol": "TCS.NS",
            "price": 3842.1,
            "advice": "HOLD",
            "color": "#9ca3af",
            "rsi": 48.2,
            "chartData": [{"time": "2025-01-02", "price": 3800.0}],
            "stats": {"mCap": 123400000, "pe": 28.4, "high52": 4254.75, "low52": 3056.05}
        }"##;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.news.is_empty());
        assert_eq!(result.chart_data.len(), 1);
    }
}
