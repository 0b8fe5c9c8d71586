/// Where the analytics service lives. Fixed per deployment; there is no
/// runtime override surface.
pub struct AnalyticsApiConfig {
    pub base_url: &'static str,
}

impl AnalyticsApiConfig {
    pub fn stock_url(&self, symbol: &str) -> String {
        format!("{}/stock/{}", self.base_url, symbol)
    }
}

pub const ANALYTICS: AnalyticsApiConfig = AnalyticsApiConfig {
    base_url: "http://127.0.0.1:8000",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_url_shape() {
        assert_eq!(
            ANALYTICS.stock_url("TCS"),
            "http://127.0.0.1:8000/stock/TCS"
        );
    }
}
