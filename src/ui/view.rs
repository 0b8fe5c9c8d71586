use eframe::egui::Color32;

use crate::app::SessionState;
use crate::models::{AnalysisResult, NewsItem, StatValue};
use crate::ui::ui_config::UI_TEXT;

const CRORE: f64 = 10_000_000.0;

/// What the session currently shows: the empty prompt, the in-flight
/// indicator, or a fully formatted analysis. Loading wins over a held
/// result so a fetch never renders half-stale sections.
pub enum SessionView {
    Prompt,
    Loading,
    Analysis(AnalysisView),
}

pub struct StatLine {
    pub label: &'static str,
    pub value: String,
}

/// The four display sections, pre-formatted. Pure data; the egui panels
/// only draw what is in here.
pub struct AnalysisView {
    pub symbol: String,
    pub price_label: String,
    pub advice: String,
    pub advice_color: Color32,
    pub rsi_value: String,
    pub chart_points: Vec<[f64; 2]>,
    pub chart_dates: Vec<String>,
    pub stats: [StatLine; 4],
    pub news: Vec<NewsItem>,
}

impl SessionView {
    pub fn derive(state: &SessionState) -> SessionView {
        if state.loading {
            return SessionView::Loading;
        }
        match &state.result {
            None => SessionView::Prompt,
            Some(result) => SessionView::Analysis(AnalysisView::from_result(result)),
        }
    }
}

impl AnalysisView {
    fn from_result(result: &AnalysisResult) -> AnalysisView {
        AnalysisView {
            symbol: result.symbol.clone(),
            price_label: format_currency(result.price),
            advice: result.advice.clone(),
            advice_color: parse_css_color(&result.color).unwrap_or(Color32::GRAY),
            rsi_value: result.rsi.to_string(),
            chart_points: result
                .chart_data
                .iter()
                .enumerate()
                .map(|(i, point)| [i as f64, point.price])
                .collect(),
            chart_dates: result.chart_data.iter().map(|p| p.time.clone()).collect(),
            stats: [
                StatLine {
                    label: UI_TEXT.label_market_cap,
                    value: format_market_cap(&result.stats.m_cap),
                },
                StatLine {
                    label: UI_TEXT.label_pe,
                    value: format_pe(&result.stats.pe),
                },
                StatLine {
                    label: UI_TEXT.label_high52,
                    value: format_stat_currency(&result.stats.high52),
                },
                StatLine {
                    label: UI_TEXT.label_low52,
                    value: format_stat_currency(&result.stats.low52),
                },
            ],
            news: result.news.clone(),
        }
    }
}

/// Currency-prefixed, value shown as the service sent it.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", UI_TEXT.currency, value)
}

/// Raw currency units → crore denomination, 2dp. The sentinel passes
/// through untouched, never converted.
pub fn format_market_cap(value: &StatValue) -> String {
    match value {
        StatValue::Num(raw) => format!(
            "{}{:.2}{}",
            UI_TEXT.currency,
            raw / CRORE,
            UI_TEXT.crore_suffix
        ),
        StatValue::Sentinel(text) => text.clone(),
    }
}

/// Zero counts as absent here, matching the service contract.
pub fn format_pe(value: &StatValue) -> String {
    match value.as_number() {
        Some(pe) if pe != 0.0 => pe.to_string(),
        _ => UI_TEXT.not_available.to_string(),
    }
}

pub fn format_stat_currency(value: &StatValue) -> String {
    match value {
        StatValue::Num(v) => format_currency(*v),
        StatValue::Sentinel(text) => text.clone(),
    }
}

/// `#rgb` / `#rrggbb` CSS colors, as the advice palette uses. Anything
/// else is the caller's problem (they fall back to gray).
pub fn parse_css_color(css: &str) -> Option<Color32> {
    let hex = css.strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let r = digits.next()??;
            let g = digits.next()??;
            let b = digits.next()??;
            ((r * 17) as u8, (g * 17) as u8, (b * 17) as u8)
        }
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        _ => return None,
    };
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartPoint, KeyStats};

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            symbol: "TCS.NS".to_string(),
            price: 3842.1,
            advice: "STRONG BUY".to_string(),
            color: "#00d09c".to_string(),
            rsi: 31.55,
            chart_data: vec![
                ChartPoint {
                    time: "2025-01-02".to_string(),
                    price: 3800.0,
                },
                ChartPoint {
                    time: "2025-01-03".to_string(),
                    price: 3842.1,
                },
            ],
            stats: KeyStats {
                m_cap: StatValue::Num(123_400_000.0),
                pe: StatValue::Num(28.4),
                high52: StatValue::Num(4254.75),
                low52: StatValue::Num(3056.05),
            },
            news: vec![NewsItem {
                title: "TCS wins large deal".to_string(),
                publisher: "Mint".to_string(),
            }],
        }
    }

    #[test]
    fn test_market_cap_converts_to_crore() {
        assert_eq!(
            format_market_cap(&StatValue::Num(123_400_000.0)),
            "₹12.34 Cr"
        );
    }

    #[test]
    fn test_market_cap_sentinel_passes_through() {
        assert_eq!(
            format_market_cap(&StatValue::Sentinel("N/A".to_string())),
            "N/A"
        );
    }

    #[test]
    fn test_pe_zero_counts_as_absent() {
        assert_eq!(format_pe(&StatValue::Num(0.0)), "N/A");
        assert_eq!(format_pe(&StatValue::Sentinel("N/A".to_string())), "N/A");
        assert_eq!(format_pe(&StatValue::Num(28.4)), "28.4");
    }

    #[test]
    fn test_stat_currency_prefix() {
        assert_eq!(format_stat_currency(&StatValue::Num(4254.75)), "₹4254.75");
    }

    #[test]
    fn test_css_color_parsing() {
        assert_eq!(parse_css_color("#00d09c"), Some(Color32::from_rgb(0, 208, 156)));
        assert_eq!(parse_css_color("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_css_color("teal"), None);
        assert_eq!(parse_css_color("#12345"), None);
    }

    #[test]
    fn test_loading_wins_over_held_result() {
        let mut state = SessionState::default();
        state.result = Some(sample_result());
        state.loading = true;
        assert!(matches!(SessionView::derive(&state), SessionView::Loading));
    }

    #[test]
    fn test_empty_state_derives_prompt() {
        let state = SessionState::default();
        assert!(matches!(SessionView::derive(&state), SessionView::Prompt));
    }

    #[test]
    fn test_analysis_view_sections() {
        let mut state = SessionState::default();
        state.result = Some(sample_result());

        let view = match SessionView::derive(&state) {
            SessionView::Analysis(view) => view,
            _ => panic!("expected analysis view"),
        };
        assert_eq!(view.price_label, "₹3842.1");
        assert_eq!(view.advice_color, Color32::from_rgb(0, 208, 156));
        assert_eq!(view.rsi_value, "31.55");
        assert_eq!(view.chart_points, vec![[0.0, 3800.0], [1.0, 3842.1]]);
        assert_eq!(view.chart_dates[1], "2025-01-03");
        assert_eq!(view.stats[0].value, "₹12.34 Cr");
        assert_eq!(view.news.len(), 1);
    }
}
