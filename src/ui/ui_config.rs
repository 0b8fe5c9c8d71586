use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub card: Color32,
    pub card_deep: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub text_faint: Color32,
    pub banner_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub content_max_width: f32,
    pub chart_height: f32,
    pub price_font_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::BLACK,
        card: Color32::from_rgb(17, 17, 17),
        card_deep: Color32::from_rgb(15, 18, 22),
        border: Color32::from_rgb(34, 34, 34),
        accent: Color32::from_rgb(0, 208, 156),
        text: Color32::WHITE,
        text_dim: Color32::from_rgb(128, 139, 150),
        text_faint: Color32::from_rgb(93, 109, 126),
        banner_border: Color32::from_rgb(255, 77, 77),
    },
    content_max_width: 900.0,
    chart_height: 300.0,
    price_font_size: 36.0,
};

impl UiConfig {
    /// Frame for the full-window background
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(30),
            ..Default::default()
        }
    }

    /// Frame for the search bar row
    pub fn search_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, Color32::from_rgb(45, 52, 54)),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }

    /// Frame for the suggestion overlay beneath the search bar
    pub fn suggestion_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(4),
            ..Default::default()
        }
    }

    /// Frame for the header + chart card
    pub fn chart_card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_deep,
            stroke: Stroke::new(1.0, self.colors.border),
            corner_radius: CornerRadius::same(20),
            inner_margin: Margin::same(25),
            ..Default::default()
        }
    }

    /// Frame for stat boxes and news items
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.border),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(15),
            ..Default::default()
        }
    }

    /// Frame for the error notification banner
    pub fn banner_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.banner_border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}

pub struct UiText {
    pub app_title: &'static str,
    pub search_hint: &'static str,
    pub analyze_button: &'static str,
    pub analyzing_button: &'static str,
    pub prompt_line: &'static str,
    pub stats_heading: &'static str,
    pub news_heading: &'static str,
    pub label_market_cap: &'static str,
    pub label_pe: &'static str,
    pub label_high52: &'static str,
    pub label_low52: &'static str,
    pub label_rsi: &'static str,
    pub news_source_prefix: &'static str,
    pub not_available: &'static str,
    pub currency: &'static str,
    pub crore_suffix: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "TradePulse AI",
    search_hint: "Search Stock (e.g. TCS, RELIANCE)...",
    analyze_button: "Analyze",
    analyzing_button: "Analyzing...",
    prompt_line: "Enter a stock ticker to start analysis",
    stats_heading: "Key Statistics",
    news_heading: "Latest Market News",
    label_market_cap: "Market Cap",
    label_pe: "P/E Ratio",
    label_high52: "52W High",
    label_low52: "52W Low",
    label_rsi: "RSI:",
    news_source_prefix: "Source: ",
    not_available: "N/A",
    currency: "₹",
    crore_suffix: " Cr",
};
