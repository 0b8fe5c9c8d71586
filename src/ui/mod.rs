mod chart;
mod ui_config;
mod ui_panels;
mod view;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{AnalysisPanels, NoticeBanner, PromptPanel, SearchOutcome, SearchPanel};
pub(crate) use view::SessionView;
