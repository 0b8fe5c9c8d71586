mod analysis;
mod catalog;

pub use analysis::{AnalysisResult, ChartPoint, KeyStats, NewsItem, StatValue};
pub use catalog::{MAX_SUGGESTIONS, SYMBOL_CATALOG, suggest};
