//! Configuration module for the tradepulse application.

mod analytics;
mod debug;

pub use analytics::{ANALYTICS, AnalyticsApiConfig};
pub use debug::DF;
