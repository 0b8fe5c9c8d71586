mod analytics;

pub use analytics::{FetchCompletion, FetchError, spawn_fetch};
