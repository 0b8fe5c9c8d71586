#[cfg(debug_assertions)]
use crate::config::DF;
use crate::data::FetchError;
use crate::models::{AnalysisResult, SYMBOL_CATALOG, suggest};

/// Everything that can happen to a session, as discrete events.
/// UI widgets and the fetch channel both speak this vocabulary; nothing
/// else mutates `SessionState`.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    TickerChanged(String),
    SubmitRequested,
    SuggestionPicked(String),
    FetchSucceeded {
        generation: u64,
        result: AnalysisResult,
    },
    FetchFailed {
        generation: u64,
        error: FetchError,
    },
}

/// Side effects a transition asks the app shell to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Spawn a request against the analytics service, tagged so late
    /// arrivals from superseded requests can be told apart.
    StartFetch { symbol: String, generation: u64 },
    /// Show a dismissible banner with this text.
    Notify(String),
}

/// The single source of truth for the session.
///
/// Invariants:
/// - `loading == true` implies `suggestions` is empty.
/// - At most one result is current; a fetch replaces it wholesale.
/// - Only completions tagged with the current `generation` commit.
#[derive(Debug, Default)]
pub struct SessionState {
    pub ticker: String,
    pub suggestions: Vec<String>,
    pub loading: bool,
    pub result: Option<AnalysisResult>,
    generation: u64,
}

impl SessionState {
    /// Apply one event, returning the side effect (if any) the caller
    /// must run. Pure state-in/state-out apart from log lines, so every
    /// transition is testable without a rendering harness.
    pub fn apply(&mut self, event: SessionEvent) -> Option<Effect> {
        #[cfg(debug_assertions)]
        if DF.log_session_events {
            log::info!("session event: {:?}", event);
        }

        match event {
            SessionEvent::TickerChanged(text) => {
                self.ticker = text.trim().to_ascii_uppercase();
                // Suggestions stay hidden while a fetch is in flight.
                self.suggestions = if self.loading {
                    Vec::new()
                } else {
                    suggest(&self.ticker, SYMBOL_CATALOG)
                };
                None
            }
            SessionEvent::SubmitRequested => self.submit(),
            SessionEvent::SuggestionPicked(symbol) => {
                self.ticker = symbol.trim().to_ascii_uppercase();
                self.submit()
            }
            SessionEvent::FetchSucceeded { generation, result } => {
                if generation != self.generation {
                    log::warn!(
                        "dropping stale response for {} (generation {} != {})",
                        result.symbol,
                        generation,
                        self.generation
                    );
                    return None;
                }
                self.loading = false;
                self.result = Some(result);
                None
            }
            SessionEvent::FetchFailed { generation, error } => {
                if generation != self.generation {
                    log::warn!("dropping stale failure (generation {})", generation);
                    return None;
                }
                self.loading = false;
                self.result = None;
                Some(Effect::Notify(error.to_string()))
            }
        }
    }

    /// Empty ticker fails silently; anything else starts a fetch.
    fn submit(&mut self) -> Option<Effect> {
        if self.ticker.is_empty() {
            log::debug!("submit with empty ticker ignored");
            return None;
        }
        self.loading = true;
        self.suggestions.clear();
        self.generation += 1;
        Some(Effect::StartFetch {
            symbol: self.ticker.clone(),
            generation: self.generation,
        })
    }
}
