//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every session event as it is applied.
    pub log_session_events: bool,

    /// Log request start / completion against the analytics service.
    pub log_fetch: bool,
}

pub const DF: LogFlags = LogFlags {
    log_session_events: false,
    log_fetch: true,
};
