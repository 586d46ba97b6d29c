use std::fmt;

/// Whether a backend fetch is currently outstanding.
///
/// At most one fetch is in flight at a time; this flag is the mutual
/// exclusion for the single-threaded dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchStatus {
    #[default]
    Idle,
    InFlight,
}

impl fmt::Display for DispatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchStatus::Idle => write!(f, "idle"),
            DispatchStatus::InFlight => write!(f, "in-flight"),
        }
    }
}

/// Mutable dispatch state for one search widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub(crate) status: DispatchStatus,
    pub(crate) pending_query: Option<String>,
    pub(crate) last_query: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> DispatchStatus {
        self.status
    }

    /// The most recent query not yet covered by a dispatched fetch.
    /// Last-write-wins: superseded intermediate queries are dropped.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// Query of the most recent successfully completed fetch.
    /// `None` until the first success, which is distinct from an
    /// empty query: the first real search is never suppressed.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }
}
