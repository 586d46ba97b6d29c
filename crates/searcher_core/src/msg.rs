use crate::TorRecord;

/// Inputs to the dispatch state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box (per keystroke).
    QueryEdited(String),
    /// User submitted the search form with the current value.
    QuerySubmitted(String),
    /// A fetch started by `Effect::FetchQuery` finished.
    SearchCompleted {
        query: String,
        result: Result<Vec<TorRecord>, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
