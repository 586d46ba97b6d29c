use crate::TorRecord;

/// Side effects requested by `update` and executed by the platform layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue a backend search for `query`.
    FetchQuery { query: String },
    /// Hand a completed result list to the renderer.
    RenderResults { results: Vec<TorRecord> },
}
