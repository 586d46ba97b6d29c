//! Searcher engine: backend search requests and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ReqwestBackend, SearchBackend, SearchSettings};
pub use types::{EngineEvent, SearchError, TorRecord};
