use std::sync::mpsc;
use std::thread;

use widget_logging::widget_warn;

use crate::fetch::{ReqwestBackend, SearchBackend, SearchSettings};
use crate::{EngineEvent, SearchError};

enum EngineCommand {
    Search { query: String },
}

/// Owns the background fetch thread; the UI pump talks to it through
/// channels and polls completions with `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let backend = ReqwestBackend::new(settings)?;
        Ok(Self::with_backend(backend))
    }

    /// Commands run one at a time. The dispatch controller already keeps a
    /// single search in flight; serial execution here matches that model.
    pub fn with_backend<B>(backend: B) -> Self
    where
        B: SearchBackend + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(EngineCommand::Search { query }) = cmd_rx.recv() {
                let result = runtime.block_on(backend.search(&query));
                if let Err(err) = &result {
                    widget_warn!("search {query:?} failed: {err}");
                }
                if event_tx
                    .send(EngineEvent::SearchCompleted { query, result })
                    .is_err()
                {
                    break;
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn search(&self, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}
