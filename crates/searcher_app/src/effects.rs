//! Executes controller effects against the engine and the row renderer.

use searcher_core::{tor_field_map, Effect, Msg, SearchState, SlotRenderer};
use searcher_engine::{EngineEvent, EngineHandle};
use widget_logging::{widget_info, widget_warn};

use crate::rows::{template_classes, TextRow};

pub struct EffectRunner {
    engine: EngineHandle,
    renderer: SlotRenderer<TextRow, Box<dyn FnMut() -> TextRow>>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        let template = template_classes();
        let make_slot: Box<dyn FnMut() -> TextRow> =
            Box::new(move || TextRow::from_template(&template));
        Self {
            engine,
            renderer: SlotRenderer::new(tor_field_map(), make_slot),
        }
    }

    pub fn execute(&mut self, state: &SearchState, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchQuery { query } => {
                    widget_info!("fetch search {query:?} ({})", state.status());
                    self.engine.search(query);
                }
                Effect::RenderResults { results } => {
                    println!("found {} ({})", results.len(), state.status());
                    self.renderer.reconcile(results);
                    for row in self.renderer.slots() {
                        if let Some(line) = row.display_line() {
                            println!("{line}");
                        }
                    }
                }
            }
        }
    }

    /// Maps finished engine searches back into controller messages.
    pub fn poll_completions(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(EngineEvent::SearchCompleted { query, result }) = self.engine.try_recv() {
            let result = result.map_err(|err| err.to_string());
            if let Err(message) = &result {
                widget_warn!("search {query:?} failed: {message}");
            }
            msgs.push(Msg::SearchCompleted { query, result });
        }
        msgs
    }
}
