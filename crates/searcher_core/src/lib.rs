//! Searcher core: pure dispatch state machine and slot reconciler.
mod effect;
mod msg;
mod record;
mod render;
mod state;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use record::{
    tor_field_map, FieldBinding, FieldKind, FieldMap, SchemaError, TorRecord, TOR_RECORD_FIELDS,
};
pub use render::{RowSlot, SlotRenderer};
pub use state::{DispatchStatus, SearchState};
pub use update::update;
