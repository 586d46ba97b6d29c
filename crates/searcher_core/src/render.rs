use crate::record::{FieldMap, TorRecord};

/// A reusable rendered row bound to one display position.
pub trait RowSlot {
    /// Writes `text` into the display slot `slot`; returns false when the
    /// row has no such slot.
    fn set_field(&mut self, slot: &str, text: &str) -> bool;

    /// Shows or hides the row. Hidden rows keep their structure for reuse.
    fn set_visible(&mut self, visible: bool);
}

/// Reconciles completed result lists against a reusable row list.
///
/// Rows are created on demand when results outnumber them, hidden rather
/// than destroyed when the result list shrinks, and overwritten in place
/// when reused.
pub struct SlotRenderer<S, F>
where
    S: RowSlot,
    F: FnMut() -> S,
{
    slots: Vec<S>,
    make_slot: F,
    fields: FieldMap,
}

impl<S, F> SlotRenderer<S, F>
where
    S: RowSlot,
    F: FnMut() -> S,
{
    /// `make_slot` duplicates the row template; it is called once per row
    /// the renderer has to grow by.
    pub fn new(fields: FieldMap, make_slot: F) -> Self {
        Self {
            slots: Vec::new(),
            make_slot,
            fields,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[S] {
        &self.slots
    }

    /// Applies a completed result list to the row list.
    ///
    /// `results` is the reverse of the desired display order and is consumed
    /// from the end: the first row shows the last input element.
    ///
    /// # Panics
    ///
    /// Panics when a mapped display slot is missing from a row, which means
    /// the row template does not match the field table.
    pub fn reconcile(&mut self, mut results: Vec<TorRecord>) {
        for slot in &mut self.slots {
            match results.pop() {
                Some(record) => {
                    slot.set_visible(true);
                    populate(slot, &self.fields, &record);
                }
                // Fewer results than rows: hide the rest, keep them around.
                None => slot.set_visible(false),
            }
        }

        while let Some(record) = results.pop() {
            let mut slot = (self.make_slot)();
            slot.set_visible(true);
            populate(&mut slot, &self.fields, &record);
            self.slots.push(slot);
        }
    }
}

fn populate<S: RowSlot>(slot: &mut S, fields: &FieldMap, record: &TorRecord) {
    for binding in fields.bindings() {
        let text = binding.display(record);
        if !slot.set_field(binding.slot, &text) {
            panic!(
                "no display slot `{}` for field `{}` in row template",
                binding.slot, binding.field
            );
        }
    }
}
