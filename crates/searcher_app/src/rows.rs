//! Terminal rows implementing the renderer's slot boundary.

use searcher_core::{tor_field_map, RowSlot};

/// Slot classes of the row template, in display order.
pub fn template_classes() -> Vec<&'static str> {
    tor_field_map()
        .bindings()
        .iter()
        .map(|binding| binding.slot)
        .collect()
}

/// A terminal row: one (class, text) cell per display slot.
pub struct TextRow {
    cells: Vec<(&'static str, String)>,
    visible: bool,
}

impl TextRow {
    pub fn from_template(classes: &[&'static str]) -> Self {
        Self {
            cells: classes
                .iter()
                .map(|class| (*class, String::new()))
                .collect(),
            visible: false,
        }
    }

    /// Rendered line, or `None` while the row is hidden.
    pub fn display_line(&self) -> Option<String> {
        if !self.visible {
            return None;
        }
        let cells: Vec<String> = self
            .cells
            .iter()
            .map(|(class, text)| format!("{class}={text}"))
            .collect();
        Some(cells.join("  "))
    }
}

impl RowSlot for TextRow {
    fn set_field(&mut self, slot: &str, text: &str) -> bool {
        match self.cells.iter_mut().find(|(class, _)| *class == slot) {
            Some((_, cell)) => {
                *cell = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
