use std::fmt;

use serde_json::Value;

/// A single backend search result: an opaque mapping of field names to
/// primitive values. The field schema is fixed per deployment.
pub type TorRecord = serde_json::Map<String, Value>;

/// Record field names the torrent-listing backend is expected to serve.
pub const TOR_RECORD_FIELDS: &[&str] = &[
    "name",
    "state",
    "path",
    "progress",
    "added_on",
    "completion_on",
    "original_size",
    "downloaded",
    "uploaded",
    "secs_active",
    "secs_seeding",
];

/// How a field value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Rendered verbatim.
    Text,
    /// A 0..=1 ratio, rendered as a whole percentage.
    Progress,
}

/// One entry of the display-slot to record-field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    pub slot: &'static str,
    pub field: &'static str,
    pub kind: FieldKind,
}

impl FieldBinding {
    /// Display text for this binding's field in `record`.
    ///
    /// A missing field renders as the empty string. A `Progress` ratio is
    /// scaled by 100 and rounded to a whole percentage; the backend serves
    /// it as either a number or a numeric string.
    pub fn display(&self, record: &TorRecord) -> String {
        let value = record.get(self.field);
        match self.kind {
            FieldKind::Progress => {
                let ratio = value.map(ratio_of).unwrap_or(0.0);
                format!("{}", (ratio * 100.0).round() as i64)
            }
            FieldKind::Text => value.map(text_of).unwrap_or_default(),
        }
    }
}

fn ratio_of(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Startup validation failure: the mapping table references a field the
/// deployment schema does not serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub slot: &'static str,
    pub field: &'static str,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "display slot `{}` is bound to `{}`, which is not a known record field",
            self.slot, self.field
        )
    }
}

impl std::error::Error for SchemaError {}

/// Statically declared display-slot to record-field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    bindings: &'static [FieldBinding],
}

impl FieldMap {
    pub const fn new(bindings: &'static [FieldBinding]) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[FieldBinding] {
        self.bindings
    }

    /// Checks every bound field against the expected record schema.
    /// Run once at startup so a table/schema drift fails before any search.
    pub fn validate_schema(&self, fields: &[&str]) -> Result<(), SchemaError> {
        for binding in self.bindings {
            if !fields.contains(&binding.field) {
                return Err(SchemaError {
                    slot: binding.slot,
                    field: binding.field,
                });
            }
        }
        Ok(())
    }
}

/// The torrent-listing deployment's slot table.
pub fn tor_field_map() -> FieldMap {
    FieldMap::new(TOR_METAS)
}

const TOR_METAS: &[FieldBinding] = &[
    FieldBinding {
        slot: "s-name",
        field: "name",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-state",
        field: "state",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-path",
        field: "path",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-progress",
        field: "progress",
        kind: FieldKind::Progress,
    },
    FieldBinding {
        slot: "s-added",
        field: "added_on",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-completed",
        field: "completion_on",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-size",
        field: "original_size",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-downloaded",
        field: "downloaded",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-uploaded",
        field: "uploaded",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-time-active",
        field: "secs_active",
        kind: FieldKind::Text,
    },
    FieldBinding {
        slot: "s-time-seeding",
        field: "secs_seeding",
        kind: FieldKind::Text,
    },
];
