// crates/shared-kernel/src/value_objects/record.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single entity fetched from a collection endpoint.
///
/// Records are opaque JSON objects: only `id`, `title` and foreign-key fields
/// are ever inspected, everything else is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// The `title` field when it is a JSON string.
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Canonical text of a scalar field, used to match keys across collections.
    ///
    /// Keys follow property-name coercion: strings map to their content,
    /// integral numbers to their integer text whatever their JSON spelling
    /// (`1`, `1.0` and `"1"` share a key), and `null` to `"null"`. A missing
    /// field, an array or an object has no key.
    pub fn key_of(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(number_key(n)),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some("null".to_string()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns a copy of this record with `name` set to `value`, replacing any
    /// previous value of that field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Integer text for integral floats below 1e21, where decimal notation is
/// exact; the JSON rendering otherwise.
fn number_key(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            // `+ 0.0` folds -0.0 into 0.0
            format!("{:.0}", f + 0.0)
        }
        _ => n.to_string(),
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
