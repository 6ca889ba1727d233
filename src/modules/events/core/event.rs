use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One bulletin board entry.
///
/// The record is opaque: it carries whatever fields the dataset defines and
/// serializes back to an equal JSON object, keys in their original order.
/// Numbers go through `f64`/`i64`/`u64`, so `1.10` comes back as `1.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(Map<String, Value>);

impl Event {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
