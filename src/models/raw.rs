use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One untyped record as it appears in the source JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Textual value of a field. Blank strings, nulls, arrays and objects
    /// read as absent; numbers and booleans read as their JSON text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Like [`RawRecord::text`] but keeps surrounding whitespace.
    pub fn raw_text(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> RawRecord {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_text_trims_and_drops_blank() {
        let r = record(json!({"client": "  ACME ", "name": "   ", "project": null}));
        assert_eq!(r.text("client").as_deref(), Some("ACME"));
        assert_eq!(r.text("name"), None);
        assert_eq!(r.text("project"), None);
        assert_eq!(r.text("missing"), None);
    }

    #[test]
    fn test_text_reads_scalars() {
        let r = record(json!({"project": 42, "flag": true, "list": [1, 2]}));
        assert_eq!(r.text("project").as_deref(), Some("42"));
        assert_eq!(r.text("flag").as_deref(), Some("true"));
        assert_eq!(r.text("list"), None);
    }
}
