use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::format::parse_amount;

/// Numeric identifier of a record, unique within its collection.
pub type RecordId = i64;

/// One chargeback or delinquency row as returned by the API.
///
/// Rows are kept as a field map so that column descriptors and field
/// manifests can address them by key. Values are scalars (string, number,
/// bool or null).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Numeric `id` of the row; numeric strings are accepted too.
    pub fn id(&self) -> Option<RecordId> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    /// Raw display text: null and missing fields render empty.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Numeric value of a field. Decimal amounts arrive as strings.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_amount(s),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Canonical JSON text of the row. Two fetches of the same id with
    /// different field values give different fingerprints.
    pub fn fingerprint(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reads_id_from_number_or_string() {
        assert_eq!(record(json!({"id": 42})).id(), Some(42));
        assert_eq!(record(json!({"id": "17"})).id(), Some(17));
        assert_eq!(record(json!({"id": null})).id(), None);
        assert_eq!(record(json!({})).id(), None);
    }

    #[test]
    fn text_renders_scalars() {
        let r = record(json!({"a": "x", "b": 3, "c": null, "d": 2.5, "e": true}));
        assert_eq!(r.text("a"), "x");
        assert_eq!(r.text("b"), "3");
        assert_eq!(r.text("c"), "");
        assert_eq!(r.text("d"), "2.5");
        assert_eq!(r.text("e"), "true");
        assert_eq!(r.text("missing"), "");
    }

    #[test]
    fn number_accepts_decimal_strings() {
        let r = record(json!({"amount": "1234.50", "n": 7, "bad": "n/a"}));
        assert_eq!(r.number("amount"), Some(1234.5));
        assert_eq!(r.number("n"), Some(7.0));
        assert_eq!(r.number("bad"), None);
    }

    #[test]
    fn fingerprint_follows_field_values() {
        let before = record(json!({"id": 41, "vendor": "ACME", "amount": "10.00"}));
        let refetched = record(json!({"amount": "10.00", "vendor": "ACME", "id": 41}));
        let edited = record(json!({"id": 41, "vendor": "Globex", "amount": "10.00"}));

        assert_eq!(before.fingerprint(), refetched.fingerprint());
        assert_ne!(before.fingerprint(), edited.fingerprint());
        assert_eq!(before.id(), edited.id());
    }
}
