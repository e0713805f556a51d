//! In-progress edits of one record in the detail drawer.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::record::{Record, RecordId};
use crate::shared::format::parse_amount;
use crate::shared::metadata::{FieldManifest, FieldSpec, ValueType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Record has no numeric id")]
    MissingId,

    #[error("{label}: \"{input}\" is not a valid amount")]
    InvalidAmount { label: &'static str, input: String },

    #[error("{label}: \"{value}\" is not an allowed value")]
    NotAllowed { label: &'static str, value: String },
}

/// Selected record plus the raw text the user typed per field.
///
/// Inputs survive a failed save so the user can retry; `reset` drops them.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    original: Record,
    inputs: BTreeMap<&'static str, String>,
}

impl RecordDraft {
    pub fn new(record: Record) -> Self {
        Self {
            original: record,
            inputs: BTreeMap::new(),
        }
    }

    pub fn original(&self) -> &Record {
        &self.original
    }

    pub fn id(&self) -> Option<RecordId> {
        self.original.id()
    }

    /// Text currently shown in the control for `field`.
    pub fn input(&self, field: &FieldSpec) -> String {
        if let Some(text) = self.inputs.get(field.key) {
            return text.clone();
        }
        match field.value_type {
            ValueType::Currency => self
                .original
                .number(field.key)
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default(),
            ValueType::Text => self.original.text(field.key),
        }
    }

    pub fn set_input(&mut self, field: &FieldSpec, text: String) {
        if field.read_only {
            return;
        }
        self.inputs.insert(field.key, text);
    }

    pub fn is_dirty(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn reset(&mut self) {
        self.inputs.clear();
    }

    /// Applies the inputs to a copy of the record, validating every field.
    ///
    /// Choice fields must hold one of their declared options (or be empty);
    /// currency inputs must parse as a decimal amount.
    pub fn commit(&self, manifest: &FieldManifest) -> Result<Record, DraftError> {
        let mut record = self.original.clone();

        for field in manifest.editable_fields() {
            if let Some(text) = self.inputs.get(field.key) {
                let value = match field.value_type {
                    ValueType::Currency => {
                        if text.trim().is_empty() {
                            Value::Null
                        } else {
                            let amount = parse_amount(text)
                                .and_then(Number::from_f64)
                                .ok_or_else(|| DraftError::InvalidAmount {
                                    label: field.label,
                                    input: text.clone(),
                                })?;
                            Value::Number(amount)
                        }
                    }
                    ValueType::Text => Value::String(text.clone()),
                };
                record.set(field.key, value);
            } else if field.value_type == ValueType::Currency {
                // Amounts arrive as decimal strings; submit them as numbers.
                if let Some(amount) = record.number(field.key).and_then(Number::from_f64) {
                    record.set(field.key, Value::Number(amount));
                }
            }

            if field.options.is_some() {
                let current = record.text(field.key);
                if !current.is_empty() && !field.allows(&current) {
                    return Err(DraftError::NotAllowed {
                        label: field.label,
                        value: current,
                    });
                }
            }
        }

        Ok(record)
    }

    /// PATCH body: `id` plus every editable field of the manifest.
    pub fn update_payload(&self, manifest: &FieldManifest) -> Result<Map<String, Value>, DraftError> {
        let id = self.id().ok_or(DraftError::MissingId)?;
        let record = self.commit(manifest)?;

        let mut payload = Map::new();
        payload.insert("id".to_string(), Value::from(id));
        for field in manifest.editable_fields() {
            let value = record.get(field.key).cloned().unwrap_or(Value::Null);
            payload.insert(field.key.to_string(), value);
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordKind;
    use serde_json::json;

    fn chargeback() -> Record {
        serde_json::from_value(json!({
            "id": 41,
            "bd_doc_num": "BD-1",
            "customer_name": "GSA Region 4",
            "region": 4,
            "vendor": "ACME",
            "alc": "47000016",
            "customer_tas": "047X4534",
            "org_code": "P1",
            "chargeback_amount": "1500.25",
            "current_status": "Open",
            "gsa_poc": null,
            "pfs_poc": null,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn payload_contains_id_and_editable_fields_only() {
        let manifest = RecordKind::Chargeback.manifest();
        let mut draft = RecordDraft::new(chargeback());
        let status = manifest.field("current_status").unwrap();
        draft.set_input(status, "In Research".to_string());

        let payload = draft.update_payload(&manifest).unwrap();
        assert_eq!(payload["id"], json!(41));
        assert_eq!(payload["current_status"], json!("In Research"));
        assert_eq!(payload["chargeback_amount"], json!(1500.25));
        assert_eq!(payload["gsa_poc"], Value::Null);
        assert!(!payload.contains_key("created_at"));
        assert_eq!(payload.len(), 1 + manifest.editable_fields().count());
    }

    #[test]
    fn rejects_status_outside_enumeration() {
        let manifest = RecordKind::Chargeback.manifest();
        let mut draft = RecordDraft::new(chargeback());
        draft.set_input(manifest.field("current_status").unwrap(), "Closed".to_string());

        assert_eq!(
            draft.update_payload(&manifest),
            Err(DraftError::NotAllowed {
                label: "Current Status",
                value: "Closed".to_string()
            })
        );
    }

    #[test]
    fn currency_input_is_submitted_as_number() {
        let manifest = RecordKind::Chargeback.manifest();
        let amount = manifest.field("chargeback_amount").unwrap();
        let mut draft = RecordDraft::new(chargeback());
        assert_eq!(draft.input(amount), "1500.25");

        draft.set_input(amount, "$2,000.50".to_string());
        let record = draft.commit(&manifest).unwrap();
        assert_eq!(record.get("chargeback_amount"), Some(&json!(2000.5)));

        draft.set_input(amount, "lots".to_string());
        assert!(matches!(
            draft.commit(&manifest),
            Err(DraftError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn failed_validation_keeps_edits_and_reset_discards_them() {
        let manifest = RecordKind::Chargeback.manifest();
        let vendor = manifest.field("vendor").unwrap();
        let status = manifest.field("current_status").unwrap();
        let mut draft = RecordDraft::new(chargeback());
        draft.set_input(vendor, "Globex".to_string());
        draft.set_input(status, "Closed".to_string());

        assert!(draft.commit(&manifest).is_err());
        assert_eq!(draft.input(vendor), "Globex");
        assert!(draft.is_dirty());

        draft.reset();
        assert!(!draft.is_dirty());
        assert_eq!(draft.input(vendor), "ACME");
    }

    #[test]
    fn read_only_fields_ignore_input() {
        let manifest = RecordKind::Chargeback.manifest();
        let id = manifest.field("id").unwrap();
        let mut draft = RecordDraft::new(chargeback());
        draft.set_input(id, "999".to_string());
        assert!(!draft.is_dirty());
        assert_eq!(draft.update_payload(&manifest).unwrap()["id"], json!(41));
    }

    #[test]
    fn missing_id_blocks_payload() {
        let manifest = RecordKind::Delinquency.manifest();
        let draft = RecordDraft::new(Record::default());
        assert_eq!(draft.update_payload(&manifest), Err(DraftError::MissingId));
    }
}
