use serde::{Deserialize, Serialize};

use super::record::RecordId;
use crate::domain::{a001_chargeback, a002_delinquency};
use crate::shared::metadata::{ColumnDescriptor, FieldManifest};

/// Record collection served by the API.
///
/// Every per-collection difference (paths, titles, columns, drawer fields)
/// is looked up here rather than spread across pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Chargeback,
    Delinquency,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Chargeback, RecordKind::Delinquency];

    /// Discriminator used by the status-history view.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chargeback => "chargeback",
            Self::Delinquency => "delinquency",
        }
    }

    /// Collection segment in API paths.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Chargeback => "chargebacks",
            Self::Delinquency => "delinquencies",
        }
    }

    pub fn list_path(&self) -> String {
        format!("/api/{}", self.collection())
    }

    pub fn item_path(&self, id: RecordId) -> String {
        format!("/api/{}/{}", self.collection(), id)
    }

    pub fn history_path(&self, id: RecordId) -> String {
        format!("/api/{}/history/{}", self.collection(), id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Chargeback => "Chargebacks",
            Self::Delinquency => "Delinquencies",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Chargeback => "Chargeback",
            Self::Delinquency => "Delinquency",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Chargeback => "A list of recent chargebacks from the live API.",
            Self::Delinquency => "A list of recent delinquencies from the live API.",
        }
    }

    pub fn columns(&self) -> &'static [ColumnDescriptor] {
        match self {
            Self::Chargeback => a001_chargeback::COLUMNS,
            Self::Delinquency => a002_delinquency::COLUMNS,
        }
    }

    pub fn manifest(&self) -> FieldManifest {
        match self {
            Self::Chargeback => a001_chargeback::MANIFEST,
            Self::Delinquency => a002_delinquency::MANIFEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_use_collection_segment() {
        assert_eq!(RecordKind::Chargeback.list_path(), "/api/chargebacks");
        assert_eq!(RecordKind::Delinquency.item_path(7), "/api/delinquencies/7");
        assert_eq!(
            RecordKind::Delinquency.history_path(12),
            "/api/delinquencies/history/12"
        );
        assert_eq!(
            RecordKind::Chargeback.history_path(3),
            "/api/chargebacks/history/3"
        );
    }

    #[test]
    fn every_column_is_backed_by_a_manifest_field() {
        for kind in RecordKind::ALL {
            let manifest = kind.manifest();
            for column in kind.columns() {
                assert!(
                    manifest.field(column.key).is_some(),
                    "{} column {} missing from manifest",
                    kind.as_str(),
                    column.key
                );
            }
        }
    }

    #[test]
    fn status_fields_are_closed_choices() {
        let cb = RecordKind::Chargeback.manifest();
        let status = cb.field("current_status").unwrap();
        assert_eq!(status.options.map(|o| o.len()), Some(8));
        assert!(status.allows("Passed to PFS"));
        assert!(!status.allows("Closed"));

        let dq = RecordKind::Delinquency.manifest();
        assert!(dq.field("status").unwrap().options.is_some());
        assert!(dq.field("id").unwrap().read_only);
    }
}
