//! Field manifests for the detail/edit drawer.

/// Value-type hint for a field in the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    #[default]
    Text,
    /// Edited as a decimal amount, submitted as a JSON number.
    Currency,
}

/// One field shown in a drawer section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub value_type: ValueType,
    /// Closed vocabulary; when set, the field is edited with a selector.
    pub options: Option<&'static [&'static str]>,
    pub read_only: bool,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value_type: ValueType::Text,
            options: None,
            read_only: false,
        }
    }

    pub const fn currency(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value_type: ValueType::Currency,
            options: None,
            read_only: false,
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            value_type: ValueType::Text,
            options: Some(options),
            read_only: false,
        }
    }

    pub const fn read_only(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value_type: ValueType::Text,
            options: None,
            read_only: true,
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        match self.options {
            Some(options) => options.contains(&value),
            None => true,
        }
    }
}

/// Named group of fields ("main", "status", "comments").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestSection {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldManifest {
    pub sections: &'static [ManifestSection],
}

impl FieldManifest {
    pub fn section(&self, name: &str) -> Option<&'static ManifestSection> {
        let sections: &'static [ManifestSection] = self.sections;
        sections.iter().find(|s| s.name == name)
    }

    /// All fields in section order.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let sections: &'static [ManifestSection] = self.sections;
        sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn editable_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields().filter(|f| !f.read_only)
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["Open", "New"];

    const MAIN: &[FieldSpec] = &[
        FieldSpec::read_only("id", "ID"),
        FieldSpec::currency("amount", "Amount"),
    ];
    const STATUS: &[FieldSpec] = &[FieldSpec::choice("status", "Status", OPTIONS)];

    const MANIFEST: FieldManifest = FieldManifest {
        sections: &[
            ManifestSection {
                name: "main",
                title: "Details",
                fields: MAIN,
            },
            ManifestSection {
                name: "status",
                title: "Status",
                fields: STATUS,
            },
            ManifestSection {
                name: "comments",
                title: "Comments",
                fields: &[],
            },
        ],
    };

    #[test]
    fn lookups_follow_section_order() {
        let keys: Vec<_> = MANIFEST.fields().map(|f| f.key).collect();
        assert_eq!(keys, vec!["id", "amount", "status"]);

        let editable: Vec<_> = MANIFEST.editable_fields().map(|f| f.key).collect();
        assert_eq!(editable, vec!["amount", "status"]);

        assert_eq!(MANIFEST.section("comments").map(|s| s.fields.len()), Some(0));
        assert!(MANIFEST.section("history").is_none());
        assert_eq!(
            MANIFEST.field("amount").map(|f| f.value_type),
            Some(ValueType::Currency)
        );
    }

    #[test]
    fn choice_fields_only_allow_declared_values() {
        let status = MANIFEST.field("status").unwrap();
        assert!(status.allows("Open"));
        assert!(!status.allows("Closed"));
        assert!(MANIFEST.field("amount").unwrap().allows("anything"));
    }
}
