//! Delinquency (non-IPAC) table columns and drawer fields

use crate::domain::common::status_history::CDMS_STATUS_OPTIONS;
use crate::shared::metadata::{ColumnDescriptor, FieldManifest, FieldSpec, ManifestSection};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::text("business_line", "Business Line"),
    ColumnDescriptor::text("document_number", "Document Number"),
    ColumnDescriptor::text("vendor_code", "Vendor Code"),
    ColumnDescriptor::text("status", "Status"),
    ColumnDescriptor::currency("billed_total_amount", "Billed Total Amount"),
    ColumnDescriptor::currency("debit_outstanding_amount", "Debit Outstanding Amount"),
    ColumnDescriptor::currency("credit_outstanding_amount", "Credit Outstanding Amount"),
];

const MAIN: &[FieldSpec] = &[
    FieldSpec::read_only("id", "ID"),
    FieldSpec::text("business_line", "Business Line"),
    FieldSpec::text("document_number", "Document Number"),
    FieldSpec::text("vendor_code", "Vendor Code"),
    FieldSpec::currency("billed_total_amount", "Billed Total Amount"),
    FieldSpec::currency("debit_outstanding_amount", "Debit Outstanding Amount"),
    FieldSpec::currency("credit_outstanding_amount", "Credit Outstanding Amount"),
];

// Delinquencies share the chargeback status enum on the server side.
const STATUS: &[FieldSpec] = &[FieldSpec::choice("status", "Status", CDMS_STATUS_OPTIONS)];

pub const MANIFEST: FieldManifest = FieldManifest {
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
