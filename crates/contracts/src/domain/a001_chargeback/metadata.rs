//! Chargeback table columns and drawer fields

use crate::domain::common::status_history::CDMS_STATUS_OPTIONS;
use crate::shared::metadata::{ColumnDescriptor, FieldManifest, FieldSpec, ManifestSection};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::text("current_status", "Status"),
    ColumnDescriptor::text("bd_doc_num", "Document Number"),
    ColumnDescriptor::text("customer_name", "Customer Name"),
    ColumnDescriptor::text("region", "Region"),
    ColumnDescriptor::text("vendor", "Vendor"),
    ColumnDescriptor::text("alc", "ALC"),
    ColumnDescriptor::text("customer_tas", "Customer TAS"),
    ColumnDescriptor::text("org_code", "Org Code"),
    ColumnDescriptor::currency("chargeback_amount", "Chargeback Amount"),
];

const MAIN: &[FieldSpec] = &[
    FieldSpec::read_only("id", "ID"),
    FieldSpec::text("bd_doc_num", "Document Number"),
    FieldSpec::text("customer_name", "Customer Name"),
    FieldSpec::text("region", "Region"),
    FieldSpec::text("vendor", "Vendor"),
    FieldSpec::text("alc", "ALC"),
    FieldSpec::text("customer_tas", "Customer TAS"),
    FieldSpec::text("org_code", "Org Code"),
    FieldSpec::currency("chargeback_amount", "Chargeback Amount"),
];

const STATUS: &[FieldSpec] = &[
    FieldSpec::choice("current_status", "Current Status", CDMS_STATUS_OPTIONS),
    FieldSpec::text("gsa_poc", "GSA POC"),
    FieldSpec::text("pfs_poc", "PFS POC"),
];

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
