use crate::domain::common::Record;
use crate::shared::format::{format_currency, format_thousands};

/// How a table cell turns a raw field value into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFormat {
    /// Raw field value.
    #[default]
    Text,
    /// `$1,234.56`; blank when the value is missing or not numeric.
    Currency,
    /// Whole number with thousands separators.
    Integer,
}

/// One displayed table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

impl ColumnDescriptor {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: CellFormat::Text,
        }
    }

    pub const fn currency(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: CellFormat::Currency,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self.format, CellFormat::Text)
    }

    /// Cell text for the given row.
    pub fn render(&self, record: &Record) -> String {
        match self.format {
            CellFormat::Text => record.text(self.key),
            CellFormat::Currency => record
                .number(self.key)
                .map(format_currency)
                .unwrap_or_else(|| record.text(self.key)),
            CellFormat::Integer => record
                .number(self.key)
                .map(|v| format_thousands(v.round() as i64))
                .unwrap_or_else(|| record.text(self.key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_columns_format_amounts() {
        let record: Record = serde_json::from_value(json!({
            "billed_total_amount": "1234567.5",
            "debit_outstanding_amount": null,
            "vendor_code": "V01"
        }))
        .unwrap();

        let billed = ColumnDescriptor::currency("billed_total_amount", "Billed");
        let debit = ColumnDescriptor::currency("debit_outstanding_amount", "Debit");
        let vendor = ColumnDescriptor::text("vendor_code", "Vendor Code");

        assert_eq!(billed.render(&record), "$1,234,567.50");
        assert_eq!(debit.render(&record), "");
        assert_eq!(vendor.render(&record), "V01");
    }

    #[test]
    fn integer_columns_group_digits() {
        let record: Record = serde_json::from_value(json!({"n": 12345})).unwrap();
        let column = ColumnDescriptor {
            key: "n",
            label: "N",
            format: CellFormat::Integer,
        };
        assert_eq!(column.render(&record), "12,345");
        assert!(column.is_numeric());
    }
}
