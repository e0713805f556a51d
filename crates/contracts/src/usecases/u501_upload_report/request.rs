use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multipart field carrying the report file.
pub const UPLOAD_FIELD_NAME: &str = "report_file";

/// Report formats accepted by `POST /api/upload/{reportType}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    Bc1300,
    Bc1048,
    OutstandingBills,
    VendorCode,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Bc1300,
        ReportType::Bc1048,
        ReportType::OutstandingBills,
        ReportType::VendorCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bc1300 => "BC1300",
            Self::Bc1048 => "BC1048",
            Self::OutstandingBills => "OUTSTANDING_BILLS",
            Self::VendorCode => "VENDOR_CODE",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report type: {0}")]
pub struct UnknownReportType(pub String);

impl FromStr for ReportType {
    type Err = UnknownReportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownReportType(s.to_string()))
    }
}

pub fn upload_path(report_type: ReportType) -> String {
    format!("/api/upload/{}", report_type.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadValidationError {
    #[error("Please select a report type.")]
    MissingReportType,
    #[error("Please select a file to upload.")]
    MissingFile,
}

/// Selections of the upload dialog before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub report_type: Option<ReportType>,
    pub file_name: Option<String>,
}

impl UploadForm {
    /// Both a report type and a file are required; checked before any request.
    pub fn validate(&self) -> Result<ReportType, UploadValidationError> {
        let report_type = self
            .report_type
            .ok_or(UploadValidationError::MissingReportType)?;
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(report_type),
            _ => Err(UploadValidationError::MissingFile),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_types_round_trip_through_identifiers() {
        for t in ReportType::ALL {
            assert_eq!(t.as_str().parse::<ReportType>(), Ok(t));
        }
        assert_eq!(
            "bc1300".parse::<ReportType>(),
            Err(UnknownReportType("bc1300".to_string()))
        );
        assert_eq!(
            serde_json::to_string(&ReportType::OutstandingBills).unwrap(),
            "\"OUTSTANDING_BILLS\""
        );
        assert_eq!(upload_path(ReportType::VendorCode), "/api/upload/VENDOR_CODE");
    }

    #[test]
    fn missing_file_blocks_submission() {
        let form = UploadForm {
            report_type: Some(ReportType::Bc1048),
            file_name: None,
        };
        assert_eq!(form.validate(), Err(UploadValidationError::MissingFile));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please select a file to upload."
        );
    }

    #[test]
    fn report_type_is_checked_first() {
        let form = UploadForm::default();
        assert_eq!(form.validate(), Err(UploadValidationError::MissingReportType));

        let form = UploadForm {
            report_type: None,
            file_name: Some("bc1300.csv".to_string()),
        };
        assert_eq!(form.validate(), Err(UploadValidationError::MissingReportType));
    }

    #[test]
    fn complete_form_yields_report_type() {
        let form = UploadForm {
            report_type: Some(ReportType::Bc1300),
            file_name: Some("bc1300.csv".to_string()),
        };
        assert!(form.is_complete());
        assert_eq!(form.validate(), Ok(ReportType::Bc1300));
    }
}
