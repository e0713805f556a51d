pub mod request;

pub use request::{
    upload_path, ReportType, UnknownReportType, UploadForm, UploadValidationError,
    UPLOAD_FIELD_NAME,
};
