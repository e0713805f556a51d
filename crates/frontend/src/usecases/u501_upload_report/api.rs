use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_upload_report::{upload_path, ReportType, UPLOAD_FIELD_NAME};
use web_sys::{File, FormData};

use crate::shared::api_utils::ApiClient;

/// Submit one report file as `multipart/form-data`
pub async fn upload_report(
    client: &ApiClient,
    report_type: ReportType,
    file: &File,
) -> Result<(), ApiError> {
    let form = FormData::new()
        .map_err(|e| ApiError::Network(format!("Failed to create FormData: {:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
        .map_err(|e| ApiError::Network(format!("Failed to attach file: {:?}", e)))?;

    log::info!("Uploading {} as {}", file.name(), report_type);
    client.post_form(&upload_path(report_type), form).await
}
