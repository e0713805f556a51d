use contracts::dashboards::d400_chargeback_stats::ChargebackStats;
use contracts::domain::common::RecordKind;
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{ListQuery, ListResponse};

use crate::shared::api_utils::ApiClient;
use crate::shared::records::api::list_url_path;

const STATS_PATH: &str = "/api/dashboard/chargeback-stats";

/// Server-computed chargeback statistics
pub async fn fetch_chargeback_stats(client: &ApiClient) -> Result<ChargebackStats, ApiError> {
    client.get_json(STATS_PATH).await
}

/// Total number of delinquencies, read from a one-row page
pub async fn fetch_delinquency_total(client: &ApiClient) -> Result<i64, ApiError> {
    let path = list_url_path(RecordKind::Delinquency, &ListQuery { limit: 1, page: 1 })?;
    let response: ListResponse = client.get_json(&path).await?;
    Ok(response.total_count.unwrap_or(0))
}
