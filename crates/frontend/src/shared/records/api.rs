use contracts::domain::common::{history_from_body, RecordId, RecordKind, StatusHistoryEntry};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{ListQuery, PageLoad};
use serde_json::{Map, Value};

use crate::shared::api_utils::ApiClient;

/// `/api/{collection}?limit=N&page=M`
pub fn list_url_path(kind: RecordKind, query: &ListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::Malformed(format!("Failed to encode query: {}", e)))?;
    Ok(format!("{}?{}", kind.list_path(), qs))
}

/// Fetch one page of a collection
pub async fn fetch_page(
    client: &ApiClient,
    kind: RecordKind,
    query: ListQuery,
) -> Result<PageLoad, ApiError> {
    let path = list_url_path(kind, &query)?;
    let body = client.get_value(&path).await?;
    let load = PageLoad::from_body(body, query.limit).inspect_err(|e| {
        log::warn!("{} page {}: {}", kind.collection(), query.page, e);
    })?;
    log::info!(
        "Loaded {} {} (page {}, more: {})",
        load.records.len(),
        kind.collection(),
        query.page,
        load.has_more
    );
    Ok(load)
}

/// PATCH the record; the response body is not used
pub async fn update_record(
    client: &ApiClient,
    kind: RecordKind,
    id: RecordId,
    payload: &Map<String, Value>,
) -> Result<(), ApiError> {
    client.patch_json(&kind.item_path(id), payload).await?;
    log::info!("Updated {} {}", kind.as_str(), id);
    Ok(())
}

/// Status history in server order. A record without history answers 404 or
/// `null`; both are an empty history.
pub async fn fetch_history(
    client: &ApiClient,
    kind: RecordKind,
    id: RecordId,
) -> Result<Vec<StatusHistoryEntry>, ApiError> {
    match client.get_value(&kind.history_path(id)).await {
        Ok(body) => history_from_body(body),
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_path_carries_limit_and_page() {
        assert_eq!(
            list_url_path(RecordKind::Delinquency, &ListQuery::for_page(2)).unwrap(),
            "/api/delinquencies?limit=500&page=2"
        );
        assert_eq!(
            list_url_path(RecordKind::Chargeback, &ListQuery { limit: 1, page: 1 }).unwrap(),
            "/api/chargebacks?limit=1&page=1"
        );
    }
}
