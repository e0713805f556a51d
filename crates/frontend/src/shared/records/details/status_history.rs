use contracts::domain::common::{RecordId, RecordKind, StatusHistoryEntry};
use contracts::shared::format::format_timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::use_api;
use crate::shared::records::api;

/// Read-only status history of one record, in the order the server sends.
#[component]
pub fn StatusHistory(kind: RecordKind, id: RecordId) -> impl IntoView {
    let api_handle = use_api();
    let history: RwSignal<Vec<StatusHistoryEntry>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let client = api_handle.client();
    spawn_local(async move {
        match api::fetch_history(&client, kind, id).await {
            Ok(entries) => history.set(entries),
            Err(e) => {
                log::error!("Failed to fetch status history for {} {}: {}", kind.as_str(), id, e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="status-history">
            <h3 class="status-history__title">"Status History"</h3>
            {move || {
                if loading.get() {
                    view! { <p>"Loading status history..."</p> }.into_any()
                } else if let Some(e) = error.get() {
                    view! { <p class="status-history__error">{e}</p> }.into_any()
                } else if history.with(|h| h.is_empty()) {
                    view! { <p>"No status history available."</p> }.into_any()
                } else {
                    view! {
                        <div class="status-history__list">
                            {history.get().into_iter().map(|entry| view! {
                                <div class="status-history__entry">
                                    <p><strong>"Status: "</strong>{entry.status.clone()}</p>
                                    <p><strong>"Date: "</strong>{format_timestamp(&entry.status_date)}</p>
                                    <p><strong>"User: "</strong>{entry.user_display()}</p>
                                    <p><strong>"Notes: "</strong>{entry.notes.clone().unwrap_or_default()}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
