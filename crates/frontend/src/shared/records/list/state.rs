use contracts::domain::common::{Record, RecordKind};
use contracts::shared::paging::RecordListState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::{use_api, ApiHandle};
use crate::shared::records::api;

/// Reactive list controller of one record collection.
///
/// Holds the page cursor and rows, and issues one request per page change,
/// collection change or external refresh. Only the newest request may write
/// its result.
#[derive(Clone, Copy)]
pub struct RecordListController {
    pub state: RwSignal<RecordListState>,
    pub kind: Signal<RecordKind>,
    api: ApiHandle,
}

/// Creates the controller and starts loading page 1.
///
/// A change of `kind` goes back to page 1. A change of `reload` re-fetches
/// the current page.
pub fn use_record_list(kind: Signal<RecordKind>, reload: Signal<u64>) -> RecordListController {
    let controller = RecordListController {
        state: RwSignal::new(RecordListState::default()),
        kind,
        api: use_api(),
    };

    Effect::new(move |prev: Option<(RecordKind, u64)>| {
        let current = (kind.get(), reload.get());
        match prev {
            Some((prev_kind, _)) if prev_kind == current.0 => {}
            _ => controller.state.update(|s| s.reset()),
        }
        controller.load();
        current
    });

    controller
}

impl RecordListController {
    /// Fetches the current page.
    pub fn load(&self) {
        let kind = self.kind.get_untracked();
        let Some((ticket, query)) = self
            .state
            .try_update(|s| (s.begin_load(), s.paging.query()))
        else {
            return;
        };
        let client = self.api.client();
        let state = self.state;

        spawn_local(async move {
            let outcome = api::fetch_page(&client, kind, query).await;
            if let Err(e) = &outcome {
                log::error!("Failed to fetch {}: {}", kind.collection(), e);
            }
            let applied = state.try_update(|s| s.apply(ticket, outcome)).unwrap_or(false);
            if !applied {
                log::warn!(
                    "Dropped stale response for {} page {}",
                    kind.collection(),
                    query.page
                );
            }
        });
    }

    pub fn next_page(&self) {
        if self.state.try_update(|s| s.paging.next()).unwrap_or(false) {
            self.load();
        }
    }

    pub fn prev_page(&self) {
        if self.state.try_update(|s| s.paging.prev()).unwrap_or(false) {
            self.load();
        }
    }

    pub fn records(&self) -> Signal<Vec<Record>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.records.clone()))
    }

    pub fn page(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.paging.page))
    }

    pub fn has_more(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.paging.has_more))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn total_count(&self) -> Signal<Option<i64>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_count))
    }
}
