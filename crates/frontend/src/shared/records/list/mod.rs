mod state;

pub use state::{use_record_list, RecordListController};

use contracts::domain::common::{Record, RecordKind, SelectionState};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::DataTable;
use crate::shared::icons::icon;
use crate::shared::records::details::DetailsDrawer;

/// Paginated table of one collection with the edit drawer on row click.
#[component]
pub fn RecordListPage(#[prop(into)] kind: Signal<RecordKind>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let list = use_record_list(kind, ctx.data_version.into());

    let selection = RwSignal::new(SelectionState::default());
    // Only a different record rebuilds the drawer; saving flags don't.
    let selected = Memo::new(move |_| selection.with(|s| s.selected.clone()));

    let on_row_click = Callback::new(move |record: Record| {
        selection.update(|s| {
            s.select(record);
        });
    });

    let on_saved = Callback::new(move |_: ()| list.load());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || kind.get().title()}</h1>
                    {move || list.total_count().get().map(|count| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{count.to_string()}</Badge>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.load()
                        disabled=list.is_loading()
                    >
                        {move || if list.is_loading().get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>
            <p class="page__description">{move || kind.get().description()}</p>

            <div class="page__content">
                {move || list.error().get().map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert-triangle")}
                        <span>{e}</span>
                    </div>
                })}

                <PaginationControls
                    current_page=list.page()
                    has_more=list.has_more()
                    is_loading=list.is_loading()
                    on_prev=Callback::new(move |_| list.prev_page())
                    on_next=Callback::new(move |_| list.next_page())
                />

                <Show when=move || list.is_loading().get()>
                    <div class="page__loading">
                        <Spinner />
                    </div>
                </Show>

                <DataTable
                    columns=Signal::derive(move || kind.get().columns())
                    rows=list.records()
                    on_row_click=on_row_click
                    is_loading=list.is_loading()
                />
            </div>

            {move || selected.get().map(|record| view! {
                <DetailsDrawer
                    kind=kind.get_untracked()
                    record=record
                    selection=selection
                    on_saved=on_saved
                />
            })}
        </div>
    }
}
