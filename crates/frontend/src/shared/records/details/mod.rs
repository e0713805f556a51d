mod status_history;

pub use status_history::StatusHistory;

use contracts::domain::common::{Record, RecordDraft, RecordKind, SaveOutcome, SelectionState};
use contracts::shared::metadata::{FieldSpec, ManifestSection, ValueType};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notification_service::use_notifications;
use crate::shared::api_utils::use_api;
use crate::shared::components::ui::select::{options_from, EnumSelect};
use crate::shared::icons::icon;
use crate::shared::records::api;

/// Side panel with the fields of one record, grouped by manifest section.
///
/// Save sends the whole editable field set; `selection` decides what happens
/// next and `on_saved` runs once when the list has to re-fetch. A failed save
/// keeps the panel open with the edits in place. Cancel drops the edits and
/// closes without a request. Neither cancel nor the overlay close the panel
/// while a save is in flight.
#[component]
pub fn DetailsDrawer(
    kind: RecordKind,
    record: Record,
    selection: RwSignal<SelectionState>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api_handle = use_api();
    let notifications = use_notifications();
    let manifest = kind.manifest();

    let record_id = record.id();
    let draft = RwSignal::new(RecordDraft::new(record));
    let saving = Signal::derive(move || selection.with(|s| s.saving));
    let error = Signal::derive(move || selection.with(|s| s.error.clone()));
    let selected_tab = RwSignal::new(
        manifest
            .sections
            .first()
            .map(|s| s.name.to_string())
            .unwrap_or_default(),
    );

    let cancel = move || {
        if selection.try_update(|s| s.close()).unwrap_or(false) {
            draft.update(|d| d.reset());
        }
    };

    let save = move || {
        let payload = match draft.with_untracked(|d| d.update_payload(&manifest)) {
            Ok(payload) => payload,
            Err(e) => {
                selection.update(|s| s.reject(e.to_string()));
                return;
            }
        };
        let Some(id) = record_id else {
            return;
        };
        if !selection.try_update(|s| s.begin_save()).unwrap_or(false) {
            return;
        }

        let client = api_handle.client();
        spawn_local(async move {
            let result = api::update_record(&client, kind, id, &payload).await;
            match &result {
                Ok(()) => notifications.success(
                    format!("{} saved", kind.singular()),
                    format!("{} {} was updated.", kind.singular(), id),
                ),
                Err(e) => {
                    log::error!("Failed to save {} {}: {}", kind.as_str(), id, e);
                    notifications.error(format!("Failed to save {}", kind.as_str()), e.to_string());
                }
            }
            let outcome = selection.try_update(|s| s.finish_save(result));
            if outcome == Some(SaveOutcome::CloseAndReload) {
                on_saved.run(());
            }
        });
    };

    view! {
        <div class="drawer-overlay" on:click=move |_| cancel()>
            <aside class="drawer" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="drawer__header">
                    <div>
                        <h2 class="drawer__title">{format!("{} Details", kind.singular())}</h2>
                        <p class="drawer__description">
                            {format!("View and manage details for this {}.", kind.as_str())}
                        </p>
                    </div>
                    <button class="button button--icon" on:click=move |_| cancel()>
                        {icon("x")}
                    </button>
                </div>

                <TabList selected_value=selected_tab>
                    {manifest.sections.iter().map(|section| view! {
                        <Tab value=section.name>{section.title}</Tab>
                    }).collect_view()}
                </TabList>

                <div class="drawer__body">
                    {move || error.get().map(|e| view! {
                        <div class="alert alert--error">
                            {icon("alert-triangle")}
                            <span>{e}</span>
                        </div>
                    })}

                    {move || {
                        let name = selected_tab.get();
                        manifest.section(&name).map(|section| {
                            render_section(section, draft, saving)
                        })
                    }}

                    {move || (selected_tab.get() == "status").then(|| record_id.map(|id| view! {
                        <StatusHistory kind=kind id=id />
                    }))}
                </div>

                <div class="drawer__footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| save()
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| cancel()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                </div>
            </aside>
        </div>
    }
}

fn render_section(
    section: &'static ManifestSection,
    draft: RwSignal<RecordDraft>,
    saving: Signal<bool>,
) -> AnyView {
    if section.fields.is_empty() {
        return view! {
            <p class="drawer__empty">{format!("No {} yet.", section.title.to_lowercase())}</p>
        }
        .into_any();
    }

    view! {
        <div class="form">
            {section.fields.iter().map(|field| render_field(field, draft, saving)).collect_view()}
        </div>
    }
    .into_any()
}

fn render_field(field: &'static FieldSpec, draft: RwSignal<RecordDraft>, saving: Signal<bool>) -> AnyView {
    let value = Signal::derive(move || draft.with(|d| d.input(field)));
    let set_value = move |text: String| draft.update(|d| d.set_input(field, text));

    if let Some(options) = field.options {
        return view! {
            <EnumSelect
                label=field.label
                value=value
                on_change=Callback::new(set_value)
                options=options_from(options)
                placeholder="Select a status"
                disabled=saving
                id=field.key
            />
        }
        .into_any();
    }

    let (input_type, step) = match field.value_type {
        ValueType::Currency => ("number", Some("0.01")),
        ValueType::Text => ("text", None),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=field.key>{field.label}</label>
            <input
                id=field.key
                class="form__input"
                type=input_type
                step=step
                readonly=field.read_only
                disabled=move || saving.get()
                prop:value=move || value.get()
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        </div>
    }
    .into_any()
}
