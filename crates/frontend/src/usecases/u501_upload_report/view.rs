use super::api;
use contracts::shared::api_error::ApiError;
use contracts::usecases::u501_upload_report::{ReportType, UploadForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::HtmlInputElement;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::use_notifications;
use crate::shared::api_utils::use_api;
use crate::shared::components::ui::EnumSelect;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Upload submitted during this session.
#[derive(Clone, Debug, PartialEq)]
struct UploadRecord {
    report_type: ReportType,
    file_name: String,
    uploaded_at: String,
}

#[component]
pub fn UploadsPage() -> impl IntoView {
    let (show_modal, set_show_modal) = signal(false);
    let recent: RwSignal<Vec<UploadRecord>> = RwSignal::new(Vec::new());

    let on_uploaded = Callback::new(move |(report_type, file_name): (ReportType, String)| {
        let uploaded_at = chrono::Local::now().format("%m/%d/%Y, %I:%M:%S %p").to_string();
        recent.update(|r| {
            r.insert(
                0,
                UploadRecord {
                    report_type,
                    file_name,
                    uploaded_at,
                },
            )
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Uploads"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_modal.set(true)
                    >
                        {icon("upload")}
                        " Upload Report"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    let items = recent.get();
                    if items.is_empty() {
                        view! { <p class="page__empty">"No reports uploaded in this session."</p> }.into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Report Type"</th>
                                        <th>"File"</th>
                                        <th>"Uploaded At"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items.into_iter().map(|u| view! {
                                        <tr>
                                            <td>{u.report_type.as_str()}</td>
                                            <td>{u.file_name}</td>
                                            <td>{u.uploaded_at}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>

            <Show when=move || show_modal.get()>
                <UploadReportModal
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_uploaded=on_uploaded
                />
            </Show>
        </div>
    }
}

/// Report type + file form. Validates locally before any request, then posts
/// the file once.
#[component]
pub fn UploadReportModal(
    on_close: Callback<()>,
    /// Called after the server accepted the upload
    #[prop(optional)]
    on_uploaded: Option<Callback<(ReportType, String)>>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notifications = use_notifications();
    let api_handle = use_api();

    let (report_type, set_report_type) = signal(None::<ReportType>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (is_uploading, set_is_uploading) = signal(false);
    // web_sys::File is not Send+Sync, store locally
    let file = StoredValue::new_local(None::<web_sys::File>);

    let form = move || UploadForm {
        report_type: report_type.get(),
        file_name: file_name.get(),
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let selected = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0));
        set_file_name.set(selected.as_ref().map(|f| f.name()));
        file.set_value(selected);
    };

    let submit = move || {
        if is_uploading.get_untracked() {
            return;
        }
        let form = UploadForm {
            report_type: report_type.get_untracked(),
            file_name: file_name.get_untracked(),
        };
        let report_type = match form.validate() {
            Ok(report_type) => report_type,
            Err(e) => {
                notifications.error("Upload", e.to_string());
                return;
            }
        };
        let Some(selected) = file.get_value() else {
            notifications.error("Upload", "Please select a file to upload.");
            return;
        };

        set_is_uploading.set(true);
        let client = api_handle.client();
        spawn_local(async move {
            let name = selected.name();
            match api::upload_report(&client, report_type, &selected).await {
                Ok(()) => {
                    set_is_uploading.set(false);
                    notifications.success("Upload successful!", format!("{} ({})", name, report_type));
                    ctx.bump_data_version();
                    if let Some(cb) = on_uploaded {
                        cb.run((report_type, name));
                    }
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Upload of {} failed: {}", name, e);
                    set_is_uploading.set(false);
                    let message = match &e {
                        ApiError::Network(_) => e.to_string(),
                        _ => format!("Upload failed: {}", e),
                    };
                    notifications.error("Upload failed", message);
                }
            }
        });
    };

    let report_type_value = Signal::derive(move || {
        report_type
            .get()
            .map(|t| t.as_str().to_string())
            .unwrap_or_default()
    });
    let report_type_options: Vec<(String, String)> = ReportType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
        .collect();

    view! {
        <Modal
            title="Upload Report".to_string()
            on_close=on_close
            footer=std::sync::Arc::new(move || view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || is_uploading.get() || !form().is_complete())
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </Button>
            }.into_any())
        >
            <p class="modal-description">"Select the report type and the file to upload."</p>
            <EnumSelect
                label="Report Type"
                value=report_type_value
                on_change=Callback::new(move |value: String| {
                    set_report_type.set(value.parse::<ReportType>().ok())
                })
                options=report_type_options
                placeholder="Select a report type"
                disabled=is_uploading
                id="reportType"
            />
            <div class="form__group">
                <label class="form__label" for="file">"File"</label>
                <input
                    id="file"
                    class="form__input"
                    type="file"
                    disabled=move || is_uploading.get()
                    on:change=on_file_change
                />
            </div>
        </Modal>
    }
}
