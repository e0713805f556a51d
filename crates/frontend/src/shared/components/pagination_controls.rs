use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / next controls for lists whose total size is unknown.
///
/// "Next" is only enabled while the last page came back full.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    has_more: Signal<bool>,

    /// Both buttons are disabled while a page is loading
    #[prop(into)]
    is_loading: Signal<bool>,

    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || current_page.get() <= 1 || is_loading.get()
                title="Previous page"
            >
                {icon("chevron-left")}
                " Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {}", current_page.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !has_more.get() || is_loading.get()
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
