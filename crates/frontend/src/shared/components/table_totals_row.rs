use leptos::prelude::*;

/// Totals row for report tables.
///
/// Renders a `<tr>` with the `.table__totals-row` class around the given cells.
#[component]
pub fn TableTotalsRow(
    children: Children,
    /// Extra CSS classes
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! {
        <tr class={row_class}>
            {children()}
        </tr>
    }
}
