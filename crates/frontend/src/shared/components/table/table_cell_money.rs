//! Right-aligned table cell for dollar amounts.

use contracts::shared::format::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Formats as `$1,234.56`. Missing values render as an empty cell.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Text shown when there is no numeric value
    #[prop(optional, into)]
    fallback: String,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_currency(v),
        None => fallback.clone(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if value.get().map(|v| v < 0.0).unwrap_or(false) {
            styles.push("color: var(--color-error-700)");
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
