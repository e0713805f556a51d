//! Read-only grid driven by column descriptors.

use contracts::domain::common::Record;
use contracts::shared::metadata::{CellFormat, ColumnDescriptor};
use leptos::prelude::*;
use thaw::*;

use super::TableCellMoney;

/// One header per descriptor, one row per record, in the order given.
///
/// Clicking a row hands a copy of the record to `on_row_click`.
#[component]
pub fn DataTable(
    #[prop(into)]
    columns: Signal<&'static [ColumnDescriptor]>,
    #[prop(into)]
    rows: Signal<Vec<Record>>,
    on_row_click: Callback<Record>,
    #[prop(optional, into)]
    is_loading: Signal<bool>,
    /// Shown instead of the body when there are no rows
    #[prop(optional, into)]
    empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or_else(|| "No records found.".to_string());

    view! {
        <div class="table-wrapper" class:table-wrapper--loading=move || is_loading.get()>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || columns.get().iter().map(|column| {
                            let class = if column.is_numeric() { "text-right" } else { "" };
                            view! {
                                <TableHeaderCell class=class min_width=120.0>
                                    {column.label}
                                </TableHeaderCell>
                            }
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each={move || rows.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, record)| row_key(*index, record)
                        children=move |(_, record)| {
                            let clicked = record.clone();
                            view! {
                                <TableRow
                                    on:click=move |_| on_row_click.run(clicked.clone())
                                    attr:style="cursor: pointer;"
                                >
                                    {columns.get_untracked().iter().map(|column| {
                                        render_cell(column, &record)
                                    }).collect_view()}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || !is_loading.get() && rows.with(|r| r.is_empty())>
                <div class="table__empty">{empty_text.clone()}</div>
            </Show>
        </div>
    }
}

/// Row identity for `For`. Built from the row's content so a re-fetch that
/// changed any field re-renders the row instead of reusing the old one.
fn row_key(index: usize, record: &Record) -> (usize, String) {
    (index, record.fingerprint())
}

fn render_cell(column: &ColumnDescriptor, record: &Record) -> AnyView {
    match column.format {
        CellFormat::Currency => {
            let value = record.number(column.key);
            view! {
                <TableCellMoney value=value fallback=record.text(column.key) />
            }
            .into_any()
        }
        CellFormat::Integer | CellFormat::Text => {
            let class = if column.is_numeric() { "text-right" } else { "" };
            let text = column.render(record);
            view! {
                <TableCell class=class>
                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn refetched_row_with_edits_gets_a_new_key() {
        let before = record(json!({"id": 41, "vendor_name": "ACME"}));
        let after_save = record(json!({"id": 41, "vendor_name": "Globex"}));

        assert_ne!(row_key(0, &before), row_key(0, &after_save));
        assert_eq!(row_key(0, &before), row_key(0, &before.clone()));
        assert_ne!(row_key(0, &before), row_key(1, &before));
    }
}
