use contracts::dashboards::d400_chargeback_stats::{
    status_summary_table, trends_table, ChargebackStats, ReportTable,
};
use contracts::shared::format::format_thousands;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_chargeback_stats::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::use_api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table_totals_row::TableTotalsRow;

/// Chargeback status summary, rolling trends and the delinquency total.
#[component]
pub fn ChargebackStatsDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api_handle = use_api();

    let (stats, set_stats) = signal(None::<ChargebackStats>);
    let (stats_error, set_stats_error) = signal(None::<String>);
    let (delinquency_total, set_delinquency_total) = signal(None::<i64>);
    let (total_error, set_total_error) = signal(None::<String>);

    // Reload after uploads as well
    Effect::new(move |_| {
        ctx.data_version.track();
        let client = api_handle.client();
        set_stats_error.set(None);
        set_total_error.set(None);

        let stats_client = client.clone();
        spawn_local(async move {
            match api::fetch_chargeback_stats(&stats_client).await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to fetch chargeback stats: {}", e);
                    set_stats_error.set(Some(e.to_string()));
                }
            }
        });

        spawn_local(async move {
            match api::fetch_delinquency_total(&client).await {
                Ok(total) => set_delinquency_total.set(Some(total)),
                Err(e) => {
                    log::error!("Failed to fetch delinquency total: {}", e);
                    set_total_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let delinquency_value = Signal::derive(move || {
        if total_error.get().is_some() {
            Some("Unavailable".to_string())
        } else {
            delinquency_total.get().map(format_thousands)
        }
    });

    view! {
        <div class="page d400-dashboard">
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>

            {move || stats_error.get().map(|e| view! {
                <div class="alert alert--error">{format!("Failed to load chargeback statistics: {}", e)}</div>
            })}

            {move || match stats.get() {
                Some(data) => view! {
                    <div class="d400-dashboard__tables">
                        <ReportTableView table=status_summary_table(&data) with_totals=true />
                        <ReportTableView table=trends_table(&data) with_totals=false />
                    </div>
                }.into_any(),
                None if stats_error.get().is_none() => view! {
                    <div class="page__loading">"Loading dashboard data..."</div>
                }.into_any(),
                None => view! { <></> }.into_any(),
            }}

            <h2 class="page__subtitle">"Delinquency Overview"</h2>
            <div class="stat-cards">
                <StatCard
                    label="Total Active Delinquencies"
                    icon_name="dollar-sign"
                    value=delinquency_value
                />
            </div>
        </div>
    }
}

/// Static report table. With `with_totals` the last row is styled as totals.
#[component]
fn ReportTableView(table: ReportTable, with_totals: bool) -> impl IntoView {
    let ReportTable {
        title,
        headers,
        mut rows,
    } = table;
    let totals = if with_totals { rows.pop() } else { None };

    view! {
        <div class="report-table">
            <h3 class="report-table__title">{title}</h3>
            <table class="table">
                <thead>
                    <tr>
                        {headers.into_iter().enumerate().map(|(i, h)| view! {
                            <th class:text-right={i > 0}>{h}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>{render_cells(row)}</tr>
                    }).collect_view()}
                    {totals.map(|row| view! {
                        <TableTotalsRow>{render_cells(row)}</TableTotalsRow>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_cells(row: Vec<String>) -> impl IntoView {
    row.into_iter()
        .enumerate()
        .map(|(i, cell)| view! { <td class:text-right={i > 0}>{cell}</td> })
        .collect_view()
}
