use contracts::domain::common::RecordKind;
use leptos::prelude::*;

use crate::shared::records::list::RecordListPage;

#[component]
pub fn ChargebacksPage() -> impl IntoView {
    view! { <RecordListPage kind=RecordKind::Chargeback /> }
}
