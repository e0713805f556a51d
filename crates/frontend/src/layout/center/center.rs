use crate::dashboards::d400_chargeback_stats::ui::ChargebackStatsDashboard;
use crate::domain::a001_chargeback::ui::list::ChargebacksPage;
use crate::domain::a002_delinquency::ui::list::DelinquenciesPage;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::about::AboutPage;
use crate::usecases::u501_upload_report::UploadsPage;
use leptos::prelude::*;

/// Content area showing the active page.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                AppPage::Dashboard => view! {
                    <RequireAuth><ChargebackStatsDashboard /></RequireAuth>
                }.into_any(),
                AppPage::Chargebacks => view! {
                    <RequireAuth><ChargebacksPage /></RequireAuth>
                }.into_any(),
                AppPage::Delinquencies => view! {
                    <RequireAuth><DelinquenciesPage /></RequireAuth>
                }.into_any(),
                AppPage::Uploads => view! {
                    <RequireAuth><UploadsPage /></RequireAuth>
                }.into_any(),
                AppPage::About => view! { <AboutPage /> }.into_any(),
            }}
        </div>
    }
}
