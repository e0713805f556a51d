use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="page__title">"About CDMS"</h1>
            <p class="page__lead">
                "The Chargeback & Delinquency Management System (CDMS) is a comprehensive \
                 solution for managing chargebacks and delinquencies. It provides a centralized \
                 platform for tracking, managing, and resolving disputes, helping organizations \
                 streamline their resolution process and reduce losses."
            </p>
        </div>
    }
}
