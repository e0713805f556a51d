use leptos::prelude::*;

use super::context::{do_login, use_auth};
use crate::shared::config::AppConfig;

/// Renders children once signed in. Without a configured identity provider
/// the app runs open and children are always shown.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let auth_enabled = config.auth.is_some();
    let config = StoredValue::new(config);

    view! {
        <Show
            when=move || !auth_enabled || auth_state.with(|s| s.access_token.is_some())
            fallback=move || view! {
                <div class="page page--centered">
                    <p>"Please log in to view this page."</p>
                    <button
                        class="button button--primary"
                        on:click=move |_| config.with_value(do_login)
                    >
                        "Log In"
                    </button>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
