//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the theme toggle and
//! the log in / log out button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_login, do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"CDMS"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
                <AuthenticationButton />
            </div>
        </div>
    }
}

/// "Log In" while signed out, "Log Out" while signed in. Hidden when no
/// identity provider is configured.
#[component]
fn AuthenticationButton() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let (auth_state, set_auth_state) = use_auth();
    let enabled = config.auth.is_some();
    let config = StoredValue::new(config);

    let is_authenticated = move || auth_state.with(|s| s.access_token.is_some());

    view! {
        <Show when=move || enabled>
            {move || if is_authenticated() {
                view! {
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| config.with_value(|c| do_logout(c, set_auth_state))
                        title="Log Out"
                    >
                        {icon("log-out")}
                        <span>"Log Out"</span>
                    </button>
                }.into_any()
            } else {
                view! {
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| config.with_value(do_login)
                        title="Log In"
                    >
                        {icon("log-in")}
                        <span>"Log In"</span>
                    </button>
                }.into_any()
            }}
        </Show>
    }
}
