use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::{NotificationService, Notifications};
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Components read configuration from context only
    provide_context(AppConfig::from_env());
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(NotificationService::new());

    ctx.init_router_integration();

    view! {
        <ThemeProvider>
            <AuthProvider>
                <Shell />
                <Notifications />
            </AuthProvider>
        </ThemeProvider>
    }
}
