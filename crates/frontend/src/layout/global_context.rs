use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Dashboard,
    Chargebacks,
    Delinquencies,
    Uploads,
    About,
}

impl AppPage {
    pub const ALL: [AppPage; 5] = [
        AppPage::Dashboard,
        AppPage::Chargebacks,
        AppPage::Delinquencies,
        AppPage::Uploads,
        AppPage::About,
    ];

    /// Value of the `?active=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::Chargebacks => "chargebacks",
            AppPage::Delinquencies => "delinquencies",
            AppPage::Uploads => "uploads",
            AppPage::About => "about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Dashboard",
            AppPage::Chargebacks => "Chargebacks",
            AppPage::Delinquencies => "Delinquencies",
            AppPage::Uploads => "Uploads",
            AppPage::About => "About",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "bar-chart",
            AppPage::Chargebacks => "credit-card",
            AppPage::Delinquencies => "dollar-sign",
            AppPage::Uploads => "upload",
            AppPage::About => "info",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Page named by a `?active=...` query string, if any.
pub fn page_from_search(search: &str) -> Option<AppPage> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| AppPage::from_key(key))
}

pub fn search_for_page(page: AppPage) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "active".to_string(),
        page.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
    pub left_open: RwSignal<bool>,
    /// Bumped whenever server data changed behind the lists' back (uploads).
    pub data_version: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
            left_open: RwSignal::new(true),
            data_version: RwSignal::new(0),
        }
    }

    /// Restores the active page from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: AppPage) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn bump_data_version(&self) {
        self.data_version.update(|v| *v += 1);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_page_round_trips_through_query() {
        for page in AppPage::ALL {
            assert_eq!(page_from_search(&search_for_page(page)), Some(page));
        }
        assert_eq!(search_for_page(AppPage::Uploads), "?active=uploads");
    }

    #[test]
    fn unknown_or_missing_page_is_none() {
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?active=reports"), None);
        assert_eq!(page_from_search("?other=1"), None);
    }
}
