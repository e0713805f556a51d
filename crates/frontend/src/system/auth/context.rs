use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

use super::storage;
use crate::shared::config::AppConfig;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
}

/// Parameters the identity provider appends to the redirect URL fragment.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct TokenFragment {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Parses `#access_token=...&expires_in=...`. Returns None when the fragment
/// carries neither a token nor an error.
pub fn parse_token_fragment(hash: &str) -> Option<TokenFragment> {
    let fragment: TokenFragment = serde_qs::from_str(hash.trim_start_matches('#')).ok()?;
    if fragment.access_token.is_none() && fragment.error.is_none() {
        return None;
    }
    Some(fragment)
}

/// Picks up a token returned by the identity provider, else restores the
/// stored one.
fn initial_token() -> Option<String> {
    let now = js_sys::Date::now();
    let location = window()?.location();
    let hash = location.hash().unwrap_or_default();

    match parse_token_fragment(&hash) {
        Some(fragment) => {
            clear_fragment();
            if let Some(error) = fragment.error {
                log::error!(
                    "Login failed: {} {}",
                    error,
                    fragment.error_description.unwrap_or_default()
                );
                return None;
            }
            let token = fragment.access_token?;
            let expires_at = fragment.expires_in.map(|s| now + (s as f64) * 1000.0);
            storage::save_access_token(&token, expires_at);
            log::info!("Signed in");
            Some(token)
        }
        None => storage::get_access_token(now),
    }
}

fn clear_fragment() {
    let Some(w) = window() else { return };
    let location = w.location();
    let path = format!(
        "{}{}",
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default()
    );
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}

fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: initial_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Sends the browser to the identity provider's login page
pub fn do_login(config: &AppConfig) {
    let Some(provider) = &config.auth else {
        log::warn!("Login requested but no identity provider is configured");
        return;
    };
    let url = provider.authorize_url(&format!("{}/", origin()));
    if let Some(w) = window() {
        let _ = w.location().set_href(&url);
    }
}

/// Forgets the token locally and ends the provider session
pub fn do_logout(config: &AppConfig, set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");

    if let Some(provider) = &config.auth {
        if let Some(w) = window() {
            let _ = w.location().set_href(&provider.logout_url(&origin()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_from_fragment() {
        let fragment =
            parse_token_fragment("#access_token=eyJabc.def&token_type=Bearer&expires_in=7200")
                .unwrap();
        assert_eq!(fragment.access_token.as_deref(), Some("eyJabc.def"));
        assert_eq!(fragment.expires_in, Some(7200));
    }

    #[test]
    fn parses_provider_error() {
        let fragment =
            parse_token_fragment("#error=access_denied&error_description=Denied").unwrap();
        assert_eq!(fragment.error.as_deref(), Some("access_denied"));
        assert_eq!(fragment.access_token, None);
    }

    #[test]
    fn unrelated_fragment_is_ignored() {
        assert_eq!(parse_token_fragment(""), None);
        assert_eq!(parse_token_fragment("#section-2"), None);
    }
}
