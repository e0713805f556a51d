//! Application configuration
//!
//! Values are baked in at build time through environment variables and
//! provided to components as context:
//!
//! - `CDMS_API_BASE_URL` - API host, e.g. `https://cdms.example.gov`.
//!   Defaults to the page's host on port 8080.
//! - `CDMS_AUTH_DOMAIN`, `CDMS_AUTH_CLIENT_ID`, `CDMS_AUTH_AUDIENCE` - the
//!   external identity provider. Without a domain and client id the app runs
//!   unauthenticated and sends no bearer token.

use crate::shared::api_utils::window_api_base;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthProviderConfig {
    pub domain: String,
    pub client_id: String,
    pub audience: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub auth: Option<AuthProviderConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base = option_env!("CDMS_API_BASE_URL")
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(window_api_base);

        let auth = match (option_env!("CDMS_AUTH_DOMAIN"), option_env!("CDMS_AUTH_CLIENT_ID")) {
            (Some(domain), Some(client_id)) if !domain.is_empty() && !client_id.is_empty() => {
                Some(AuthProviderConfig {
                    domain: domain.to_string(),
                    client_id: client_id.to_string(),
                    audience: option_env!("CDMS_AUTH_AUDIENCE")
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                })
            }
            _ => None,
        };

        if auth.is_none() {
            log::warn!("No identity provider configured; API requests are sent without a token");
        }

        Self { api_base, auth }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl AuthProviderConfig {
    /// Implicit-flow authorize URL; the token comes back in the URL fragment.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        let mut url = format!(
            "https://{}/authorize?response_type=token&client_id={}&redirect_uri={}",
            self.domain,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(redirect_uri),
        );
        if let Some(audience) = &self.audience {
            url.push_str("&audience=");
            url.push_str(&urlencoding::encode(audience));
        }
        url
    }

    pub fn logout_url(&self, return_to: &str) -> String {
        format!(
            "https://{}/v2/logout?client_id={}&returnTo={}",
            self.domain,
            urlencoding::encode(&self.client_id),
            urlencoding::encode(return_to),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AuthProviderConfig {
        AuthProviderConfig {
            domain: "login.example.gov".to_string(),
            client_id: "abc123".to_string(),
            audience: Some("https://cdms-api".to_string()),
        }
    }

    #[test]
    fn authorize_url_encodes_parameters() {
        assert_eq!(
            provider().authorize_url("http://localhost:5173/"),
            "https://login.example.gov/authorize?response_type=token&client_id=abc123\
             &redirect_uri=http%3A%2F%2Flocalhost%3A5173%2F&audience=https%3A%2F%2Fcdms-api"
        );
    }

    #[test]
    fn logout_url_returns_to_origin() {
        assert_eq!(
            provider().logout_url("http://localhost:5173"),
            "https://login.example.gov/v2/logout?client_id=abc123&returnTo=http%3A%2F%2Flocalhost%3A5173"
        );
    }

    #[test]
    fn api_url_joins_base_and_path() {
        let config = AppConfig {
            api_base: "http://10.0.0.5:8080".to_string(),
            auth: None,
        };
        assert_eq!(
            config.api_url("/api/chargebacks"),
            "http://10.0.0.5:8080/api/chargebacks"
        );
    }
}
