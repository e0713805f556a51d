//! API utilities for frontend-backend communication
//!
//! Every request goes through [`ApiClient`], which carries the configured
//! API base and, when the user is signed in, the bearer token. Responses are
//! turned into [`ApiError`] on failure; nothing here retries.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::config::AppConfig;
use crate::system::auth::context::{use_auth, AuthState};

/// Default API base when none is configured: the page's host on port 8080.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn window_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Snapshot of configuration and credentials for one request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub config: AppConfig,
    pub token: Option<String>,
}

/// Copyable access to the API from components and event handlers.
///
/// Each call to [`ApiHandle::client`] reads the current token, so a login
/// that happens after the component was created is picked up.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    config: StoredValue<AppConfig>,
    auth: ReadSignal<AuthState>,
}

impl ApiHandle {
    pub fn client(&self) -> ApiClient {
        ApiClient {
            config: self.config.get_value(),
            token: self.auth.with_untracked(|s| s.access_token.clone()),
        }
    }
}

pub fn use_api() -> ApiHandle {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let (auth, _) = use_auth();
    ApiHandle {
        config: StoredValue::new(config),
        auth,
    }
}

impl ApiClient {
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// GET returning the raw JSON body.
    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.config.api_url(path);
        log::info!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_ok(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.get_value(path).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// PATCH with a JSON body; a 204 answer yields `Value::Null`.
    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.config.api_url(path);
        log::info!("PATCH {}", url);
        let response = self
            .authorize(Request::patch(&url))
            .json(body)
            .map_err(|e| ApiError::Malformed(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        let response = ensure_ok(response).await?;
        if response.status() == 204 {
            return Ok(Value::Null);
        }
        let text = response.text().await.map_err(network_error)?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// POST a multipart form. The browser sets the multipart content type.
    pub async fn post_form(&self, path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
        let url = self.config.api_url(path);
        log::info!("POST {} (multipart)", url);
        let response = self
            .authorize(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Malformed(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response).await?;
        Ok(())
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::error!("{} {} failed: {}", status, response.url(), err);
    Err(err)
}
