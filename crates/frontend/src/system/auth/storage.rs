use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "cdms_access_token";
const EXPIRES_AT_KEY: &str = "cdms_token_expires_at";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token and its expiry (ms since epoch) to localStorage
pub fn save_access_token(token: &str, expires_at_ms: Option<f64>) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        match expires_at_ms {
            Some(at) => {
                let _ = storage.set_item(EXPIRES_AT_KEY, &format!("{:.0}", at));
            }
            None => {
                let _ = storage.remove_item(EXPIRES_AT_KEY);
            }
        }
    }
}

/// Stored access token, unless it has expired by `now_ms`
pub fn get_access_token(now_ms: f64) -> Option<String> {
    let storage = get_local_storage()?;
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
    let expires_at = storage
        .get_item(EXPIRES_AT_KEY)
        .ok()
        .flatten()
        .and_then(|s| s.parse::<f64>().ok());
    if is_expired(expires_at, now_ms) {
        log::info!("Stored access token expired");
        clear_tokens();
        return None;
    }
    Some(token)
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(EXPIRES_AT_KEY);
    }
}

fn is_expired(expires_at_ms: Option<f64>, now_ms: f64) -> bool {
    expires_at_ms.map(|at| at <= now_ms).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_without_expiry_never_expires() {
        assert!(!is_expired(None, 1e15));
        assert!(!is_expired(Some(2000.0), 1000.0));
        assert!(is_expired(Some(1000.0), 1000.0));
    }
}
