//! Cookie-backed session store.
//!
//! Client-side (hydrate): reads and writes `document.cookie`, with values
//! percent-encoded so entries like full names containing spaces survive the
//! round-trip. Server-side (SSR): writes are no-ops and reads return
//! `None`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::session::store::SessionStore;

/// `expires` timestamp that deletes a cookie immediately.
#[cfg(any(test, feature = "hydrate"))]
const EPOCH_EXPIRY: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// `SessionStore` over `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl SessionStore for CookieStore {
    fn set(&self, key: &str, value: &str, ttl_days: Option<u32>) {
        #[cfg(feature = "hydrate")]
        {
            let encoded = String::from(js_sys::encode_uri_component(value));
            let expires = ttl_days.map(expiry_timestamp);
            write_cookie(&format_set_cookie(key, &encoded, expires.as_deref()));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value, ttl_days);
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = parse_cookie_value(&read_cookies()?, key)?;
            Some(js_sys::decode_uri_component(&raw).map_or(raw, String::from))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            write_cookie(&format_expired_cookie(key));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn clear_all(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(cookies) = read_cookies() {
                for name in parse_cookie_names(&cookies) {
                    write_cookie(&format_expired_cookie(&name));
                }
            }
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn format_set_cookie(key: &str, value: &str, expires: Option<&str>) -> String {
    match expires {
        Some(timestamp) => format!("{key}={value}; expires={timestamp}; path=/"),
        None => format!("{key}={value}; path=/"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn format_expired_cookie(key: &str) -> String {
    format!("{key}=; expires={EPOCH_EXPIRY}; path=/")
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_cookie_value(cookies: &str, key: &str) -> Option<String> {
    cookies.split(';').find_map(|entry| {
        let (name, value) = entry.split_once('=')?;
        (name.trim() == key).then(|| value.to_owned())
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_cookie_names(cookies: &str) -> Vec<String> {
    cookies
        .split(';')
        .filter_map(|entry| {
            let name = entry.split_once('=').map_or(entry, |(name, _)| name).trim();
            (!name.is_empty()).then(|| name.to_owned())
        })
        .collect()
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn read_cookies() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn write_cookie(cookie: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(cookie);
    }
}

#[cfg(feature = "hydrate")]
fn expiry_timestamp(days: u32) -> String {
    let date = js_sys::Date::new_0();
    date.set_time(date.get_time() + f64::from(days) * 86_400_000.0);
    String::from(date.to_utc_string())
}
