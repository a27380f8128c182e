//! Thin wrappers over `window` APIs used by the auth flows.
//!
//! Each helper is a no-op (or returns an empty value) outside the browser so
//! pages can call them unconditionally.

/// Show a blocking `window.alert` dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Current page origin, e.g. `https://librovault.app`.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Navigate the whole page to `url`.
///
/// # Errors
///
/// Returns an error string when there is no window or the browser rejects the URL.
pub fn set_href(url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        window
            .location()
            .set_href(url)
            .map_err(|_| format!("navigation to {url} was rejected"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}

/// Current URL fragment without the leading `#`. `None` when empty.
pub fn location_hash() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let fragment = hash.strip_prefix('#').unwrap_or(&hash);
        (!fragment.is_empty()).then(|| fragment.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Drop the fragment from the address bar without adding a history entry.
pub fn clear_location_hash() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("{path}{search}")));
        }
    }
}
