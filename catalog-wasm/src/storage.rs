//! Локальное состояние браузера: cookie с access token и настройки
//! интерфейса в localStorage.

use wasm_bindgen::JsCast;

const TOKEN_COOKIE: &str = "access_token";
// Короткоживущий токен: столько же выдаёт каталог.
const TOKEN_MAX_AGE_SECONDS: u32 = 480;
const SIDEBAR_KEY: &str = "catalog_sidebar_collapsed";

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Значение cookie из строки вида `"a=1; b=2"`.
fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn load_token() -> Option<String> {
    let document = html_document()?;
    let raw = document.cookie().ok()?;
    cookie_value(&raw, TOKEN_COOKIE)
}

/// Сохраняет access token в cookie.
///
/// `SameSite=None; Secure`: cookie должна переживать OAuth-редиректы
/// через сторонние домены.
pub(crate) fn save_token(token: &str) -> Result<(), String> {
    let document =
        html_document().ok_or_else(|| "document is not available".to_string())?;
    let cookie = format!(
        "{TOKEN_COOKIE}={token}; path=/; max-age={TOKEN_MAX_AGE_SECONDS}; SameSite=None; Secure"
    );
    document
        .set_cookie(&cookie)
        .map_err(|_| "failed to save token cookie".to_string())
}

pub(crate) fn clear_token() -> Result<(), String> {
    let document =
        html_document().ok_or_else(|| "document is not available".to_string())?;
    let cookie = format!("{TOKEN_COOKIE}=; path=/; max-age=0; SameSite=None; Secure");
    document
        .set_cookie(&cookie)
        .map_err(|_| "failed to clear token cookie".to_string())
}

pub(crate) fn load_sidebar_collapsed() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(Some(store)) = window.local_storage() else {
        return false;
    };
    matches!(store.get_item(SIDEBAR_KEY), Ok(Some(value)) if value == "true")
}

/// Ошибки записи настройки не критичны и молча игнорируются.
pub(crate) fn save_sidebar_collapsed(collapsed: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(store)) = window.local_storage() else {
        return;
    };
    let value = if collapsed { "true" } else { "false" };
    let _ = store.set_item(SIDEBAR_KEY, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_named_cookie() {
        let raw = "theme=dark; access_token=abc.def.ghi; lang=ru";
        assert_eq!(
            cookie_value(raw, "access_token").as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn cookie_value_skips_missing_and_empty() {
        assert!(cookie_value("theme=dark", "access_token").is_none());
        assert!(cookie_value("access_token=; theme=dark", "access_token").is_none());
        assert!(cookie_value("", "access_token").is_none());
    }
}
