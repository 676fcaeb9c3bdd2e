//! Language cookie shared with any server-rendered surface.

/// Cookie carrying the selected content language code.
pub const LANGUAGE_COOKIE: &str = "language";
const ONE_YEAR_SECS: u64 = 60 * 60 * 24 * 365;

/// Finds `name` in a `document.cookie` style string.
pub fn read_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Formats the `Set-Cookie` style assignment for the language cookie.
pub fn language_cookie_assignment(code: &str) -> String {
    format!("{LANGUAGE_COOKIE}={code}; path=/; max-age={ONE_YEAR_SECS}; SameSite=Lax")
}

/// Reads the language cookie from the current document.
pub fn language_cookie() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        let header = document.cookie().ok()?;
        read_cookie(&header, LANGUAGE_COOKIE)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Writes the language cookie with a one-year lifetime.
///
/// # Errors
///
/// Returns an error when the document is unavailable or rejects the write.
pub fn write_language_cookie(code: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| "document unavailable".to_string())?;
        document
            .set_cookie(&language_cookie_assignment(code))
            .map_err(|e| format!("cookie write failed: {e:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = code;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_cookie_among_others() {
        let header = "theme=dark; language=en; other=1";
        assert_eq!(read_cookie(header, LANGUAGE_COOKIE).as_deref(), Some("en"));
        assert_eq!(read_cookie(header, "missing"), None);
    }

    #[test]
    fn assignment_carries_one_year_max_age() {
        let assignment = language_cookie_assignment("zh");
        assert!(assignment.starts_with("language=zh;"));
        assert!(assignment.contains("max-age=31536000"));
    }
}
