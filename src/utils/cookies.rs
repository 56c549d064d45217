use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use crate::config::CONFIG;

pub fn get_html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Finds `name` in a `document.cookie` style string (`a=1; b=2`) and
/// percent-decodes its value. A value that does not decode is returned as is.
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_value(value.trim()))
}

fn decode_value(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn cookie_pair(name: &str, value: &str) -> String {
    format!("{}={}; path=/; SameSite=Lax", name, urlencoding::encode(value))
}

pub fn read_cookie(name: &str) -> Option<String> {
    let cookies = get_html_document()?.cookie().ok()?;
    find_cookie(&cookies, name)
}

pub fn write_cookie(name: &str, value: &str) -> Result<(), String> {
    let document = get_html_document().ok_or("document.cookie is not available")?;
    document
        .set_cookie(&cookie_pair(name, value))
        .map_err(|_| "Failed to write cookie".to_string())
}

pub fn remove_cookie(name: &str) -> Result<(), String> {
    let document = get_html_document().ok_or("document.cookie is not available")?;
    document
        .set_cookie(&format!("{}=; path=/; Max-Age=0", name))
        .map_err(|_| "Failed to remove cookie".to_string())
}

/// Current auth token, if the session cookie carries a non-empty value
pub fn auth_token() -> Option<String> {
    read_cookie(&CONFIG.auth_cookie_name).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie() {
        let header = "theme=dark; Authorization=Bearer abc; lang=ko";
        assert_eq!(find_cookie(header, "Authorization").as_deref(), Some("Bearer abc"));
        assert_eq!(find_cookie(header, "lang").as_deref(), Some("ko"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert!(find_cookie("", "Authorization").is_none());
        assert!(find_cookie("Authorizations=x", "Authorization").is_none());
    }

    #[test]
    fn encoded_value_is_decoded() {
        let header = "theme=dark; Authorization=Bearer%20abc.def";
        assert_eq!(find_cookie(header, "Authorization").as_deref(), Some("Bearer abc.def"));
    }

    #[test]
    fn undecodable_value_is_returned_raw() {
        assert_eq!(find_cookie("Authorization=%E0%A4%A", "Authorization").as_deref(), Some("%E0%A4%A"));
    }

    #[test]
    fn written_value_round_trips_through_reader() {
        let pair = cookie_pair("Authorization", "Bearer abc.def");
        assert!(pair.starts_with("Authorization=Bearer%20abc.def;"));

        let header = pair.split(';').next().unwrap_or_default();
        assert_eq!(find_cookie(header, "Authorization").as_deref(), Some("Bearer abc.def"));
    }

    #[test]
    fn empty_value_is_kept_as_empty_string() {
        assert_eq!(find_cookie("Authorization=", "Authorization").as_deref(), Some(""));
    }
}
