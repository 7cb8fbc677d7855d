//! One-shot confirmation messages.
//!
//! A handler that redirects stores its message in a `flash` cookie; the next
//! page that shows it clears the cookie in the same response.

use axum::http::{header, HeaderMap, HeaderValue};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

const COOKIE_NAME: &str = "flash";

/// `Set-Cookie` value carrying `message`
pub fn set_cookie(message: &str) -> HeaderValue {
    let encoded = utf8_percent_encode(message, NON_ALPHANUMERIC);
    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", COOKIE_NAME, encoded);
    // Percent-encoding leaves only visible ASCII
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| clear_cookie())
}

/// `Set-Cookie` value that removes the flash cookie
pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Read the pending flash message from the request's cookies, if any
pub fn read(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|message| !message.is_empty())
}
