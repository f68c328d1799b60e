//! Session cookie transport
//!
//! The session token travels in an HTTP-only cookie. Attribute strings are
//! built here so login and logout stay in agreement, and the extractor and
//! gate share one parser for the Cookie header.

use axum::http::{header::COOKIE, HeaderMap};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Cookie lifetime in seconds: seven days, matching the token expiry
pub const SESSION_COOKIE_MAX_AGE: i64 = 7 * 24 * 60 * 60;

/// Build the Set-Cookie value that installs a session token
pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, token, SESSION_COOKIE_MAX_AGE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the Set-Cookie value that clears the session cookie
///
/// Overwrites the value with an empty string and a zero Max-Age, which is
/// idempotent whether or not a session existed.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Extract the session token from a request's Cookie headers
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            if name == SESSION_COOKIE && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
}
