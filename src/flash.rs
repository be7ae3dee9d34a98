//! One-shot messages carried across a redirect in a cookie.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "ong_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Info => "info",
            FlashKind::Warning => "warning",
            FlashKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

pub fn encode(flashes: &[Flash]) -> String {
    let json = serde_json::to_vec(flashes).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Undecodable values read as no messages.
pub fn decode(value: &str) -> Vec<Flash> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

/// Queue a message for the next page render.
pub fn push(jar: CookieJar, kind: FlashKind, message: impl Into<String>) -> CookieJar {
    let mut pending = jar
        .get(FLASH_COOKIE)
        .map(|c| decode(c.value()))
        .unwrap_or_default();
    pending.push(Flash {
        kind,
        message: message.into(),
    });

    jar.add(
        Cookie::build((FLASH_COOKIE, encode(&pending)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Read and clear pending messages.
pub fn take(jar: CookieJar) -> (CookieJar, Vec<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Vec::new());
    };
    let flashes = decode(cookie.value());
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flashes)
}

/// 303 redirect carrying a flash message.
pub fn redirect(jar: CookieJar, kind: FlashKind, message: impl Into<String>, to: &str) -> Response {
    (push(jar, kind, message), Redirect::to(to)).into_response()
}
