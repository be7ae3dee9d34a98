//! The single shared admin credential and the signed session cookie that
//! proves a successful login.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "ong_session";

/// Username plus the Argon2 hash of the configured password, derived once at
/// startup.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Result<Self, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalServerError(format!("password hash error: {e}")))?
            .to_string();

        Ok(Self {
            username: username.to_string(),
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        let Ok(parsed_hash) = PasswordHash::new(&self.password_hash) else {
            tracing::error!("stored admin password hash is malformed");
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Present in request extensions on admin routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
}

#[derive(Serialize, Deserialize)]
struct Claims {
    sub: String,
    admin: bool,
    iat: i64,
}

/// Signs session tokens. Tokens carry no expiry.
#[derive(Clone)]
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let claims = Claims {
            sub: username.to_string(),
            admin: true,
            iat: chrono::Utc::now().timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::InternalServerError(format!("session encode error: {e}")))
    }

    /// The admin a token was issued to, if the signature checks out and the
    /// token names the configured admin.
    pub fn verify(&self, token: &str, expected_username: &str) -> Option<AdminSession> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| tracing::debug!(error = %e, "rejected session token"))
            .ok()?;

        (data.claims.admin && data.claims.sub == expected_username).then(|| AdminSession {
            username: data.claims.sub,
        })
    }

    /// Admin session carried by the request's cookies, if any.
    pub fn from_jar(&self, jar: &CookieJar, expected_username: &str) -> Option<AdminSession> {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| self.verify(cookie.value(), expected_username))
    }
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn clear_session(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}
