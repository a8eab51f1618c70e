use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::HttpRequest;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

pub const TOKEN_COOKIE: &str = "token";

/// Bearer credentials of the signed-in user for one request.
///
/// Created on login or register, cleared on logout, and otherwise rebuilt
/// from the `Authorization` header or the `token` cookie by
/// [`SessionMiddleware`](crate::middleware::auth::SessionMiddleware).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

impl Session {
    /// Starts a session from an issued token. The user service signs its
    /// tokens, so we only peek at `exp` without checking the signature.
    /// Blank and already expired tokens yield no session; opaque
    /// (non-JWT) tokens are kept without an expiry.
    pub fn init(token: impl Into<String>) -> Option<Session> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return None;
        }

        let expires_at = peek_expiry(&token);
        if let Some(expires_at) = expires_at {
            if expires_at <= Utc::now() {
                log::debug!("Discarding token expired at {}", expires_at);
                return None;
            }
        }

        Some(Session { token, expires_at })
    }

    pub fn from_request(req: &HttpRequest) -> Option<Session> {
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);

        bearer
            .or_else(|| req.cookie(TOKEN_COOKIE).map(|c| c.value().to_string()))
            .and_then(Session::init)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, self.token.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    /// Cookie that removes the session from the browser.
    pub fn clear_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build(TOKEN_COOKIE, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish();
        cookie.make_removal();
        cookie
    }
}

fn peek_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    Utc.timestamp_opt(data.claims.exp?, 0).single()
}
