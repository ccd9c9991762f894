/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions,
 * and builds the session cookie that carries the token.
 *
 * Sessions are stateless: the token is re-verified on every request and
 * nothing is stored server-side. Logout only clears the cookie; an issued
 * token stays cryptographically valid until its one-hour expiry.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Name of the HTTP cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// Session lifetime in seconds (token expiry and cookie max-age)
const SESSION_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Role (`user` or `admin`)
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Whether these claims grant access to the admin surface.
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Get JWT secret from environment
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development fallback");
        "northbridge-dev-secret-change-in-production".to_string()
    })
}

/// Whether the server runs in production (controls the cookie Secure flag).
fn is_production() -> bool {
    std::env::var("ENVIRONMENT").map(|v| v == "production").unwrap_or(false)
}

/// Create a session token for a user
///
/// # Arguments
/// * `user_id` - User ID
/// * `email` - User email
/// * `role` - User role (`user` or `admin`)
///
/// # Returns
/// Signed JWT with a one-hour expiry
pub fn create_token(
    user_id: &str,
    email: &str,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp: now + SESSION_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// # Arguments
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims, or an error on signature mismatch or expiry
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Build the `Set-Cookie` value establishing a session.
///
/// HttpOnly, SameSite=Strict, Path=/, one-hour max-age; Secure is added in
/// production only.
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Strict{}",
        SESSION_COOKIE,
        token,
        SESSION_TTL_SECS,
        if is_production() { "; Secure" } else { "" }
    )
}

/// Build the `Set-Cookie` value clearing the session (zero max-age).
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Strict{}",
        SESSION_COOKIE,
        if is_production() { "; Secure" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let result = create_token("user-1", "test@example.com", "user");
        assert!(result.is_ok());
        let token = result.unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token() {
        let token = create_token("user-1", "test@example.com", "admin").unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.is_admin());
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = verify_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_token_expiry_is_one_hour() {
        let token = create_token("user-1", "test@example.com", "user").unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
    }

    #[test]
    fn test_user_role_is_not_admin() {
        let token = create_token("user-1", "test@example.com", "user").unwrap();
        let claims = verify_token(&token).unwrap();
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc");
        assert!(cookie.starts_with("token=abc;"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
