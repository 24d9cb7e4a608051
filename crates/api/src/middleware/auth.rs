//! Shared-secret authentication extractor for operator endpoints.
//!
//! The system has a single admin credential: clients send the plaintext
//! secret in the `X-Admin-Token` header, and its SHA-256 digest is compared
//! against the stored `admin_pass_hash`. There are no users, roles, or
//! sessions. Settings come through the config cache; a secret rotation via
//! `PUT /settings` invalidates the cache, so the new secret takes effect
//! immediately.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use printdesk_core::error::CoreError;
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the shared admin secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Proof that the request carried the shared admin secret.
///
/// Use as an extractor parameter in any operator handler:
///
/// ```ignore
/// async fn mutate(_admin: AdminAuth, State(state): State<AppState>) -> AppResult<...>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing X-Admin-Token header".into(),
                ))
            })?;

        let settings = state
            .config_cache
            .settings(&state.pool)
            .await
            .map_err(AppError::Database)?;

        let presented = digest_hex(token);
        let stored = settings.admin_pass_hash.to_lowercase();
        if !digest_eq(presented.as_bytes(), stored.as_bytes()) {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(AdminAuth)
    }
}

/// Constant-time comparison of the two hex digests.
fn digest_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Lowercase hex SHA-256 of the plaintext secret.
pub fn digest_hex(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
