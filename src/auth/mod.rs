mod jwks;
mod verifier;

pub use jwks::JwksCache;
pub use verifier::TokenVerifier;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claim set carried by an access token once verification succeeds.
///
/// Lives for a single request; the subject is the only field handlers read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque user identifier (e.g. `auth0|abc123`).
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Kept as raw JSON: the provider issues both string and array audiences,
    /// and this service never inspects it (see [`TokenVerifier::verify`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Value>,
}

/// The one failure every rejected token collapses into.
///
/// Callers learn only that the token was rejected; the concrete cause
/// (bad signature, expiry, wrong issuer, unknown key id) is logged at debug
/// level inside the verifier and never leaves the process.
#[derive(Debug, thiserror::Error)]
#[error("invalid or expired access token")]
pub struct AuthError;
