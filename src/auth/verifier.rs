use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::jwks::{Jwk, JwksCache};
use super::{AuthError, Claims};

/// Verifies bearer tokens against the identity provider's published keys.
///
/// Built once at startup and shared through application state.
pub struct TokenVerifier {
    jwks: JwksCache,
    issuer: String,
}

impl TokenVerifier {
    pub fn new(jwks: JwksCache, issuer: impl Into<String>) -> Self {
        Self {
            jwks,
            issuer: issuer.into(),
        }
    }

    /// Validate `token` and return its claim set.
    ///
    /// Checks the RS256 signature against the key named by the token's `kid`,
    /// the `iss` claim against the configured issuer, and `exp` against the
    /// current time. Audience is NOT checked; that is deliberate policy,
    /// pinned by test, not an oversight.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!(error = %e, "token header did not parse");
            AuthError
        })?;
        let kid = header.kid.ok_or_else(|| {
            tracing::debug!("token header carries no kid");
            AuthError
        })?;

        let jwk = self.jwks.get_key(&kid).await?;
        let key = decoding_key(&jwk)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_aud = false;

        let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            AuthError
        })?;
        Ok(data.claims)
    }
}

fn decoding_key(jwk: &Jwk) -> Result<DecodingKey, AuthError> {
    if jwk.kty != "RSA" {
        tracing::debug!(kid = %jwk.kid, kty = %jwk.kty, "unexpected key type in JWKS");
        return Err(AuthError);
    }
    let (n, e) = match (&jwk.n, &jwk.e) {
        (Some(n), Some(e)) => (n, e),
        _ => {
            tracing::debug!(kid = %jwk.kid, "JWKS entry missing RSA components");
            return Err(AuthError);
        }
    };
    DecodingKey::from_rsa_components(n, e).map_err(|err| {
        tracing::debug!(kid = %jwk.kid, error = %err, "JWKS entry has invalid RSA components");
        AuthError
    })
}
