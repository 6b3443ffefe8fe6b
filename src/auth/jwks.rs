use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;

use super::AuthError;

const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// One RSA signing key as published by the identity provider.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    /// Modulus, base64url encoded.
    #[serde(default)]
    pub n: Option<String>,
    /// Public exponent, base64url encoded.
    #[serde(default)]
    pub e: Option<String>,
    #[serde(default)]
    pub alg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

struct CachedKeys {
    keys: HashMap<String, Jwk>,
    expires_at: Instant,
}

/// TTL cache over the issuer's JWKS endpoint.
///
/// Key sets are immutable by version, so concurrent refreshes need no
/// coordination: last write wins.
pub struct JwksCache {
    jwks_url: String,
    http: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
    ttl: Duration,
}

impl JwksCache {
    pub fn new(jwks_url: impl Into<String>) -> Self {
        Self::with_ttl(jwks_url, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(jwks_url: impl Into<String>, ttl: Duration) -> Self {
        Self {
            jwks_url: jwks_url.into(),
            http: reqwest::Client::new(),
            cache: RwLock::new(None),
            ttl,
        }
    }

    /// Look up a key by id, refetching when the cache is stale or the id is
    /// unknown (rotation publishes new ids before old tokens expire).
    pub async fn get_key(&self, kid: &str) -> Result<Jwk, AuthError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.expires_at > Instant::now() {
                    if let Some(key) = cached.keys.get(kid) {
                        return Ok(key.clone());
                    }
                }
            }
        }

        self.refresh().await?;

        let cache = self.cache.read().await;
        match cache.as_ref().and_then(|cached| cached.keys.get(kid)) {
            Some(key) => Ok(key.clone()),
            None => {
                tracing::debug!(kid, "no matching key in refreshed JWKS");
                Err(AuthError)
            }
        }
    }

    async fn refresh(&self) -> Result<(), AuthError> {
        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::debug!(error = %e, "JWKS fetch failed");
                AuthError
            })?;

        let jwks: JwkSet = response.json().await.map_err(|e| {
            tracing::debug!(error = %e, "JWKS response was not a key set");
            AuthError
        })?;

        let keys: HashMap<String, Jwk> =
            jwks.keys.into_iter().map(|key| (key.kid.clone(), key)).collect();
        tracing::debug!(key_count = keys.len(), "JWKS cache refreshed");

        let mut cache = self.cache.write().await;
        *cache = Some(CachedKeys {
            keys,
            expires_at: Instant::now() + self.ttl,
        });
        Ok(())
    }
}
