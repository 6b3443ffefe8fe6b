use serde::{Deserialize, Serialize};
use std::env;

/// Process configuration, read once at startup and passed into [`crate::state::AppState`].
///
/// The service owns no durable state; everything here points at the two
/// external collaborators (the Supabase project and the Auth0 tenant) plus
/// local serving flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the Supabase project (e.g. `https://xyz.supabase.co`).
    pub supabase_url: String,
    /// API key sent with every Supabase request.
    pub supabase_key: String,
    /// Auth0 tenant domain (e.g. `mentorhub.us.auth0.com`).
    pub auth0_domain: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: required("SUPABASE_KEY")?,
            auth0_domain: required("AUTH0_DOMAIN")?,
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            debug: env::var("DEBUG").ok().and_then(|v| v.parse().ok()).unwrap_or(false),
        })
    }

    /// Issuer string exactly as the identity provider writes it into tokens.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }

    /// Well-known signing-key endpoint derived from the tenant domain.
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.auth0_domain)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            supabase_url: "https://project.supabase.co".to_string(),
            supabase_key: "service-key".to_string(),
            auth0_domain: "mentorhub.us.auth0.com".to_string(),
            port: 3000,
            debug: false,
        }
    }

    #[test]
    fn issuer_has_https_scheme_and_trailing_slash() {
        assert_eq!(config().issuer(), "https://mentorhub.us.auth0.com/");
    }

    #[test]
    fn jwks_url_uses_well_known_path() {
        assert_eq!(
            config().jwks_url(),
            "https://mentorhub.us.auth0.com/.well-known/jwks.json"
        );
    }
}
