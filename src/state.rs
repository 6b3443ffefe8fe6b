use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::config::AppConfig;
use crate::supabase::SupabaseClient;

/// Shared handles, constructed once in `main` and cloned per request.
///
/// Explicit constructor injection instead of process-wide globals: the only
/// cross-request mutable state anywhere in the service is the signing-key
/// cache inside the verifier.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub supabase: SupabaseClient,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(config: AppConfig, supabase: SupabaseClient, verifier: TokenVerifier) -> Self {
        Self {
            config: Arc::new(config),
            supabase,
            verifier: Arc::new(verifier),
        }
    }
}
