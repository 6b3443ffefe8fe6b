use thiserror::Error;

/// Errors surfaced by the Supabase REST client.
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("supabase request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("supabase returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("supabase response did not decode: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid supabase url: {0}")]
    Url(String),
}
