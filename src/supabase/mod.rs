mod error;
mod query;

pub use error::SupabaseError;
pub use query::TableQuery;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Thin client for the Supabase PostgREST API.
///
/// One instance is built at startup around a single [`reqwest::Client`] and
/// cloned into every request via application state.
#[derive(Clone)]
pub struct SupabaseClient {
    pub(crate) base_url: Url,
    pub(crate) api_key: String,
    pub(crate) http: reqwest::Client,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, SupabaseError> {
        let base_url = Url::parse(base_url).map_err(|e| SupabaseError::Url(e.to_string()))?;
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
        })
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery::new(self, table)
    }

    /// Invoke a named server-side function with JSON parameters.
    pub async fn rpc(&self, function: &str, params: Value) -> Result<Value, SupabaseError> {
        let url = self.endpoint(&format!("rpc/{}", function))?;
        let request = self.http.post(url).json(&params);
        let response = self.authorize(request).send().await?;
        Self::read_json(response).await
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, SupabaseError> {
        self.base_url
            .join(&format!("rest/v1/{}", path))
            .map_err(|e| SupabaseError::Url(e.to_string()))
    }

    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Check the status, then decode the body. PostgREST error bodies carry
    /// useful messages, so non-2xx responses keep theirs verbatim.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SupabaseError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SupabaseError::Status { status, body });
        }
        serde_json::from_str(&body).map_err(SupabaseError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_rest_prefix() {
        let client = SupabaseClient::new("https://project.supabase.co", "key").unwrap();
        let url = client.endpoint("sessions").unwrap();
        assert_eq!(url.as_str(), "https://project.supabase.co/rest/v1/sessions");
    }

    #[test]
    fn endpoint_builds_rpc_paths() {
        let client = SupabaseClient::new("http://127.0.0.1:54321", "key").unwrap();
        let url = client.endpoint("rpc/get_recommended_mentors").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:54321/rest/v1/rpc/get_recommended_mentors"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(SupabaseClient::new("not a url", "key").is_err());
    }
}
