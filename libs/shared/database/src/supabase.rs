use anyhow::{anyhow, Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Thin PostgREST client for a Supabase project.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            "apikey",
            HeaderValue::from_str(&self.anon_key).context("invalid Supabase API key")?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.anon_key))
                .context("invalid Supabase API key")?,
        );

        Ok(headers)
    }

    /// Headers asking PostgREST to echo the affected rows back.
    pub fn return_representation() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        headers
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut headers = self.get_headers()?;
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                409 => anyhow!("Conflict: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

/// Escapes a value for use as a PostgREST `like`/`ilike` operand so that it
/// only matches itself. `*` is PostgREST's alias for `%`.
pub fn literal_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_' | '*') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(uri: &str) -> AppConfig {
        AppConfig {
            supabase_url: format!("{}/", uri),
            supabase_anon_key: "test-anon-key".to_string(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_request_sends_api_key_headers() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/patients"))
            .and(header("apikey", "test-anon-key"))
            .and(header("Authorization", "Bearer test-anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .mount(&mock_server)
            .await;

        let client = SupabaseClient::new(&config_for(&mock_server.uri()));
        let rows: Vec<Value> = client
            .request(Method::GET, "/rest/v1/patients", None)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(client.get_base_url(), mock_server.uri());
    }

    #[tokio::test]
    async fn test_request_with_headers_merges_prefer() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/patients"))
            .and(header("Prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{ "id": 7 }])))
            .mount(&mock_server)
            .await;

        let client = SupabaseClient::new(&config_for(&mock_server.uri()));
        let rows: Vec<Value> = client
            .request_with_headers(
                Method::POST,
                "/rest/v1/patients",
                Some(json!({ "name": "Alice" })),
                Some(SupabaseClient::return_representation()),
            )
            .await
            .unwrap();

        assert_eq!(rows[0]["id"], 7);
    }

    #[tokio::test]
    async fn test_error_status_becomes_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/patients"))
            .respond_with(ResponseTemplate::new(409).set_body_string("foreign key violation"))
            .mount(&mock_server)
            .await;

        let client = SupabaseClient::new(&config_for(&mock_server.uri()));
        let result: Result<Vec<Value>> = client
            .request(Method::DELETE, "/rest/v1/patients?id=eq.1", None)
            .await;

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Conflict"));
        assert!(message.contains("foreign key violation"));
    }

    #[test]
    fn test_literal_pattern_escapes_wildcards() {
        assert_eq!(literal_pattern("Alice"), "Alice");
        assert_eq!(literal_pattern("A_ice"), r"A\_ice");
        assert_eq!(literal_pattern("100%*"), r"100\%\*");
        assert_eq!(literal_pattern(r"back\slash"), r"back\\slash");
    }
}
