use log::{debug, error, trace};
use pixela_core::{ApiResponse, Params};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::{ApiError, HttpError, Result};

/// Public service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pixe.la";

/// Header carrying the user token on every request.
const TOKEN_HEADER: &str = "X-USER-TOKEN";

/// Trait for providing configuration to the API client
/// This allows embedding applications to supply credentials without
/// coupling the client to a particular config store.
pub trait ClientConfig {
    type Error;

    /// Get the username requests are scoped to
    fn get_username(&self) -> std::result::Result<String, Self::Error>;

    /// Get the user token for authentication
    fn get_token(&self) -> std::result::Result<String, Self::Error>;

    /// Get the base URL for the API (optional, defaults to the public service)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// HTTP client for interacting with the Pixela API
#[derive(Debug, Clone)]
pub struct PixelaClient {
    client: Client,
    username: String,
    token: String,
    base_url: String,
}

impl PixelaClient {
    /// Create a new API client against the public service.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self::build(username.into(), token.into(), None)
    }

    /// Create an API client with a custom base URL.
    pub fn with_base_url(
        username: impl Into<String>,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {base_url}: {e}")))?;
        Ok(Self::build(username.into(), token.into(), Some(base_url)))
    }

    /// Create API client from environment variables.
    ///
    /// Reads `PIXELA_USERNAME` and `PIXELA_USER_TOKEN`, plus an optional
    /// `PIXELA_BASE_URL` override.
    pub fn from_env() -> Result<Self> {
        debug!("Creating PixelaClient from environment variables");
        let username = std::env::var("PIXELA_USERNAME").map_err(|_| {
            error!("PIXELA_USERNAME environment variable not set");
            ApiError::Config("PIXELA_USERNAME environment variable not set".to_string())
        })?;
        let token = std::env::var("PIXELA_USER_TOKEN").map_err(|_| {
            error!("PIXELA_USER_TOKEN environment variable not set");
            ApiError::Config("PIXELA_USER_TOKEN environment variable not set".to_string())
        })?;

        match std::env::var("PIXELA_BASE_URL") {
            Ok(base_url) => Self::with_base_url(username, token, base_url),
            Err(_) => Ok(Self::new(username, token)),
        }
    }

    /// Create API client from any configuration implementing ClientConfig
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ClientConfig,
    {
        debug!("Creating PixelaClient from config");
        let username = config.get_username()?;
        let token = config.get_token()?;
        let base_url = config.get_base_url()?;

        Ok(Self::build(username, token, base_url))
    }

    fn build(username: String, token: String, base_url: Option<String>) -> Self {
        let client = Client::new();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        debug!("Creating PixelaClient");
        debug!("  Username: {}", username);
        debug!("  Token: {}", redact(&token));
        debug!("  Base URL: {}", base_url);

        Self {
            client,
            username,
            token,
            base_url,
        }
    }

    /// Username requests are scoped to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the user-scoped path `/v1/users/{username}/{rest}`.
    pub(crate) fn user_path(&self, rest: &str) -> String {
        format!(
            "/v1/users/{}/{}",
            self.username,
            rest.trim_start_matches('/')
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    async fn get(&self, path: &str, params: Option<&Params>) -> Result<Response> {
        let url = self.endpoint(path);

        debug!("HTTP GET request to: {}", url);
        trace!("  {}: {}", TOKEN_HEADER, redact(&self.token));

        let mut request = self.client.get(&url).header(TOKEN_HEADER, &self.token);
        if let Some(params) = params {
            if !params.is_empty() {
                request = request.query(&params.to_query());
            }
        }

        let response = request.send().await.map_err(|e| {
            error!("GET request failed: {:?}", e);
            HttpError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(response).await
    }

    /// Make a mutating request (POST, PUT, DELETE) with an optional JSON body
    async fn send(&self, method: Method, path: &str, body: Option<Params>) -> Result<Response> {
        let url = self.endpoint(path);

        debug!("HTTP {} request to: {}", method, url);
        trace!("  {}: {}", TOKEN_HEADER, redact(&self.token));

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(TOKEN_HEADER, &self.token)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            let body = body.into_body();
            trace!("Request body: {}", body);
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} request failed: {:?}", method, e);
            HttpError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(response).await
    }

    /// Handle HTTP response and convert error statuses
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("Request failed with status: {}", status);
        debug!("Error response body: {}", body);

        // Failed requests still carry the envelope; prefer its message
        // over the raw body.
        let message = serde_json::from_str::<ApiResponse>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or(body);

        let api_error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                error!("Authentication failed ({})", status.as_u16());
                HttpError::AuthenticationFailed {
                    status: status.as_u16(),
                    message,
                }
            }
            StatusCode::NOT_FOUND => HttpError::NotFound { message },
            StatusCode::SERVICE_UNAVAILABLE => {
                error!("Service unavailable (503)");
                HttpError::ServiceUnavailable { message }
            }
            _ => {
                error!("HTTP error with status code: {}", status.as_u16());
                HttpError::Status {
                    status: status.as_u16(),
                    message,
                }
            }
        };

        Err(ApiError::Http(api_error))
    }

    /// GET returning a JSON-decoded value.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&Params>,
    ) -> Result<T> {
        let response = self.get(path, params).await?;
        let value = response.json().await.map_err(HttpError::Request)?;
        Ok(value)
    }

    /// GET returning the raw response body.
    pub(crate) async fn get_text(&self, path: &str, params: Option<&Params>) -> Result<String> {
        let response = self.get(path, params).await?;
        let body = response.text().await.map_err(HttpError::Request)?;
        Ok(body)
    }

    /// Mutating request decoded into the generic envelope.
    pub(crate) async fn send_envelope(
        &self,
        method: Method,
        path: &str,
        body: Option<Params>,
    ) -> Result<ApiResponse> {
        let response = self.send(method, path, body).await?;
        let envelope = response.json().await.map_err(HttpError::Request)?;
        Ok(envelope)
    }
}

/// Shorten a secret for logs, keeping the first and last four characters.
fn redact(secret: &str) -> String {
    if secret.len() <= 8 {
        return "****".to_string();
    }
    format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_doubled_slashes() {
        let client =
            PixelaClient::with_base_url("a-user", "secret-token", "http://localhost:9000/")
                .unwrap();
        assert_eq!(
            client.endpoint("/v1/users/a-user/graphs"),
            "http://localhost:9000/v1/users/a-user/graphs"
        );
    }

    #[test]
    fn test_user_path_is_scoped_to_username() {
        let client = PixelaClient::new("a-user", "secret-token");
        assert_eq!(client.user_path("graphs"), "/v1/users/a-user/graphs");
        assert_eq!(client.user_path("/graphs/g1"), "/v1/users/a-user/graphs/g1");
    }

    #[test]
    fn test_default_base_url() {
        let client = PixelaClient::new("a-user", "secret-token");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = PixelaClient::with_base_url("a-user", "secret-token", "not a url");
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_redact_keeps_only_edges() {
        assert_eq!(redact("thisisalongtoken"), "this...oken");
        assert_eq!(redact("short"), "****");
    }
}
