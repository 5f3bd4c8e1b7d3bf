//! `reqwest`-backed n8n API client handles.

use crate::workspace::{
    domain::{WorkspaceDefinition, WorkspaceName},
    ports::{ClientBuildError, ClientFactory},
};
use reqwest::header::{ACCEPT, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use std::time::Duration;
use url::Url;

/// Header carrying the n8n API key.
pub const API_KEY_HEADER: &str = "x-n8n-api-key";

/// HTTP client handle bound to one workspace.
///
/// Construction validates the endpoint and credential shape only; nothing is
/// sent until a request built from [`N8nApiClient::request`] is executed.
#[derive(Debug, Clone)]
pub struct N8nApiClient {
    workspace: WorkspaceName,
    base_url: Url,
    api_key: HeaderValue,
    http: reqwest::Client,
}

impl N8nApiClient {
    /// Returns the workspace this client is bound to.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceName {
        &self.workspace
    }

    /// Returns the base URL, always ending in `/`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolves `path` relative to the base URL.
    ///
    /// Leading slashes are ignored so that `"/api/v1/workflows"` stays below
    /// a base URL with a path prefix.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when the joined URL is invalid.
    pub fn url_for(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }

    /// Starts a request against the workspace with the API key attached.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when the joined URL is invalid.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, url::ParseError> {
        let target = self.url_for(path)?;
        Ok(self
            .http
            .request(method, target)
            .header(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json")))
    }
}

/// Factory producing [`N8nApiClient`] handles.
#[derive(Debug, Clone)]
pub struct HttpClientFactory {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("n8n-tenancy/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl HttpClientFactory {
    /// Creates a factory with no request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-request timeout applied by built clients.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent sent by built clients.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl ClientFactory for HttpClientFactory {
    type Client = N8nApiClient;

    fn build(&self, definition: &WorkspaceDefinition) -> Result<N8nApiClient, ClientBuildError> {
        let base_url = parse_base_url(definition)?;

        let mut api_key = HeaderValue::from_str(definition.credential().expose())
            .map_err(|_| ClientBuildError::InvalidCredential(definition.name().clone()))?;
        api_key.set_sensitive(true);

        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientBuildError::transport)?;

        Ok(N8nApiClient {
            workspace: definition.name().clone(),
            base_url,
            api_key,
            http,
        })
    }
}

fn parse_base_url(definition: &WorkspaceDefinition) -> Result<Url, ClientBuildError> {
    let invalid = |reason: String| ClientBuildError::InvalidEndpoint {
        workspace: definition.name().clone(),
        endpoint: definition.endpoint().to_owned(),
        reason,
    };

    let mut url = Url::parse(definition.endpoint()).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_owned()));
    }
    if !url.path().ends_with('/') {
        let with_slash = format!("{}/", url.path());
        url.set_path(&with_slash);
    }
    Ok(url)
}
