//! WhatsGate HTTP Client
//!
//! Provides the HTTP client wrapper used by every gateway call.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tower::{Service, ServiceBuilder};

use crate::error::{HttpError, WhatsgateError};
use crate::middleware::{ApiKeyLayer, ApiKeyService, LoggingMiddleware, LoggingMiddlewareService};
use crate::types::{ApiKey, WhatsappId};

pub(crate) const DEFAULT_BASE_URL: &str = "https://whatsgate.ru/api/v1";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const LOGGED_BODY_LIMIT: usize = 512;

type Transport = ApiKeyService<LoggingMiddlewareService<Client>>;

/// WhatsGate API Client
///
/// Reusable HTTP client for calling the gateway. Every request goes through
/// the header-injecting [`ApiKeyLayer`] and the [`LoggingMiddleware`].
#[derive(Clone)]
pub struct WhatsgateClient {
    http: Client,
    transport: Transport,
    whatsapp_id: WhatsappId,
    base_url: String,
}

impl std::fmt::Debug for WhatsgateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsgateClient")
            .field("whatsapp_id", &self.whatsapp_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WhatsgateClient {
    /// Create a new client builder
    pub fn builder() -> WhatsgateClientBuilder {
        WhatsgateClientBuilder::default()
    }

    /// Get the sender WhatsApp ID
    pub fn whatsapp_id(&self) -> &WhatsappId {
        &self.whatsapp_id
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the underlying [`reqwest::Client`].
    ///
    /// Note: requests sent directly through this client bypass the middleware
    /// stack and carry no API key. Use [`post`](Self::post) instead.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) async fn send_request(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut transport = self.transport.clone();
        transport.call(request).await
    }

    /// Make a POST request to the gateway
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/send")
    /// * `body` - Request body to serialize as JSON
    ///
    /// # Returns
    /// Deserialized response of type T
    ///
    /// # Errors
    /// - `WhatsgateError::Json` if the body cannot be serialized
    /// - `WhatsgateError::Http` for transport failures or an undecodable body
    /// - `WhatsgateError::Status` for any status other than 200
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WhatsgateError> {
        let url = format!("{}{}", self.base_url, path);
        let payload = serde_json::to_vec(body)?;
        let request = self.http.post(url).body(payload).build()?;

        let response = self.send_request(request).await.map_err(|e| {
            log::error!("[Whatsgate] POST {} failed: {}", path, e);
            WhatsgateError::from(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let text = String::from_utf8_lossy(&bytes);
        log::debug!(
            "[Whatsgate] POST {} response body: {}",
            path,
            truncate_for_log(&text)
        );

        if status != StatusCode::OK {
            log::error!("[Whatsgate] POST {} returned HTTP {}", path, status.as_u16());
            return Err(WhatsgateError::Status {
                status: status.as_u16(),
                body: text.into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            log::error!("[Whatsgate] POST {} returned malformed JSON: {}", path, e);
            WhatsgateError::Http(HttpError::Decode(e.to_string()))
        })
    }
}

fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOGGED_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

/// Builder for WhatsgateClient
///
/// # Example
///
/// ```rust
/// use whatsgate_sdk::client::WhatsgateClient;
/// use whatsgate_sdk::types::{ApiKey, WhatsappId};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = WhatsgateClient::builder()
///         .api_key(ApiKey::new("your_api_key")?)
///         .whatsapp_id(WhatsappId::new("your_whatsapp_id")?)
///         .build()?;
///
///     assert_eq!(client.base_url(), "https://whatsgate.ru/api/v1");
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct WhatsgateClientBuilder {
    api_key: Option<ApiKey>,
    whatsapp_id: Option<WhatsappId>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    verbose_logging: bool,
}

impl WhatsgateClientBuilder {
    /// Set the gateway API key
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the sender WhatsApp ID
    pub fn whatsapp_id(mut self, whatsapp_id: WhatsappId) -> Self {
        self.whatsapp_id = Some(whatsapp_id);
        self
    }

    /// Set the base URL for API calls
    ///
    /// Default: `<https://whatsgate.ru/api/v1>`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the total timeout for requests
    ///
    /// Default: 30 seconds
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    ///
    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Log requests at debug level, including (redacted) headers
    pub fn verbose_logging(mut self) -> Self {
        self.verbose_logging = true;
        self
    }

    /// Build the WhatsgateClient
    ///
    /// # Errors
    /// Returns `WhatsgateError::Config` if the api key or WhatsApp ID is not
    /// set, the base URL is not http(s), or the key is not a valid header value
    pub fn build(self) -> Result<WhatsgateClient, WhatsgateError> {
        let api_key = self
            .api_key
            .ok_or_else(|| WhatsgateError::Config("api_key is required".to_string()))?;
        let whatsapp_id = self
            .whatsapp_id
            .ok_or_else(|| WhatsgateError::Config("whatsapp_id is required".to_string()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(WhatsgateError::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                base_url
            )));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let connect_timeout = self
            .connect_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| WhatsgateError::Config(format!("failed to build HTTP client: {e}")))?;

        let logging = if self.verbose_logging {
            LoggingMiddleware::new().verbose()
        } else {
            LoggingMiddleware::new()
        };

        // api key outermost so the logging layer sees the injected headers
        let transport = ServiceBuilder::new()
            .layer(ApiKeyLayer::new(&api_key)?)
            .layer(logging)
            .service(http.clone());

        Ok(WhatsgateClient {
            http,
            transport,
            whatsapp_id,
            base_url,
        })
    }
}
