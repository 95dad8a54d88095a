//! Header-injecting transport decorator.
//!
//! Wraps the inner HTTP service so that every outgoing request carries the
//! gateway API key and a JSON content type. Call sites never set either
//! header themselves.

use std::task::{Context, Poll};

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Request as ReqwestRequest;
use tower::{Layer, Service};

use crate::error::WhatsgateError;
use crate::types::ApiKey;

/// Header carrying the gateway API key
pub const API_KEY_HEADER: &str = "x-api-key";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Layer that injects `X-Api-Key` and `Content-Type: application/json`.
#[derive(Clone)]
pub struct ApiKeyLayer {
    api_key: HeaderValue,
}

impl ApiKeyLayer {
    /// Create a new ApiKeyLayer.
    ///
    /// # Errors
    /// Returns `WhatsgateError::Config` if the key contains characters that
    /// are not allowed in an HTTP header value.
    pub fn new(api_key: &ApiKey) -> Result<Self, WhatsgateError> {
        let mut api_key = HeaderValue::from_str(api_key.as_str()).map_err(|e| {
            WhatsgateError::Config(format!("api key is not a valid header value: {e}"))
        })?;
        api_key.set_sensitive(true);
        Ok(Self { api_key })
    }
}

impl std::fmt::Debug for ApiKeyLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyLayer").finish_non_exhaustive()
    }
}

impl<S> Layer<S> for ApiKeyLayer {
    type Service = ApiKeyService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyService {
            inner,
            api_key: self.api_key.clone(),
        }
    }
}

/// Service created by ApiKeyLayer.
#[derive(Clone)]
pub struct ApiKeyService<S> {
    inner: S,
    api_key: HeaderValue,
}

impl<S> ApiKeyService<S> {
    // insert, not append: each header must appear exactly once
    fn inject(&self, headers: &mut HeaderMap) {
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }
}

impl<S> Service<ReqwestRequest> for ApiKeyService<S>
where
    S: Service<ReqwestRequest>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: ReqwestRequest) -> Self::Future {
        self.inject(req.headers_mut());
        self.inner.call(req)
    }
}
