//! Contact API
//!
//! Checks whether a phone number is registered on WhatsApp.

use std::sync::Arc;

use crate::client::WhatsgateClient;
use crate::error::WhatsgateError;
use crate::types::{CheckRequest, CheckResponse};

use super::WhatsgateApi;

const CHECK_PATH: &str = "/check";

/// Contact API
pub struct ContactApi {
    client: Arc<WhatsgateClient>,
}

impl ContactApi {
    /// Create a new ContactApi instance
    pub fn new(client: Arc<WhatsgateClient>) -> Self {
        Self { client }
    }

    /// Check whether `phone` is registered on WhatsApp
    ///
    /// POST /check
    ///
    /// # Errors
    /// A non-200 response is `WhatsgateError::Status`, never `Ok(false)`.
    pub async fn check_number(&self, phone: &str) -> Result<bool, WhatsgateError> {
        let response = self.check(phone).await?;
        Ok(response.data)
    }

    /// Same as [`check_number`](Self::check_number) but returns the full response
    pub async fn check(&self, phone: &str) -> Result<CheckResponse, WhatsgateError> {
        let request = CheckRequest::new(self.client.whatsapp_id(), phone);
        self.client.post(CHECK_PATH, &request).await
    }
}

impl WhatsgateApi for ContactApi {
    fn client(&self) -> &WhatsgateClient {
        &self.client
    }
}
