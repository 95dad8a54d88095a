//! Unified WhatsGate SDK client

use std::sync::Arc;

use tokio::io::AsyncRead;

use crate::api::{ContactApi, MessageApi};
use crate::error::WhatsgateError;
use crate::types::{ApiKey, MessageResponse, WhatsappId};

use super::builder::WhatsgateBuilder;
use super::WhatsgateClient;

/// Unified WhatsGate client
///
/// This is the main entry point for the SDK. Cloning is cheap and clones share
/// the same connection pool, so one instance can serve concurrent tasks.
///
/// # Example
///
/// ```rust,ignore
/// use whatsgate_sdk::Whatsgate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let whatsgate = Whatsgate::new("your_api_key", "your_whatsapp_id")?;
///
///     if whatsgate.check_number("79990001122").await? {
///         let sent = whatsgate.send_message("79990001122", "hello").await?;
///         println!("Message ID: {}", sent.result.id);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Whatsgate {
    client: Arc<WhatsgateClient>,
}

impl Whatsgate {
    /// Create a client with the default base URL and timeouts.
    ///
    /// No I/O happens here.
    ///
    /// # Errors
    /// Returns `WhatsgateError::Config` if either argument is empty or the key
    /// is not a valid header value.
    pub fn new(
        api_key: impl Into<String>,
        whatsapp_id: impl Into<String>,
    ) -> Result<Self, WhatsgateError> {
        let api_key = ApiKey::new(api_key).map_err(WhatsgateError::Config)?;
        let whatsapp_id = WhatsappId::new(whatsapp_id).map_err(WhatsgateError::Config)?;

        Self::builder()
            .api_key(api_key)
            .whatsapp_id(whatsapp_id)
            .build()
    }

    pub fn builder() -> WhatsgateBuilder {
        WhatsgateBuilder::default()
    }

    pub fn whatsapp_id(&self) -> &WhatsappId {
        self.client.whatsapp_id()
    }

    pub fn client(&self) -> &WhatsgateClient {
        &self.client
    }

    // Message API

    pub async fn send_message(
        &self,
        recipient_phone: &str,
        text: &str,
    ) -> Result<MessageResponse, WhatsgateError> {
        MessageApi::new(self.client.clone())
            .send_text(recipient_phone, text)
            .await
    }

    pub async fn send_document(
        &self,
        recipient_phone: &str,
        text: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<MessageResponse, WhatsgateError> {
        MessageApi::new(self.client.clone())
            .send_document(recipient_phone, text, filename, data)
            .await
    }

    pub async fn send_document_from_reader<R>(
        &self,
        recipient_phone: &str,
        text: &str,
        filename: &str,
        reader: R,
    ) -> Result<MessageResponse, WhatsgateError>
    where
        R: AsyncRead + Unpin,
    {
        MessageApi::new(self.client.clone())
            .send_document_from_reader(recipient_phone, text, filename, reader)
            .await
    }

    // Contact API

    pub async fn check_number(&self, phone: &str) -> Result<bool, WhatsgateError> {
        ContactApi::new(self.client.clone())
            .check_number(phone)
            .await
    }
}

impl From<WhatsgateClient> for Whatsgate {
    fn from(client: WhatsgateClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}
