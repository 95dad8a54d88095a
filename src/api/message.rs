//! Message Sending API
//!
//! Sends text messages and PDF documents through `POST /send`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use whatsgate_sdk::api::MessageApi;
//!
//! let api = MessageApi::new(Arc::new(client));
//! let response = api.send_text("79990001122", "hello").await?;
//! println!("Message ID: {}", response.result.id);
//!
//! let pdf = std::fs::read("invoice.pdf")?;
//! api.send_document("79990001122", "Your invoice", "invoice.pdf", &pdf).await?;
//! ```

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::client::WhatsgateClient;
use crate::error::WhatsgateError;
use crate::types::{Media, Message, MessageRequest, MessageResponse};

use super::WhatsgateApi;

const SEND_PATH: &str = "/send";

/// Message Sending API
pub struct MessageApi {
    client: Arc<WhatsgateClient>,
}

impl MessageApi {
    /// Create a new MessageApi instance
    pub fn new(client: Arc<WhatsgateClient>) -> Self {
        Self { client }
    }

    /// Send a text message
    ///
    /// POST /send
    ///
    /// # Arguments
    /// * `recipient` - Recipient phone number, passed through unvalidated
    /// * `text` - Message body
    ///
    /// # Errors
    /// Returns `WhatsgateError::Status` for any response other than HTTP 200
    pub async fn send_text(
        &self,
        recipient: &str,
        text: &str,
    ) -> Result<MessageResponse, WhatsgateError> {
        self.send(recipient, Message::text(text)).await
    }

    /// Send a PDF document
    ///
    /// POST /send
    ///
    /// The bytes are base64-encoded and sent inline with MIME type
    /// `application/pdf`.
    ///
    /// # Arguments
    /// * `recipient` - Recipient phone number, passed through unvalidated
    /// * `text` - Caption shown with the document
    /// * `filename` - File name shown to the recipient
    /// * `data` - Raw document content
    pub async fn send_document(
        &self,
        recipient: &str,
        text: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<MessageResponse, WhatsgateError> {
        let message = Message::document(text, Media::pdf(filename, data));
        self.send(recipient, message).await
    }

    /// Read `reader` to the end and send it as a PDF document
    ///
    /// # Errors
    /// Returns `WhatsgateError::Io` if reading fails; nothing is sent then.
    pub async fn send_document_from_reader<R>(
        &self,
        recipient: &str,
        text: &str,
        filename: &str,
        mut reader: R,
    ) -> Result<MessageResponse, WhatsgateError>
    where
        R: AsyncRead + Unpin,
    {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;
        self.send_document(recipient, text, filename, &data).await
    }

    async fn send(
        &self,
        recipient: &str,
        message: Message,
    ) -> Result<MessageResponse, WhatsgateError> {
        let request = MessageRequest::new(self.client.whatsapp_id(), recipient, message);
        self.client.post(SEND_PATH, &request).await
    }
}

impl WhatsgateApi for MessageApi {
    fn client(&self) -> &WhatsgateClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ApiKey, WhatsappId};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(base_url: &str) -> Arc<WhatsgateClient> {
        Arc::new(
            WhatsgateClient::builder()
                .api_key(ApiKey::new("k1").unwrap())
                .whatsapp_id(WhatsappId::new("wa1").unwrap())
                .base_url(base_url)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_client_accessor() {
        let api = MessageApi::new(create_test_client("http://localhost:0"));
        assert_eq!(api.client().whatsapp_id().as_str(), "wa1");
    }

    #[tokio::test]
    async fn test_send_text_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("x-api-key", "k1"))
            .and(body_partial_json(serde_json::json!({
                "WhatsappID": "wa1",
                "async": false,
                "recipient": {"number": "79990001122"},
                "message": {"type": "text", "body": "hello"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"_id": "abc", "ack": 1}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = MessageApi::new(create_test_client(&mock_server.uri()));
        let response = api.send_text("79990001122", "hello").await.unwrap();

        assert_eq!(response.result.id, "abc");
        assert_eq!(response.result.ack, 1);
    }

    #[tokio::test]
    async fn test_send_document_from_reader() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_partial_json(serde_json::json!({
                "message": {
                    "type": "doc",
                    "media": {
                        "mimetype": "application/pdf",
                        "data": "JVBERi0xLjQ=",
                        "filename": "a.pdf"
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"_id": "doc1", "hasMedia": true}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = MessageApi::new(create_test_client(&mock_server.uri()));
        let reader: &[u8] = b"%PDF-1.4";
        let response = api
            .send_document_from_reader("79990001122", "caption", "a.pdf", reader)
            .await
            .unwrap();

        assert_eq!(response.result.id, "doc1");
        assert!(response.result.has_media);
    }

    #[tokio::test]
    async fn test_send_text_non_200() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid number"))
            .mount(&mock_server)
            .await;

        let api = MessageApi::new(create_test_client(&mock_server.uri()));
        let result = api.send_text("000", "hello").await;

        match result {
            Err(WhatsgateError::Status { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "invalid number");
            }
            other => panic!("Expected WhatsgateError::Status, got {:?}", other),
        }
    }
}
