//! Request bodies sent to the gateway

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::WhatsappId;

/// MIME type attached to every document send
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Body of `POST /send`
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    #[serde(rename = "WhatsappID")]
    pub whatsapp_id: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub recipient: Recipient,
    pub message: Message,
}

impl MessageRequest {
    /// Synchronous send from `whatsapp_id` to `number`
    pub fn new(whatsapp_id: &WhatsappId, number: impl Into<String>, message: Message) -> Self {
        Self {
            whatsapp_id: whatsapp_id.as_str().to_string(),
            is_async: false,
            recipient: Recipient::new(number),
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    pub number: String,
}

impl Recipient {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// Kind of outgoing message, serialized as `message.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Doc,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

impl Message {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Text,
            body: body.into(),
            media: None,
        }
    }

    /// Document message; `body` is shown as the caption
    pub fn document(body: impl Into<String>, media: Media) -> Self {
        Self {
            kind: MessageKind::Doc,
            body: body.into(),
            media: Some(media),
        }
    }
}

/// Inline file attachment
#[derive(Debug, Clone, Serialize)]
pub struct Media {
    pub mimetype: String,
    /// Standard base64 with padding
    pub data: String,
    pub filename: String,
}

impl Media {
    pub fn pdf(filename: impl Into<String>, data: &[u8]) -> Self {
        Self {
            mimetype: PDF_MIME_TYPE.to_string(),
            data: STANDARD.encode(data),
            filename: filename.into(),
        }
    }
}

/// Body of `POST /check`
#[derive(Debug, Clone, Serialize)]
pub struct CheckRequest {
    #[serde(rename = "WhatsappID")]
    pub whatsapp_id: String,
    pub number: String,
}

impl CheckRequest {
    pub fn new(whatsapp_id: &WhatsappId, number: impl Into<String>) -> Self {
        Self {
            whatsapp_id: whatsapp_id.as_str().to_string(),
            number: number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> WhatsappId {
        WhatsappId::new("wa1").unwrap()
    }

    #[test]
    fn test_text_message_wire_format() {
        let request = MessageRequest::new(&sender(), "79990001122", Message::text("hello"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "WhatsappID": "wa1",
                "async": false,
                "recipient": {"number": "79990001122"},
                "message": {"type": "text", "body": "hello"}
            })
        );
    }

    #[test]
    fn test_text_message_omits_media() {
        let json = serde_json::to_string(&Message::text("hi")).unwrap();
        assert!(!json.contains("media"));
    }

    #[test]
    fn test_document_message_wire_format() {
        let media = Media::pdf("invoice.pdf", b"%PDF-1.4");
        let message = Message::document("see attached", media);
        let request = MessageRequest::new(&sender(), "79990001122", message);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["message"]["type"], "doc");
        assert_eq!(json["message"]["body"], "see attached");
        assert_eq!(json["message"]["media"]["mimetype"], "application/pdf");
        assert_eq!(json["message"]["media"]["data"], "JVBERi0xLjQ=");
        assert_eq!(json["message"]["media"]["filename"], "invoice.pdf");
        assert_eq!(json["async"], false);
    }

    #[test]
    fn test_media_pdf_empty_payload() {
        let media = Media::pdf("empty.pdf", &[]);
        assert_eq!(media.data, "");
        assert_eq!(media.mimetype, PDF_MIME_TYPE);
    }

    #[test]
    fn test_media_pdf_binary_payload_round_trips() {
        let bytes: Vec<u8> = (0..=255).collect();
        let media = Media::pdf("bin.pdf", &bytes);
        assert_eq!(STANDARD.decode(&media.data).unwrap(), bytes);
    }

    #[test]
    fn test_check_request_wire_format() {
        let request = CheckRequest::new(&sender(), "79990001122");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"WhatsappID": "wa1", "number": "79990001122"})
        );
    }

    #[test]
    fn test_message_kind_serialization() {
        assert_eq!(serde_json::to_string(&MessageKind::Text).unwrap(), "\"text\"");
        assert_eq!(serde_json::to_string(&MessageKind::Doc).unwrap(), "\"doc\"");
    }
}
