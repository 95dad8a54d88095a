use serde::{Deserialize, Deserializer};

/// Response of `POST /send`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub result: MessageResult,
}

/// Message record echoed back by the gateway.
///
/// The gateway returns partial objects, so absent or `null` fields fall back
/// to their zero values.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageResult {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "id", deserialize_with = "null_as_default")]
    pub message_id: String,
    /// Delivery acknowledgment code
    #[serde(deserialize_with = "null_as_default")]
    pub ack: i32,
    #[serde(rename = "hasMedia", deserialize_with = "null_as_default")]
    pub has_media: bool,
    #[serde(rename = "mediaKey", deserialize_with = "null_as_default")]
    pub media_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub from_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(rename = "isForwarded", deserialize_with = "null_as_default")]
    pub is_forwarded: bool,
}

/// Response of `POST /check`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: String,
    /// Whether the number is registered on WhatsApp; absent or `null` reads as `false`
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_message_response() {
        let json = r#"{"result":{"_id":"abc","ack":1}}"#;
        let response: MessageResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.result.id, "abc");
        assert_eq!(response.result.ack, 1);
        assert_eq!(response.result.message_id, "");
        assert!(!response.result.has_media);
    }

    #[test]
    fn test_full_message_response() {
        let json = serde_json::json!({
            "result": {
                "_id": "abc",
                "id": "true_79990001122@c.us_3EB0",
                "ack": 2,
                "hasMedia": true,
                "mediaKey": "mk",
                "body": "hello",
                "type": "document",
                "timestamp": 1700000000,
                "from": "79990000000@c.us",
                "from_name": "Shop",
                "to": "79990001122@c.us",
                "isForwarded": false,
                "deviceType": "web"
            }
        });
        let response: MessageResponse = serde_json::from_value(json).unwrap();
        let result = response.result;

        assert_eq!(result.message_id, "true_79990001122@c.us_3EB0");
        assert_eq!(result.ack, 2);
        assert!(result.has_media);
        assert_eq!(result.media_key, "mk");
        assert_eq!(result.body, "hello");
        assert_eq!(result.kind, "document");
        assert_eq!(result.timestamp, 1_700_000_000);
        assert_eq!(result.from, "79990000000@c.us");
        assert_eq!(result.from_name, "Shop");
        assert_eq!(result.to, "79990001122@c.us");
        assert!(!result.is_forwarded);
    }

    #[test]
    fn test_null_fields_become_defaults() {
        let json = r#"{"result":{"_id":"abc","mediaKey":null,"ack":null}}"#;
        let response: MessageResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.result.media_key, "");
        assert_eq!(response.result.ack, 0);
    }

    #[test]
    fn test_missing_result_is_empty() {
        let response: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, MessageResponse::default());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let json = r#"{"result":{"ack":"one"}}"#;
        assert!(serde_json::from_str::<MessageResponse>(json).is_err());
    }

    #[test]
    fn test_check_response() {
        let response: CheckResponse =
            serde_json::from_str(r#"{"result":"OK","data":true}"#).unwrap();
        assert_eq!(response.result, "OK");
        assert!(response.data);

        let response: CheckResponse = serde_json::from_str(r#"{"data":false}"#).unwrap();
        assert!(!response.data);
    }

    #[test]
    fn test_check_response_missing_or_null_data_is_false() {
        let response: CheckResponse = serde_json::from_str(r#"{"result":"OK"}"#).unwrap();
        assert!(!response.data);

        let response: CheckResponse =
            serde_json::from_str(r#"{"result":"OK","data":null}"#).unwrap();
        assert!(!response.data);

        let response: CheckResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.result, "");
        assert!(!response.data);
    }
}
