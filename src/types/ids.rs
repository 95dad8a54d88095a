use serde::{Deserialize, Serialize};

/// WhatsGate API key, sent as the `X-Api-Key` header
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.is_empty() {
            return Err("ApiKey must not be empty".to_string());
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

/// Identifier of the WhatsApp account messages are sent from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WhatsappId(String);

impl WhatsappId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("WhatsappId must not be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WhatsappId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_valid() {
        let key = ApiKey::new("k1").unwrap();
        assert_eq!(key.as_str(), "k1");
    }

    #[test]
    fn test_api_key_empty() {
        assert!(ApiKey::new("").is_err());
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_whatsapp_id_valid() {
        let id = WhatsappId::new("wa1").unwrap();
        assert_eq!(id.as_str(), "wa1");
        assert_eq!(id.to_string(), "wa1");
    }

    #[test]
    fn test_whatsapp_id_empty() {
        let result = WhatsappId::new(String::new());
        assert_eq!(result.unwrap_err(), "WhatsappId must not be empty");
    }

    #[test]
    fn test_whatsapp_id_serializes_transparently() {
        let id = WhatsappId::new("wa1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"wa1\"");
    }
}
