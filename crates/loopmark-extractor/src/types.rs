//! Input types consumed by the extractor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw message from a chat-platform source
///
/// Every field is optional so arbitrary export payloads never fail to
/// deserialize. The pipeline substitutes defaults for whatever is missing:
/// empty strings for `text` and `url`, the wall clock at processing time for
/// `timestamp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    /// Message body
    #[serde(default)]
    pub text: Option<String>,

    /// Permalink to the message
    #[serde(default)]
    pub url: Option<String>,

    /// When the message was posted
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_message() {
        let json = r#"{
            "text": "試しにテストします",
            "url": "https://chat.example.com/archives/C01/p1",
            "timestamp": "2024-05-17T09:30:00Z"
        }"#;

        let message: RawMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.text.as_deref(), Some("試しにテストします"));
        assert!(message.timestamp.is_some());
    }

    #[test]
    fn test_deserialize_partial_message() {
        let message: RawMessage = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(message.text.as_deref(), Some("hello"));
        assert!(message.url.is_none());
        assert!(message.timestamp.is_none());

        let empty: RawMessage = serde_json::from_str("{}").unwrap();
        assert!(empty.text.is_none());
    }
}
