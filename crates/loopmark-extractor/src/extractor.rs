//! Core extraction pipeline

use crate::config::PatternConfig;
use crate::confidence::ConfidenceScorer;
use crate::error::ExtractorError;
use crate::matcher::EventTypeMatcher;
use crate::patterns::PatternTable;
use crate::topic::TopicIdGenerator;
use crate::types::RawMessage;
use chrono::Utc;
use loopmark_domain::{LoopEvent, TopicId};
use tracing::{debug, info};

/// The Extractor classifies chat messages into lifecycle-stage events
///
/// Owns the compiled pattern table and runs each message through matching,
/// confidence scoring, and topic-id generation. Messages that match no label
/// are skipped; malformed input is absorbed by field defaults. The only
/// non-deterministic path is the wall-clock fallback for messages without a
/// timestamp.
pub struct Extractor {
    table: PatternTable,
}

impl Extractor {
    /// Create an extractor with the builtin pattern set
    pub fn new() -> Self {
        Self {
            table: PatternTable::builtin(),
        }
    }

    /// Create an extractor with a custom pattern configuration
    pub fn with_config(config: &PatternConfig) -> Result<Self, ExtractorError> {
        Ok(Self {
            table: PatternTable::from_config(config)?,
        })
    }

    /// Extract an event from a single message
    ///
    /// Returns `None` when no label matches. `existing_topics` is forwarded
    /// to the topic-id generator's reserved linking seam.
    pub fn extract_from_message(
        &self,
        message: &RawMessage,
        existing_topics: &[TopicId],
    ) -> Option<LoopEvent> {
        let text = message.text.as_deref().unwrap_or("");
        let url = message.url.as_deref().unwrap_or("");

        let label = match EventTypeMatcher::new(&self.table).match_label(text) {
            Some(label) => label,
            None => {
                debug!("no label matched, skipping message");
                return None;
            }
        };

        let confidence = ConfidenceScorer::new(&self.table).score(text, label);
        let topic_id = TopicIdGenerator::new().generate(text, existing_topics);

        // Wall clock only when the source omitted a timestamp
        let timestamp = message.timestamp.unwrap_or_else(Utc::now);

        debug!(
            "classified message as {} ({}, confidence {:.2})",
            label.as_str(),
            topic_id,
            confidence
        );

        Some(LoopEvent::new(
            label,
            topic_id,
            text.to_string(),
            url.to_string(),
            timestamp,
            confidence,
        ))
    }

    /// Extract events from a sequence of messages, preserving input order
    pub fn extract_from_messages(
        &self,
        messages: &[RawMessage],
        existing_topics: &[TopicId],
    ) -> Vec<LoopEvent> {
        let mut events = Vec::new();

        for message in messages {
            if let Some(event) = self.extract_from_message(message, existing_topics) {
                events.push(event);
            }
        }

        info!(
            "extraction complete: {} messages seen, {} events extracted, {} skipped",
            messages.len(),
            events.len(),
            messages.len() - events.len()
        );

        events
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use loopmark_domain::Label;

    fn message(text: &str) -> RawMessage {
        RawMessage {
            text: Some(text.to_string()),
            url: Some("https://chat.example.com/archives/ABC123/p1234567890".to_string()),
            timestamp: Some(Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_extract_carries_message_fields() {
        let extractor = Extractor::new();
        let msg = message("この機能の仕様が不明です。もしかしてバグ？");

        let event = extractor.extract_from_message(&msg, &[]).unwrap();
        assert_eq!(event.label, Label::HypothesisRaised);
        assert_eq!(event.message_text, msg.text.as_deref().unwrap());
        assert_eq!(event.message_url, msg.url.as_deref().unwrap());
        assert_eq!(event.timestamp, msg.timestamp.unwrap());
        assert!(event.note.is_none());
    }

    #[test]
    fn test_extract_missing_fields_default() {
        let extractor = Extractor::new();
        let msg = RawMessage {
            text: Some("わかった！問題はここだった".to_string()),
            url: None,
            timestamp: None,
        };

        let before = Utc::now();
        let event = extractor.extract_from_message(&msg, &[]).unwrap();
        let after = Utc::now();

        assert_eq!(event.message_url, "");
        assert!(event.timestamp >= before && event.timestamp <= after);
    }

    #[test]
    fn test_extract_empty_message_skipped() {
        let extractor = Extractor::new();

        assert!(extractor
            .extract_from_message(&RawMessage::default(), &[])
            .is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = PatternConfig::from_toml(
            r#"
            A = ["blocked on"]
            B = ["testing"]
            C = ["confirmed"]
            D = ["automated"]
            "#,
        )
        .unwrap();
        let extractor = Extractor::with_config(&config).unwrap();

        let event = extractor
            .extract_from_message(&message("still blocked on the flaky login"), &[])
            .unwrap();
        assert_eq!(event.label, Label::HypothesisRaised);

        // Tags are appended even for custom tables
        let tagged = extractor
            .extract_from_message(&message("[C] root cause found"), &[])
            .unwrap();
        assert_eq!(tagged.label, Label::HypothesisResolved);
        assert!(tagged.confidence >= 0.9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = PatternConfig::builtin();
        config.a = Vec::new();

        assert!(Extractor::with_config(&config).is_err());
    }
}
