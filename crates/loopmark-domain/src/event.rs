//! Loop event module - the record produced per classified message

use crate::label::Label;
use crate::topic::TopicId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message classified into a lifecycle stage
///
/// One event is assembled per message that matched a label. Events are
/// immutable once created; `note` is the only field a caller may attach
/// after the fact, and persistence or deletion belongs to external
/// collaborators.
///
/// The serialized form uses `event_type` for the label, an ISO-8601 string
/// for the timestamp, and omits `note` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopEvent {
    /// Lifecycle stage assigned to the message
    #[serde(rename = "event_type")]
    pub label: Label,

    /// Grouping key derived from the message's leading text
    pub topic_id: TopicId,

    /// Original message text
    pub message_text: String,

    /// Permalink to the message
    pub message_url: String,

    /// When the message was posted
    pub timestamp: DateTime<Utc>,

    /// Classification confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Free-form annotation, absent unless set by a caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl LoopEvent {
    /// Create a new event with no note
    pub fn new(
        label: Label,
        topic_id: TopicId,
        message_text: String,
        message_url: String,
        timestamp: DateTime<Utc>,
        confidence: f64,
    ) -> Self {
        Self {
            label,
            topic_id,
            message_text,
            message_url,
            timestamp,
            confidence,
            note: None,
        }
    }

    /// Attach a note to the event
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
