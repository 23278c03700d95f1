//! Topic id generation from message content

use loopmark_domain::TopicId;
use sha2::{Digest, Sha256};

/// How many leading characters of a message feed the topic digest
const PREVIEW_CHARS: usize = 20;

/// Derives a stable grouping key from a message's leading text
///
/// The first 20 characters of the text, trimmed of surrounding whitespace,
/// are hashed and truncated to the 32-bit [`TopicId`] value. Identical
/// prefixes always yield identical ids, within a run and across runs.
///
/// `existing_topics` is a reserved seam for a future similarity-based
/// linking strategy; it never affects the result today.
pub struct TopicIdGenerator;

impl TopicIdGenerator {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }

    /// Generate the topic id for `text`
    pub fn generate(&self, text: &str, _existing_topics: &[TopicId]) -> TopicId {
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        let digest = Sha256::digest(preview.trim().as_bytes());

        let value = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        TopicId::from_value(value)
    }
}

impl Default for TopicIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
