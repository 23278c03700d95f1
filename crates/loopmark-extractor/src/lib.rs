//! Loopmark Extractor
//!
//! Classifies free-text chat messages into lifecycle-stage events.
//!
//! # Overview
//!
//! Teams that run a hypothesis loop in chat leave a trail: someone voices an
//! unknown (A), turns it into a test or measurement (B), reports what the
//! observation showed (C), and captures the result in a reusable form (D).
//! The extractor finds those messages with keyword and explicit-tag
//! heuristics, scores how certain each classification is, and groups related
//! messages under a stable topic id.
//!
//! # Architecture
//!
//! ```text
//! RawMessage → EventTypeMatcher → ConfidenceScorer → TopicIdGenerator → LoopEvent
//! ```
//!
//! Messages that match no label are skipped, never errors. Retrieval from a
//! chat platform and persistence of the produced events belong to external
//! collaborators.
//!
//! # Example Usage
//!
//! ```
//! use loopmark_extractor::{Extractor, RawMessage};
//!
//! let extractor = Extractor::new();
//!
//! let message = RawMessage {
//!     text: Some("[A] デプロイ手順に懸念があります".to_string()),
//!     url: Some("https://chat.example.com/archives/C01/p1700000000".to_string()),
//!     timestamp: None,
//! };
//!
//! let event = extractor
//!     .extract_from_message(&message, &[])
//!     .expect("explicitly tagged message matches");
//!
//! assert_eq!(event.label.letter(), 'A');
//! assert!(event.confidence >= 0.9);
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod patterns;
mod matcher;
mod confidence;
mod topic;
mod types;
mod extractor;


pub use error::ExtractorError;
pub use config::PatternConfig;
pub use patterns::PatternTable;
pub use matcher::EventTypeMatcher;
pub use confidence::ConfidenceScorer;
pub use topic::TopicIdGenerator;
pub use types::RawMessage;
pub use extractor::Extractor;
