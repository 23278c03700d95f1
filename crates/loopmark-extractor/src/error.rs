//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur while building an extractor
///
/// Normal message input reaches no failure state: absent fields are
/// defaulted and unmatched text is skipped. Errors exist only at
/// construction time, when a caller supplies a broken pattern
/// configuration.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Pattern configuration is structurally invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configured pattern is not a valid regular expression
    #[error("Invalid pattern {pattern:?} for label {label}: {source}")]
    InvalidPattern {
        /// Letter of the label the pattern was configured for
        label: char,

        /// The offending pattern string
        pattern: String,

        /// Underlying regex compile error
        source: regex::Error,
    },
}
