//! Compiled trigger-pattern table

use crate::config::PatternConfig;
use crate::error::ExtractorError;
use loopmark_domain::Label;
use regex::Regex;

/// Compiled patterns for one label
#[derive(Debug)]
struct LabelPatterns {
    /// Full pattern list: contextual patterns first, explicit tags last
    patterns: Vec<Regex>,

    /// The explicit-tag forms alone (`[X]`, then `【X】`)
    explicit_tags: Vec<Regex>,
}

/// Immutable trigger-pattern table shared by the matcher and the scorer
///
/// Built once at startup and passed by reference; matching uses search
/// semantics (a pattern found anywhere in the text counts). The explicit-tag
/// forms for each label are appended to its pattern list by the table
/// itself, so they participate in keyword density like any other pattern.
#[derive(Debug)]
pub struct PatternTable {
    /// Indexed by the label's position in [`Label::ALL`]
    entries: Vec<LabelPatterns>,
}

impl PatternTable {
    /// Compile the stock pattern set
    pub fn builtin() -> Self {
        Self::from_config(&PatternConfig::builtin()).expect("builtin pattern set compiles")
    }

    /// Compile a table from a pattern configuration
    pub fn from_config(config: &PatternConfig) -> Result<Self, ExtractorError> {
        let mut entries = Vec::with_capacity(Label::ALL.len());

        for label in Label::ALL {
            let contextual = config.patterns_for(label);
            if contextual.is_empty() {
                return Err(ExtractorError::Config(format!(
                    "label {} has no patterns",
                    label.letter()
                )));
            }

            let compile = |pattern: &str| {
                Regex::new(pattern).map_err(|source| ExtractorError::InvalidPattern {
                    label: label.letter(),
                    pattern: pattern.to_string(),
                    source,
                })
            };

            let mut patterns = Vec::with_capacity(contextual.len() + 2);
            for pattern in contextual {
                patterns.push(compile(pattern)?);
            }

            let explicit_tags = vec![
                compile(&format!(r"\[{}\]", label.letter()))?,
                compile(&format!("【{}】", label.letter()))?,
            ];
            patterns.extend(explicit_tags.iter().cloned());

            entries.push(LabelPatterns {
                patterns,
                explicit_tags,
            });
        }

        Ok(Self { entries })
    }

    fn entry(&self, label: Label) -> &LabelPatterns {
        let index = match label {
            Label::HypothesisRaised => 0,
            Label::VerificationStarted => 1,
            Label::HypothesisResolved => 2,
            Label::MadeRepeatable => 3,
        };
        &self.entries[index]
    }

    /// Full pattern list for a label, explicit tags included
    pub fn patterns(&self, label: Label) -> &[Regex] {
        &self.entry(label).patterns
    }

    /// The explicit-tag patterns for a label
    pub fn explicit_tags(&self, label: Label) -> &[Regex] {
        &self.entry(label).explicit_tags
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin()
    }
}
