//! Label module - lifecycle stages for extracted events

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a hypothesis loop
///
/// Messages are classified into one of four stages:
/// - HypothesisRaised (A): an unknown, concern, or hypothesis is newly voiced
/// - VerificationStarted (B): the unknown is being probed (test, measurement, check)
/// - HypothesisResolved (C): observation confirmed, weakened, or killed the hypothesis
/// - MadeRepeatable (D): the outcome is captured in a reusable form (automation, template)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// A new unknown or hypothesis was put into words (A)
    #[serde(rename = "A")]
    HypothesisRaised,

    /// The unknown is being converted into an observation (B)
    #[serde(rename = "B")]
    VerificationStarted,

    /// The observation resolved the hypothesis (C)
    #[serde(rename = "C")]
    HypothesisResolved,

    /// The result now runs again next time (D)
    #[serde(rename = "D")]
    MadeRepeatable,
}

impl Label {
    /// All labels in matching priority order: A, B, C, D.
    ///
    /// A message whose text satisfies several labels is assigned the first
    /// one in this list. The order is an explicit policy of the matcher,
    /// not an artifact of container iteration.
    pub const ALL: [Label; 4] = [
        Label::HypothesisRaised,
        Label::VerificationStarted,
        Label::HypothesisResolved,
        Label::MadeRepeatable,
    ];

    /// Get the single-letter form used in explicit tags and on the wire
    pub fn letter(&self) -> char {
        match self {
            Label::HypothesisRaised => 'A',
            Label::VerificationStarted => 'B',
            Label::HypothesisResolved => 'C',
            Label::MadeRepeatable => 'D',
        }
    }

    /// Get the label name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::HypothesisRaised => "A",
            Label::VerificationStarted => "B",
            Label::HypothesisResolved => "C",
            Label::MadeRepeatable => "D",
        }
    }

    /// Parse a label from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(Label::HypothesisRaised),
            "B" => Some(Label::VerificationStarted),
            "C" => Some(Label::HypothesisResolved),
            "D" => Some(Label::MadeRepeatable),
            _ => None,
        }
    }

    /// Get the next stage in the loop
    pub fn next(&self) -> Option<Self> {
        match self {
            Label::HypothesisRaised => Some(Label::VerificationStarted),
            Label::VerificationStarted => Some(Label::HypothesisResolved),
            Label::HypothesisResolved => Some(Label::MadeRepeatable),
            Label::MadeRepeatable => None, // Loop is closed
        }
    }

    /// Get the previous stage in the loop
    pub fn previous(&self) -> Option<Self> {
        match self {
            Label::HypothesisRaised => None, // Already at the start
            Label::VerificationStarted => Some(Label::HypothesisRaised),
            Label::HypothesisResolved => Some(Label::VerificationStarted),
            Label::MadeRepeatable => Some(Label::HypothesisResolved),
        }
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid label: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let letters: Vec<char> = Label::ALL.iter().map(|l| l.letter()).collect();
        assert_eq!(letters, vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn test_parse_round_trip() {
        for label in Label::ALL {
            assert_eq!(Label::parse(label.as_str()), Some(label));
        }
        assert_eq!(Label::parse("a"), Some(Label::HypothesisRaised));
        assert_eq!(Label::parse("E"), None);
        assert_eq!(Label::parse(""), None);
    }

    #[test]
    fn test_stage_progression() {
        assert_eq!(
            Label::HypothesisRaised.next(),
            Some(Label::VerificationStarted)
        );
        assert_eq!(
            Label::VerificationStarted.next(),
            Some(Label::HypothesisResolved)
        );
        assert_eq!(
            Label::HypothesisResolved.next(),
            Some(Label::MadeRepeatable)
        );
        assert_eq!(Label::MadeRepeatable.next(), None);
    }

    #[test]
    fn test_stage_regression() {
        assert_eq!(
            Label::MadeRepeatable.previous(),
            Some(Label::HypothesisResolved)
        );
        assert_eq!(
            Label::HypothesisResolved.previous(),
            Some(Label::VerificationStarted)
        );
        assert_eq!(
            Label::VerificationStarted.previous(),
            Some(Label::HypothesisRaised)
        );
        assert_eq!(Label::HypothesisRaised.previous(), None);
    }

    #[test]
    fn test_serde_letter_form() {
        let json = serde_json::to_string(&Label::VerificationStarted).unwrap();
        assert_eq!(json, r#""B""#);

        let parsed: Label = serde_json::from_str(r#""D""#).unwrap();
        assert_eq!(parsed, Label::MadeRepeatable);
    }
}
