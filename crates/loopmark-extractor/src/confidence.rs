//! Confidence scoring for classified messages

use crate::patterns::PatternTable;
use loopmark_domain::Label;

/// Default confidence for a keyword-only classification
const BASE_CONFIDENCE: f64 = 0.5;

/// Confidence when the message carries an explicit tag for the label
const TAG_CONFIDENCE: f64 = 0.9;

/// Bonus per pattern occurring in the text
const DENSITY_BONUS: f64 = 0.05;

/// Cap on the total density bonus
const DENSITY_BONUS_CAP: f64 = 0.30;

/// Scores how certain a classification is
///
/// An explicit tag pins the base at 0.9; otherwise the base is 0.5. Each
/// pattern from the label's full list found in the text adds 0.05, capped at
/// +0.30, and the result is clamped at 1.0. Every path yields a value in
/// [0.5, 1.0].
///
/// The tag patterns are members of the full list, so a tagged message counts
/// them toward density as well as toward the base.
pub struct ConfidenceScorer<'a> {
    table: &'a PatternTable,
}

impl<'a> ConfidenceScorer<'a> {
    /// Create a scorer over a pattern table
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table }
    }

    /// Score the classification of `text` as `label`
    pub fn score(&self, text: &str, label: Label) -> f64 {
        let mut confidence = BASE_CONFIDENCE;

        // First matching tag form short-circuits
        for tag in self.table.explicit_tags(label) {
            if tag.is_match(text) {
                confidence = TAG_CONFIDENCE;
                break;
            }
        }

        let keyword_count = self
            .table
            .patterns(label)
            .iter()
            .filter(|pattern| pattern.is_match(text))
            .count();

        confidence += (keyword_count as f64 * DENSITY_BONUS).min(DENSITY_BONUS_CAP);
        confidence.min(1.0)
    }
}
