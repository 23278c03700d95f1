//! Label assignment by first pattern match

use crate::patterns::PatternTable;
use loopmark_domain::Label;

/// Assigns a lifecycle label to message text
///
/// Labels are tried in [`Label::ALL`] priority order (A, B, C, D) and the
/// first label with any pattern occurring in the text wins. A message whose
/// text could satisfy several labels therefore returns only the
/// highest-priority one; this first-match-wins rule is deliberate policy,
/// not a scored best match.
///
/// Pure function of the table and the text; safe to call concurrently.
pub struct EventTypeMatcher<'a> {
    table: &'a PatternTable,
}

impl<'a> EventTypeMatcher<'a> {
    /// Create a matcher over a pattern table
    pub fn new(table: &'a PatternTable) -> Self {
        Self { table }
    }

    /// Return the first matching label, or `None` if nothing matches
    pub fn match_label(&self, text: &str) -> Option<Label> {
        for label in Label::ALL {
            if self
                .table
                .patterns(label)
                .iter()
                .any(|pattern| pattern.is_match(text))
            {
                return Some(label);
            }
        }
        None
    }
}
