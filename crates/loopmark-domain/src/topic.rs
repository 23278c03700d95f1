//! Topic id module - content-derived grouping keys

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Grouping key derived from a message's leading text
///
/// Rendered as `topic-` followed by 8 lowercase hex characters. The 32-bit
/// value is a coarse grouping key, not an identity guarantee: two messages
/// with different leading text may collide and that is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopicId(u32);

impl TopicId {
    /// Create a TopicId from a raw u32 value
    pub fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Parse a TopicId from its string form (`topic-xxxxxxxx`)
    ///
    /// # Examples
    ///
    /// ```
    /// use loopmark_domain::TopicId;
    ///
    /// let id = TopicId::from_value(0xdeadbeef);
    /// let parsed = TopicId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        let hex = s
            .strip_prefix("topic-")
            .ok_or_else(|| format!("Invalid topic id: {}", s))?;

        let valid = hex.len() == 8 && hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if !valid {
            return Err(format!("Invalid topic id: {}", s));
        }

        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|e| format!("Invalid topic id {}: {}", s, e))
    }

    /// Get the raw u32 value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "topic-{:08x}", self.0)
    }
}

impl std::str::FromStr for TopicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for TopicId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TopicId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}
