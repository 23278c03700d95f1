//! Pattern configuration for the extractor

use loopmark_domain::Label;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contextual trigger patterns per label
///
/// Each list holds the keyword patterns that suggest its label when found
/// anywhere in a message. The explicit-tag forms (`[X]` and `【X】`) are not
/// listed here; [`PatternTable`](crate::PatternTable) always appends them
/// when the table is compiled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Patterns for stage A (hypothesis raised)
    #[serde(rename = "A")]
    pub a: Vec<String>,

    /// Patterns for stage B (verification in progress)
    #[serde(rename = "B")]
    pub b: Vec<String>,

    /// Patterns for stage C (hypothesis resolved)
    #[serde(rename = "C")]
    pub c: Vec<String>,

    /// Patterns for stage D (made repeatable)
    #[serde(rename = "D")]
    pub d: Vec<String>,
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl PatternConfig {
    /// The stock Japanese keyword set
    ///
    /// Covers the vocabulary each stage is voiced with in chat, plus the
    /// shorthand `?X` marker some teams type instead of a bracket tag.
    pub fn builtin() -> Self {
        Self {
            a: owned(&[
                "不明",
                "わからない",
                "疑問",
                "懸念",
                "仮説",
                "もしかして",
                "気になる",
                "不安",
                r"\?A\b",
            ]),
            b: owned(&[
                "試しに",
                "テスト",
                "計測",
                "確認",
                "調べる",
                "検証",
                "測る",
                "見る",
                r"\?B\b",
            ]),
            c: owned(&[
                "わかった",
                "判明",
                "潰れた",
                "否定",
                "正解",
                "間違い",
                "結果",
                "ダメだった",
                r"\?C\b",
            ]),
            d: owned(&[
                "自動化",
                "テンプレ",
                "再利用",
                "資産化",
                "次回も",
                "定型化",
                "マニュアル",
                r"\?D\b",
            ]),
        }
    }

    /// Get the contextual patterns configured for a label
    pub fn patterns_for(&self, label: Label) -> &[String] {
        match label {
            Label::HypothesisRaised => &self.a,
            Label::VerificationStarted => &self.b,
            Label::HypothesisResolved => &self.c,
            Label::MadeRepeatable => &self.d,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for label in Label::ALL {
            let patterns = self.patterns_for(label);
            if patterns.is_empty() {
                return Err(format!("label {} has no patterns", label.letter()));
            }
            for pattern in patterns {
                Regex::new(pattern).map_err(|e| {
                    format!(
                        "invalid pattern {:?} for label {}: {}",
                        pattern,
                        label.letter(),
                        e
                    )
                })?;
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_is_valid() {
        let config = PatternConfig::builtin();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_label_has_patterns() {
        let config = PatternConfig::builtin();
        for label in Label::ALL {
            assert!(!config.patterns_for(label).is_empty());
        }
    }

    #[test]
    fn test_empty_label_rejected() {
        let mut config = PatternConfig::builtin();
        config.c = Vec::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let mut config = PatternConfig::builtin();
        config.a.push("(unclosed".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PatternConfig::builtin();
        let toml_str = config.to_toml().unwrap();
        let parsed = PatternConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.a, parsed.a);
        assert_eq!(config.b, parsed.b);
        assert_eq!(config.c, parsed.c);
        assert_eq!(config.d, parsed.d);
    }

    #[test]
    fn test_toml_uses_label_letters() {
        let toml_str = r#"
            A = ["blocked on", "unsure"]
            B = ["testing", "measuring"]
            C = ["confirmed", "ruled out"]
            D = ["automated", "templated"]
        "#;

        let config = PatternConfig::from_toml(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.patterns_for(Label::HypothesisRaised).len(), 2);
    }
}
