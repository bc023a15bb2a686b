//! Supported target languages and the policy for free-text languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslatrError};

/// Languages offered by the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Hindi,
    French,
    Spanish,
    German,
    Japanese,
    Chinese,
    Korean,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Hindi,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Japanese,
        Language::Chinese,
        Language::Korean,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Korean => "Korean",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = TranslatrError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TranslatrError::InvalidLanguage(s.to_string()))
    }
}

/// How target languages outside `Language::ALL` are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguagePolicy {
    /// Any non-blank language string goes to the model unchanged
    #[default]
    Open,
    /// Only the supported languages are accepted
    Strict,
}

impl LanguagePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { LanguagePolicy::Strict } else { LanguagePolicy::Open }
    }

    /// Check a language string, returning the value to substitute
    ///
    /// Strict mode normalizes casing to the canonical name.
    pub fn check(&self, language: &str) -> Result<String> {
        if language.trim().is_empty() {
            return Err(TranslatrError::InvalidLanguage("language must not be blank".to_string()));
        }
        match self {
            LanguagePolicy::Open => Ok(language.to_string()),
            LanguagePolicy::Strict => language.parse::<Language>().map(|l| l.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_form_order() {
        let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            vec!["Hindi", "French", "Spanish", "German", "Japanese", "Chinese", "Korean"]
        );
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("french".parse::<Language>().unwrap(), Language::French);
        assert_eq!(" KOREAN ".parse::<Language>().unwrap(), Language::Korean);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, TranslatrError::InvalidLanguage(ref s) if s == "Klingon"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Japanese.to_string(), "Japanese");
    }

    #[test]
    fn test_open_policy_passes_through() {
        let policy = LanguagePolicy::Open;
        assert_eq!(policy.check("Klingon").unwrap(), "Klingon");
        assert_eq!(policy.check("brazilian portuguese").unwrap(), "brazilian portuguese");
    }

    #[test]
    fn test_strict_policy() {
        let policy = LanguagePolicy::Strict;
        assert_eq!(policy.check("spanish").unwrap(), "Spanish");
        assert!(policy.check("Klingon").is_err());
    }

    #[test]
    fn test_blank_rejected_by_both() {
        assert!(LanguagePolicy::Open.check("  ").is_err());
        assert!(LanguagePolicy::Strict.check("").is_err());
    }

    #[test]
    fn test_from_strict() {
        assert_eq!(LanguagePolicy::from_strict(true), LanguagePolicy::Strict);
        assert_eq!(LanguagePolicy::from_strict(false), LanguagePolicy::Open);
        assert_eq!(LanguagePolicy::default(), LanguagePolicy::Open);
    }
}
