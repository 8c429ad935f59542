use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Mr,
}

impl Language {
    pub fn key(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Mr => "mr",
        }
    }

    /// The other language
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Mr,
            Language::Mr => Language::En,
        }
    }

    /// Label of the toggle button, naming the language it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "मराठी",
            Language::Mr => "ENG",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language '{}' (expected 'en' or 'mr')", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "mr" => Ok(Language::Mr),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!(" MR ".parse::<Language>(), Ok(Language::Mr));
        assert_eq!(
            "hi".parse::<Language>(),
            Err(UnknownLanguage("hi".to_string()))
        );
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Language::En.toggle(), Language::Mr);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
        assert_eq!(Language::En.toggle_label(), "मराठी");
        assert_eq!(Language::Mr.toggle_label(), "ENG");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::Mr.to_string(), "mr");
    }
}
