// File: src/config.rs
use crate::core::vocabulary::Vocabulary;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Sentence terminators plus straight and left curly double quotes.
pub const DEFAULT_PUNCTUATION: &str = ".?!\"\u{201C}";

/// Per-corpus settings, usually kept next to the text as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub ignored_words: HashSet<String>,
    pub title_words: HashSet<String>,
    pub general_words: HashSet<String>,
    pub punctuation: String,
    pub epithet_titles: HashSet<String>,
    /// Words that never justify grouping two aliases.
    pub nondescriptors: HashSet<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            ignored_words: HashSet::new(),
            title_words: HashSet::new(),
            general_words: HashSet::new(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            epithet_titles: ["Ko", "Khal"].iter().map(|s| s.to_string()).collect(),
            nondescriptors: HashSet::new(),
        }
    }
}

impl FinderConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::new(
            self.ignored_words.clone(),
            self.title_words.clone(),
            self.general_words.clone(),
            self.punctuation.clone(),
        )
        .with_epithet_titles(self.epithet_titles.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = FinderConfig::from_json(r#"{ "title_words": ["Lord", "Ser"] }"#).unwrap();
        assert_eq!(config.punctuation, DEFAULT_PUNCTUATION);
        assert!(config.epithet_titles.contains("Khal"));
        let vocabulary = config.vocabulary();
        assert!(vocabulary.is_title("Ser"));
        assert!(vocabulary.is_epithet_title("Ko"));
        assert!(vocabulary.precedes_sentence_start("\u{201C}"));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = FinderConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::error::FinderError::Config(_)));
    }
}
