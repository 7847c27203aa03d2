// File: src/core/vocabulary.rs
use crate::core::types::{is_capitalized, split_words, substring_after};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Words that are capitalized in the source text but carry a special meaning
/// for extraction. Immutable for the lifetime of a finder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Capitalized words excluded from extraction entirely.
    ignored_words: HashSet<String>,
    /// Honorifics such as "Lord" or "Dr.". Every title is also general.
    title_words: HashSet<String>,
    /// Non-distinctive words that may extend a phrase but never stand alone.
    general_words: HashSet<String>,
    /// Characters after which a capital letter starts a sentence.
    punctuation: String,
    /// Titles whose remainder is always a name on its own, e.g. "Khal Drogo".
    epithet_titles: HashSet<String>,
}

impl Vocabulary {
    pub fn new(
        ignored_words: HashSet<String>,
        title_words: HashSet<String>,
        general_words: HashSet<String>,
        punctuation: impl Into<String>,
    ) -> Self {
        Self {
            ignored_words,
            title_words,
            general_words,
            punctuation: punctuation.into(),
            epithet_titles: HashSet::new(),
        }
    }

    pub fn with_epithet_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.epithet_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignored_words(&self) -> &HashSet<String> {
        &self.ignored_words
    }

    pub fn title_words(&self) -> &HashSet<String> {
        &self.title_words
    }

    pub fn general_words(&self) -> &HashSet<String> {
        &self.general_words
    }

    pub fn punctuation(&self) -> &str {
        &self.punctuation
    }

    pub fn epithet_titles(&self) -> &HashSet<String> {
        &self.epithet_titles
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored_words.contains(word)
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.title_words.contains(word)
    }

    /// A word is general when it is a title or a configured general word.
    pub fn is_general(&self, word: &str) -> bool {
        self.is_title(word) || self.general_words.contains(word)
    }

    pub fn is_epithet_title(&self, word: &str) -> bool {
        self.epithet_titles.contains(word)
    }

    /// True when `chunk` holds any configured sentence-start character.
    pub fn precedes_sentence_start(&self, chunk: &str) -> bool {
        chunk.chars().any(|c| self.punctuation.contains(c))
    }

    /// Drops one leading title when the word after it is capitalized.
    ///
    /// `"Lord Eddard Stark"` becomes `"Eddard Stark"`; `"Lord of Winterfell"`
    /// and `"Plain Word"` come back unchanged.
    pub fn strip_title<'a>(&self, name: &'a str) -> &'a str {
        let words = split_words(name);
        if words.len() > 1 && self.is_title(words[0]) && is_capitalized(words[1]) {
            substring_after(name, " ")
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn vocab() -> Vocabulary {
        Vocabulary::new(set(&["I"]), set(&["Dr.", "Lord"]), set(&["House"]), ".?!\"")
    }

    #[test]
    fn titles_are_general() {
        let v = vocab();
        assert!(v.is_general("Lord"));
        assert!(v.is_general("House"));
        assert!(!v.is_title("House"));
        assert!(!v.is_general("Watson"));
    }

    #[test]
    fn strip_title_removes_one_leading_title() {
        let v = vocab();
        assert_eq!(v.strip_title("Dr. Watson"), "Watson");
        assert_eq!(v.strip_title("Lord Dr. Watson"), "Dr. Watson");
        assert_eq!(v.strip_title("Plain Word"), "Plain Word");
        assert_eq!(v.strip_title("Lord of Winterfell"), "Lord of Winterfell");
        assert_eq!(v.strip_title("Lord"), "Lord");
    }

    #[test]
    fn sentence_start_markers() {
        let v = vocab();
        assert!(v.precedes_sentence_start(". "));
        assert!(v.precedes_sentence_start(", \""));
        assert!(!v.precedes_sentence_start(", "));
        assert!(!v.precedes_sentence_start(" "));
    }
}
