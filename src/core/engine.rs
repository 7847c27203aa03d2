use crate::accumulator::PhraseAccumulator;
use crate::config::FinderConfig;
use crate::core::counter::PhraseCounter;
use crate::core::types::{Count, WordSet};
use crate::core::vocabulary::Vocabulary;
use crate::core::{extractors, formatter, reducers};
use crate::error::{FinderError, Result};
use crate::groups::CharacterGroups;
use crate::persistence::{load_from_disk, save_to_disk};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

// The finder owns the live counter; reducers hand back a fresh counter that
// replaces it wholesale. Groups are built once the counter is curated.
pub struct CharacterFinder {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) counter: PhraseCounter,
    groups: Option<CharacterGroups>,
}

impl CharacterFinder {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            counter: PhraseCounter::new(),
            groups: None,
        }
    }

    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.vocabulary())
    }

    pub fn from_file_or_new(path: &Path, vocabulary: Vocabulary) -> Self {
        load_from_disk(path).unwrap_or_else(|_| Self::new(vocabulary))
    }

    pub(crate) fn restore(vocabulary: Vocabulary, counter: PhraseCounter) -> Self {
        Self {
            vocabulary,
            counter,
            groups: None,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn counter(&self) -> &PhraseCounter {
        &self.counter
    }

    pub fn character_groups(&self) -> Option<&CharacterGroups> {
        self.groups.as_ref()
    }

    pub fn clear(&mut self) {
        self.counter.clear();
        self.groups = None;
    }

    /// Feeds lines in order. Earlier lines decide which sentence-initial
    /// capitals later lines may count, so order is significant.
    pub fn count_capitalized<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PhraseAccumulator::new(&self.vocabulary).accumulate_lines(&mut self.counter, lines);
    }

    pub fn increment_name(&mut self, name: &str, delta: Count) {
        self.counter.increment(name, delta);
    }

    pub fn strip_title<'a>(&self, name: &'a str) -> &'a str {
        self.vocabulary.strip_title(name)
    }

    pub fn titled_names(&self) -> WordSet {
        extractors::titled_names(&self.counter, &self.vocabulary)
    }

    pub fn pluralized_names(&self) -> WordSet {
        extractors::pluralized_names(&self.counter, &self.vocabulary)
    }

    pub fn surnames(&self) -> WordSet {
        extractors::surnames(&self.counter, &self.vocabulary)
    }

    pub fn places<I, S>(&self, not_places: I) -> WordSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extractors::places(&self.counter, &self.vocabulary, not_places)
    }

    pub fn lonely_words(&self) -> WordSet {
        extractors::lonely_words(&self.counter)
    }

    pub fn names_by_surname(&self, surnames: &WordSet) -> WordSet {
        extractors::names_by_surname(&self.counter, &self.vocabulary, surnames)
    }

    pub fn first_names<I, S>(&self, names: I) -> WordSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extractors::first_names(&self.vocabulary, names)
    }

    pub fn remove_places(&mut self) {
        let reduced = reducers::remove_places(&self.counter, &self.vocabulary);
        self.replace_counter("remove_places", reduced);
    }

    pub fn remove_titles(&mut self) {
        let reduced = reducers::remove_titles(&self.counter, &self.vocabulary);
        self.replace_counter("remove_titles", reduced);
    }

    pub fn remove_words(&mut self, words: &WordSet) {
        let reduced = reducers::remove_words(&self.counter, words);
        self.replace_counter("remove_words", reduced);
    }

    pub fn remove_words_below_threshold(&mut self, words: &WordSet, threshold: Count) {
        let reduced = reducers::remove_words_below_threshold(&self.counter, words, threshold);
        self.replace_counter("remove_words_below_threshold", reduced);
    }

    fn replace_counter(&mut self, reducer: &str, reduced: PhraseCounter) {
        info!(reducer, before = self.counter.len(), after = reduced.len(), "counter reduced");
        self.counter = reduced;
    }

    pub fn build_character_groups(&mut self, nondescriptors: &HashSet<String>) {
        self.groups = Some(CharacterGroups::new(&self.counter, nondescriptors));
    }

    /// Combines the first name's group with the group of every other name.
    pub fn combine_groups<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = self.groups.as_mut().ok_or(FinderError::GroupsNotBuilt)?;
        let mut names = names.into_iter();
        let Some(first) = names.next() else {
            return Ok(());
        };
        for name in names {
            groups.combine(first.as_ref(), name.as_ref());
        }
        Ok(())
    }

    /// One line per group, over every primary alias.
    pub fn all_name_list(&self) -> Result<Vec<String>> {
        let groups = self.groups.as_ref().ok_or(FinderError::GroupsNotBuilt)?;
        Ok(formatter::name_list(groups, groups.primary_aliases()))
    }

    pub fn name_list<I, S>(&self, names: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = self.groups.as_ref().ok_or(FinderError::GroupsNotBuilt)?;
        Ok(formatter::name_list(groups, names))
    }

    pub fn first_name_list<I, S>(&self, names: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = self.groups.as_ref().ok_or(FinderError::GroupsNotBuilt)?;
        Ok(formatter::first_name_list(groups, &self.vocabulary, names))
    }

    pub fn counter_report(&self) -> Vec<String> {
        self.counter.report_lines()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_to_disk(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn finder() -> CharacterFinder {
        CharacterFinder::new(Vocabulary::new(set(&[]), set(&["Lord"]), set(&[]), "."))
    }

    #[test]
    fn lists_need_groups() {
        let mut f = finder();
        assert!(matches!(f.all_name_list(), Err(FinderError::GroupsNotBuilt)));
        assert!(matches!(f.combine_groups(["A", "B"]), Err(FinderError::GroupsNotBuilt)));
        f.build_character_groups(&HashSet::new());
        assert!(f.all_name_list().unwrap().is_empty());
    }

    #[test]
    fn clear_resets_counter_and_groups() {
        let mut f = finder();
        f.count_capitalized(["the girl saw Arya run."]);
        f.build_character_groups(&HashSet::new());
        assert!(!f.counter().is_empty());
        f.clear();
        assert!(f.counter().is_empty());
        assert!(f.character_groups().is_none());
    }

    #[test]
    fn reducers_replace_the_counter() {
        let mut f = finder();
        f.increment_name("Lord Eddard Stark", 2);
        f.increment_name("Eddard Stark", 3);
        f.remove_titles();
        assert_eq!(f.counter().get("Eddard Stark"), Some(5));
        assert_eq!(f.counter().len(), 1);
    }
}
