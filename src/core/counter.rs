// --- File: src/core/counter.rs
use crate::core::types::Count;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Frequency table of capitalized phrases.
///
/// Keys keep their first-discovery order, which is what every listing and
/// tie-break in the crate falls back on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCounter {
    counts: IndexMap<String, Count>,
}

impl PhraseCounter {
    pub fn new() -> Self {
        Self { counts: IndexMap::new() }
    }

    /// Adds `delta` to `phrase`, creating it at `delta` when absent.
    /// A zero delta only registers the phrase.
    pub fn increment(&mut self, phrase: &str, delta: Count) {
        if let Some(count) = self.counts.get_mut(phrase) {
            *count = count.saturating_add(delta);
        } else {
            self.counts.insert(phrase.to_string(), delta);
        }
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.counts.contains_key(phrase)
    }

    pub fn get(&self, phrase: &str) -> Option<Count> {
        self.counts.get(phrase).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Entries by descending count; equal counts keep discovery order.
    pub fn sorted_desc(&self) -> Vec<(&str, Count)> {
        let mut entries: Vec<(&str, Count)> = self.iter().collect();
        entries.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        entries
    }

    /// `phrase,count` lines by descending count, a blank line, then the key total.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .sorted_desc()
            .into_iter()
            .map(|(phrase, count)| format!("{},{}", phrase, count))
            .collect();
        lines.push(String::new());
        lines.push(self.len().to_string());
        lines
    }
}

impl FromIterator<(String, Count)> for PhraseCounter {
    /// Collects entries, summing the counts of repeated keys.
    fn from_iter<T: IntoIterator<Item = (String, Count)>>(iter: T) -> Self {
        let mut counts: IndexMap<String, Count> = IndexMap::new();
        for (phrase, count) in iter {
            let total = counts.entry(phrase).or_insert(0);
            *total = total.saturating_add(count);
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_upserts() {
        let mut counter = PhraseCounter::new();
        counter.increment("Arya", 0);
        assert_eq!(counter.get("Arya"), Some(0));
        counter.increment("Arya", 2);
        counter.increment("Arya", -1);
        assert_eq!(counter.get("Arya"), Some(1));
        assert_eq!(counter.get("Sansa"), None);
    }

    #[test]
    fn increment_saturates() {
        let mut counter = PhraseCounter::new();
        counter.increment("Hodor", Count::MAX);
        counter.increment("Hodor", 1);
        assert_eq!(counter.get("Hodor"), Some(Count::MAX));
        counter.increment("Ghost", Count::MIN);
        counter.increment("Ghost", -1);
        assert_eq!(counter.get("Ghost"), Some(Count::MIN));
    }

    #[test]
    fn collecting_merges_duplicates() {
        let counter: PhraseCounter = vec![
            ("Jon".to_string(), 2),
            ("Bran".to_string(), 1),
            ("Jon".to_string(), 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.get("Jon"), Some(5));
        assert_eq!(counter.keys().collect::<Vec<_>>(), vec!["Jon", "Bran"]);
    }

    #[test]
    fn report_is_sorted_with_stable_ties() {
        let mut counter = PhraseCounter::new();
        counter.increment("Bran", 1);
        counter.increment("Jon", 4);
        counter.increment("Arya", 1);
        assert_eq!(counter.report_lines(), vec!["Jon,4", "Bran,1", "Arya,1", "", "3"]);
    }
}
