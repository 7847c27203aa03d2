// File: src/core/reducers.rs
//! Counter rewrites. Every reducer builds a fresh counter from the old one;
//! keys that collapse onto the same phrase have their counts summed.

use crate::core::counter::PhraseCounter;
use crate::core::types::{count_spaces, split_words, substring_before, Count, WordSet};
use crate::core::vocabulary::Vocabulary;

/// Collapses "Name of Place" onto "Name" when "Name" is not a general word.
pub fn remove_places(counter: &PhraseCounter, vocabulary: &Vocabulary) -> PhraseCounter {
    counter
        .iter()
        .map(|(phrase, count)| {
            let mut reduced = phrase;
            if phrase.contains(" of ") {
                let name = substring_before(phrase, " of ");
                if !vocabulary.is_general(name) {
                    reduced = name;
                }
            }
            (reduced.to_string(), count)
        })
        .collect()
}

/// Strips leading titles while more than two words remain.
///
/// Bounded by the phrase's original space count, so a phrase loses at most
/// one title per space and always ends up at a fixed point.
pub fn remove_titles(counter: &PhraseCounter, vocabulary: &Vocabulary) -> PhraseCounter {
    counter
        .iter()
        .map(|(phrase, count)| {
            let mut reduced = phrase;
            for _ in 1..count_spaces(phrase) {
                if split_words(reduced).len() <= 2 {
                    break;
                }
                reduced = vocabulary.strip_title(reduced);
            }
            (reduced.to_string(), count)
        })
        .collect()
}

/// Drops members of `words` seen fewer than `threshold` times.
pub fn remove_words_below_threshold(counter: &PhraseCounter, words: &WordSet, threshold: Count) -> PhraseCounter {
    counter
        .iter()
        .filter(|&(phrase, count)| !words.contains(phrase) || count >= threshold)
        .map(|(phrase, count)| (phrase.to_string(), count))
        .collect()
}

/// Drops every member of `words`.
pub fn remove_words(counter: &PhraseCounter, words: &WordSet) -> PhraseCounter {
    remove_words_below_threshold(counter, words, Count::MAX)
}
