// File: src/core/extractors.rs
//! Read-only queries over the counter's phrases. Each returns a candidate
//! set that a human inspects before pruning or grouping.

use crate::core::counter::PhraseCounter;
use crate::core::types::{
    is_capitalized, render_collection, split_words, substring_after, substring_before, WordSet,
};
use crate::core::vocabulary::Vocabulary;

/// Names recovered from phrases that start with a title.
///
/// "Title A B" yields "A B" directly, as does any phrase under an epithet
/// title. For "Title A", "A" is kept only if no other phrase shows it is a
/// first name, a surname after a real name, or part of a longer phrase.
pub fn titled_names(counter: &PhraseCounter, vocabulary: &Vocabulary) -> WordSet {
    let mut names = WordSet::new();
    let mut candidates = WordSet::new();
    for phrase in counter.keys() {
        let words = split_words(phrase);
        if words.len() > 1
            && vocabulary.is_title(words[0])
            && is_capitalized(words[1])
            && !vocabulary.is_general(words[1])
        {
            if words.len() == 3 || vocabulary.is_epithet_title(words[0]) {
                names.insert(substring_after(phrase, " ").to_string());
            } else {
                candidates.insert(words[1].to_string());
            }
        }
    }

    for candidate in &candidates {
        let mut unique = true;
        for phrase in counter.keys() {
            // anything after "of" or "the" is a place or an epithet
            let head = substring_before(substring_before(phrase, " of "), " the ");
            let words = split_words(head);
            if words.len() == 2 {
                let (first, second) = (words[0], words[1]);
                if candidate == first || (!vocabulary.is_general(first) && candidate == second) {
                    unique = false;
                }
                if !vocabulary.is_general(first)
                    && !vocabulary.is_general(second)
                    && (candidate == first || candidate == second)
                {
                    names.insert(head.to_string());
                }
            } else if words.len() > 2 {
                let plural = format!("{}s", candidate);
                if words.iter().any(|&w| w == candidate || w == plural) {
                    unique = false;
                }
            }
        }
        if unique {
            names.insert(candidate.clone());
        }
    }
    names
}

/// Words found both bare and with a trailing "s" as whole phrases, taken
/// from non-initial positions not preceded by "the".
pub fn pluralized_names(counter: &PhraseCounter, vocabulary: &Vocabulary) -> WordSet {
    let mut pluralized = WordSet::new();
    for phrase in counter.keys() {
        let words = split_words(phrase);
        for pair in words.windows(2) {
            let (previous, word) = (pair[0], pair[1]);
            if !vocabulary.is_general(word)
                && !previous.eq_ignore_ascii_case("the")
                && counter.contains(word)
                && counter.contains(&format!("{}s", word))
            {
                pluralized.insert(word.to_string());
            }
        }
    }
    pluralized
}

/// Second words shared by at least two distinct two-word names.
pub fn surnames(counter: &PhraseCounter, vocabulary: &Vocabulary) -> WordSet {
    let mut surnames = WordSet::new();
    let mut seen_once = WordSet::new();
    for phrase in counter.keys() {
        let name = vocabulary.strip_title(phrase);
        let words = split_words(name);
        if words.len() == 2 && !vocabulary.is_general(words[0]) && !vocabulary.is_general(words[1]) {
            if !seen_once.insert(words[1].to_string()) {
                surnames.insert(words[1].to_string());
            }
        }
    }
    surnames
}

/// Text following " of " (and an optional "the ") in each phrase.
///
/// A place is dropped when its title-stripped form occurs anywhere in the
/// printed `[a, b, c]` form of `not_places`. This is a substring test, so
/// "Stark" is excluded by "Starkfall" as well.
pub fn places<I, S>(counter: &PhraseCounter, vocabulary: &Vocabulary, not_places: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let excluded = render_collection(not_places);
    let mut places = WordSet::new();
    for phrase in counter.keys() {
        if !phrase.contains(" of ") {
            continue;
        }
        let after = substring_after(phrase, " of ");
        let place = after.strip_prefix("the ").unwrap_or(after);
        if !excluded.contains(vocabulary.strip_title(place)) {
            places.insert(place.to_string());
        }
    }
    places
}

/// Single words that never take part in a multi-word phrase.
pub fn lonely_words(counter: &PhraseCounter) -> WordSet {
    let mut lonely: WordSet = counter.keys().map(str::to_string).collect();
    for phrase in counter.keys() {
        if phrase.contains(' ') {
            lonely.shift_remove(phrase);
            for word in split_words(phrase) {
                lonely.shift_remove(word);
            }
        }
    }
    lonely
}

/// Two-word names (after one title strip) whose second word is a known surname.
pub fn names_by_surname(counter: &PhraseCounter, vocabulary: &Vocabulary, surnames: &WordSet) -> WordSet {
    let mut names = WordSet::new();
    for phrase in counter.keys() {
        let name = vocabulary.strip_title(phrase);
        let words = split_words(name);
        if words.len() == 2 && !vocabulary.is_general(words[0]) && surnames.contains(words[1]) {
            if counter.contains(name) {
                names.insert(name.to_string());
            } else {
                names.insert(phrase.to_string());
            }
        }
    }
    names
}

/// First word of each name, after dropping one leading title.
pub fn first_names<I, S>(vocabulary: &Vocabulary, names: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| substring_before(vocabulary.strip_title(name.as_ref()), " ").to_string())
        .collect()
}

/// Elements of `a` that are also in `b`, in `a`'s order.
pub fn intersect_sets(a: &WordSet, b: &WordSet) -> WordSet {
    a.iter().filter(|word| b.contains(*word)).cloned().collect()
}
