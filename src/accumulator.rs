// File: src/accumulator.rs
//! Two-pass, sentence-boundary-aware phrase accumulation.
//!
//! Lines must be fed strictly in source order: the second pass of a line
//! consults everything the counter learned from earlier lines.

use crate::core::counter::PhraseCounter;
use crate::core::tokenizer::LineTokenizer;
use crate::core::types::{is_capitalized, Chunk};
use crate::core::vocabulary::Vocabulary;
use tracing::{info, trace};

/// Chunks that may sit inside a phrase without closing it.
const CONNECTIVES: [&str; 3] = [" ", "of", "the"];

pub struct PhraseAccumulator<'v> {
    vocabulary: &'v Vocabulary,
}

/// In-progress phrase for one pass over a line.
#[derive(Default)]
struct PhraseBuffer {
    phrase: Option<String>,
    /// The phrase as of its last capitalized word, without trailing connectives.
    to_add: String,
}

impl<'v> PhraseAccumulator<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn accumulate_lines<I, S>(&self, counter: &mut PhraseCounter, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = counter.len();
        let mut line_count = 0usize;
        for line in lines {
            self.accumulate_line(counter, line.as_ref());
            line_count += 1;
        }
        info!(
            lines = line_count,
            new_phrases = counter.len().saturating_sub(before),
            total_phrases = counter.len(),
            "accumulated capitalized phrases"
        );
    }

    /// Runs both passes over one line against the counter's current state.
    pub fn accumulate_line(&self, counter: &mut PhraseCounter, line: &str) {
        let chunks = LineTokenizer::break_line(line);
        self.forward_pass(counter, &chunks);
        self.backfill_pass(counter, &chunks);
    }

    /// Capitals that do not start a sentence.
    fn forward_pass(&self, counter: &mut PhraseCounter, chunks: &[Chunk<'_>]) {
        let mut buffer = PhraseBuffer::default();
        for i in 1..chunks.len() {
            if self.vocabulary.precedes_sentence_start(chunks[i - 1]) {
                continue;
            }
            let chunk = chunks[i];
            if is_capitalized(chunk) && !self.vocabulary.is_ignored(chunk) {
                self.extend(counter, &mut buffer, chunk);
            } else {
                self.continue_or_close(counter, &mut buffer, chunk);
            }
        }
    }

    /// Sentence-initial occurrences of phrases already seen elsewhere.
    fn backfill_pass(&self, counter: &mut PhraseCounter, chunks: &[Chunk<'_>]) {
        let mut buffer = PhraseBuffer::default();
        for (i, &chunk) in chunks.iter().enumerate() {
            let sentence_initial = i == 0 || self.vocabulary.precedes_sentence_start(chunks[i - 1]);
            if buffer.phrase.is_none() && !(sentence_initial && counter.contains(chunk)) {
                continue;
            }
            if chunk.chars().count() > 1 && is_capitalized(chunk) && !self.vocabulary.is_ignored(chunk) {
                self.extend(counter, &mut buffer, chunk);
            } else {
                self.continue_or_close(counter, &mut buffer, chunk);
            }
        }
    }

    fn extend(&self, counter: &mut PhraseCounter, buffer: &mut PhraseBuffer, word: &str) {
        if !self.vocabulary.is_general(word) {
            counter.increment(word, 0);
        }
        let phrase = buffer.phrase.get_or_insert_with(String::new);
        phrase.push_str(word);
        buffer.to_add.clone_from(phrase);
    }

    fn continue_or_close(&self, counter: &mut PhraseCounter, buffer: &mut PhraseBuffer, chunk: &str) {
        let Some(phrase) = buffer.phrase.as_mut() else {
            return;
        };
        if CONNECTIVES.contains(&chunk) {
            phrase.push_str(chunk);
            return;
        }
        if !self.vocabulary.is_general(&buffer.to_add) {
            trace!(phrase = %buffer.to_add, "phrase closed");
            counter.increment(&buffer.to_add, 1);
        }
        buffer.phrase = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn run(vocabulary: &Vocabulary, lines: &[&str]) -> PhraseCounter {
        let mut counter = PhraseCounter::new();
        PhraseAccumulator::new(vocabulary).accumulate_lines(&mut counter, lines);
        counter
    }

    #[test]
    fn sentence_initial_names_are_backfilled() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        let counter = run(&vocabulary, &["Obama met John. John greeted Obama."]);
        assert_eq!(counter.get("Obama"), Some(2));
        assert_eq!(counter.get("John"), Some(2));
        assert!(!counter.contains("met"));
    }

    #[test]
    fn unknown_sentence_starters_are_skipped() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        let counter = run(&vocabulary, &["Then Arya ran. Later she slept."]);
        assert_eq!(counter.get("Arya"), Some(1));
        assert!(!counter.contains("Then"));
        assert!(!counter.contains("Later"));
    }

    #[test]
    fn connectives_glue_phrases() {
        let vocabulary = Vocabulary::new(set(&[]), set(&["King"]), set(&[]), ".");
        let counter = run(&vocabulary, &["He saw King Robb of the North today."]);
        assert_eq!(counter.get("King Robb of the North"), Some(1));
        assert_eq!(counter.get("Robb"), Some(0));
        assert_eq!(counter.get("North"), Some(0));
        assert!(!counter.contains("King"));
    }

    #[test]
    fn trailing_connective_is_not_part_of_the_phrase() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        let counter = run(&vocabulary, &["a letter from Sansa of course."]);
        assert_eq!(counter.get("Sansa"), Some(1));
    }

    #[test]
    fn lone_general_word_is_never_counted() {
        let vocabulary = Vocabulary::new(set(&[]), set(&["Lord"]), set(&["House"]), ".");
        let counter = run(&vocabulary, &["the House was quiet and the Lord slept."]);
        assert!(counter.is_empty());
    }

    #[test]
    fn ignored_words_close_phrases() {
        let vocabulary = Vocabulary::new(set(&["I"]), set(&[]), set(&[]), ".");
        let counter = run(&vocabulary, &["then Bran I think ran."]);
        assert_eq!(counter.get("Bran"), Some(1));
        assert!(!counter.contains("I"));
    }

    #[test]
    fn phrase_open_at_end_of_line_is_only_registered() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        let counter = run(&vocabulary, &["she spoke with Tyrion"]);
        assert_eq!(counter.get("Tyrion"), Some(0));
    }

    #[test]
    fn single_letter_initials_do_not_start_backfilled_phrases() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        let mut counter = PhraseCounter::new();
        counter.increment("A", 0);
        PhraseAccumulator::new(&vocabulary).accumulate_line(&mut counter, "A man came.");
        assert_eq!(counter.get("A"), Some(0));
    }

    #[test]
    fn line_order_matters() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        let forward = run(&vocabulary, &["Hodor said nothing.", "then Hodor left."]);
        let backward = run(&vocabulary, &["then Hodor left.", "Hodor said nothing."]);
        assert_eq!(forward.get("Hodor"), Some(1));
        assert_eq!(backward.get("Hodor"), Some(2));
    }

    #[test]
    fn quote_marks_sentence_start() {
        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".\"");
        let counter = run(&vocabulary, &["she said, \"Winter is coming.\""]);
        assert!(!counter.contains("Winter"));
    }
}
