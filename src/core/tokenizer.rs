// File: src/core/tokenizer.rs
use crate::core::types::Chunk;

/// Breaks lines into alternating runs of letters and non-letters.
pub struct LineTokenizer;

impl LineTokenizer {
    /// Splits `line` into chunks at every letter/non-letter transition.
    ///
    /// Concatenating the chunks reproduces the line, except that any
    /// non-letters before the first letter are dropped.
    /// Complexity: O(n) in the line length.
    pub fn break_line(line: &str) -> Vec<Chunk<'_>> {
        let mut chunks = Vec::new();
        let start = match line.char_indices().find(|(_, c)| c.is_alphabetic()) {
            Some((idx, _)) => idx,
            None => return chunks,
        };

        let mut chunk_start = start;
        let mut letters = true;
        for (idx, c) in line[start..].char_indices() {
            let idx = idx + start;
            if c.is_alphabetic() != letters {
                chunks.push(&line[chunk_start..idx]);
                chunk_start = idx;
                letters = !letters;
            }
        }
        chunks.push(&line[chunk_start..]);
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_letters_and_filler() {
        assert_eq!(
            LineTokenizer::break_line("Obama met John. John"),
            vec!["Obama", " ", "met", " ", "John", ". ", "John"]
        );
    }

    #[test]
    fn drops_leading_filler() {
        assert_eq!(LineTokenizer::break_line("\"Arya,\" he said"), vec!["Arya", ",\" ", "he", " ", "said"]);
    }

    #[test]
    fn keeps_trailing_filler() {
        assert_eq!(LineTokenizer::break_line("Bran!!"), vec!["Bran", "!!"]);
    }

    #[test]
    fn no_letters_means_no_chunks() {
        assert!(LineTokenizer::break_line("").is_empty());
        assert!(LineTokenizer::break_line("... 42 --").is_empty());
    }

    #[test]
    fn non_ascii_letters_stay_together() {
        assert_eq!(LineTokenizer::break_line("Daenerys Targaryen—Khaleesi"), vec!["Daenerys", " ", "Targaryen", "—", "Khaleesi"]);
    }
}
