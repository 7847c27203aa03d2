// src/core/types.rs
use indexmap::IndexSet;

/// A maximal run of letters or non-letters, borrowed from the source line.
pub type Chunk<'a> = &'a str;

/// Occurrence count of a phrase. Signed because manual adjustments may subtract.
pub type Count = i64;

/// An insertion-ordered set of words or phrases. Used for every derived set
/// so repeated runs over the same counter list results in the same order.
pub type WordSet = IndexSet<String>;

/// True when the first character is an uppercase letter.
pub fn is_capitalized(s: &str) -> bool {
    s.chars().next().map_or(false, char::is_uppercase)
}

/// Splits on single spaces. Trailing empty pieces are dropped, but a string
/// without any space always yields itself as the only piece.
pub fn split_words(s: &str) -> Vec<&str> {
    if !s.contains(' ') {
        return vec![s];
    }
    let mut words: Vec<&str> = s.split(' ').collect();
    while words.last().map_or(false, |w| w.is_empty()) {
        words.pop();
    }
    words
}

/// Number of space characters in `s`.
pub fn count_spaces(s: &str) -> usize {
    s.matches(' ').count()
}

/// Text before the first `separator`, or all of `s` when it is absent.
pub fn substring_before<'a>(s: &'a str, separator: &str) -> &'a str {
    match s.find(separator) {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// Text after the first `separator`, or the empty string when it is absent.
pub fn substring_after<'a>(s: &'a str, separator: &str) -> &'a str {
    match s.find(separator) {
        Some(idx) => &s[idx + separator.len()..],
        None => "",
    }
}

/// Renders a collection the way a list prints: `[a, b, c]`.
pub fn render_collection<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    format!("[{}]", joined.join(", "))
}
