// File: src/core/formatter.rs
use crate::core::types::{substring_before, Count, WordSet};
use crate::core::vocabulary::Vocabulary;
use crate::groups::CharacterGroups;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// One comma-joined line per requested alias: the alias, then the rest of
/// its group. Lines go by descending group count; ties keep request order.
pub fn name_list<I, S>(groups: &CharacterGroups, names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows: IndexMap<Vec<String>, Count> = IndexMap::new();
    for name in names {
        let name = name.as_ref();
        if !groups.is_alias(name) {
            warn!(name, "not a recognized alias");
            continue;
        }
        let mut row = vec![name.to_string()];
        row.extend(groups.group_members_of(name));
        rows.insert(row, groups.alias_count(name));
    }
    render(rows)
}

/// Like [`name_list`], but each line holds only leading words: the
/// title-stripped first word of the alias, then the distinct non-general
/// first words of the other group members.
pub fn first_name_list<I, S>(groups: &CharacterGroups, vocabulary: &Vocabulary, names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let first_word = |alias: &str| substring_before(vocabulary.strip_title(alias), " ").to_string();

    let mut rows: IndexMap<Vec<String>, Count> = IndexMap::new();
    for name in names {
        let name = name.as_ref();
        if !groups.is_alias(name) {
            warn!(name, "not a recognized alias");
            continue;
        }
        let head = first_word(name);
        let mut members = WordSet::new();
        for member in groups.group_members_of(name) {
            let first = first_word(&member);
            if !vocabulary.is_general(&first) && first != head {
                members.insert(first);
            }
        }
        let mut row = vec![head];
        row.extend(members);
        rows.insert(row, groups.alias_count(name));
    }
    render(rows)
}

fn render(rows: IndexMap<Vec<String>, Count>) -> Vec<String> {
    let mut rows: Vec<(Vec<String>, Count)> = rows.into_iter().collect();
    rows.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    for (row, count) in &rows {
        debug!(count, group = ?row, "group");
    }
    info!(groups = rows.len(), "name list assembled");
    rows.into_iter().map(|(row, _)| row.join(",")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::PhraseCounter;
    use std::collections::HashSet;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn groups() -> CharacterGroups {
        let counter: PhraseCounter = [
            ("Bran", 2),
            ("Jon", 3),
            ("Lord Snow", 2),
            ("Jon Snow", 4),
            ("Hodor", 4),
        ]
        .iter()
        .map(|&(p, c)| (p.to_string(), c))
        .collect();
        CharacterGroups::new(&counter, &set(&["Lord"]))
    }

    #[test]
    fn full_list_sorted_by_group_count() {
        let g = groups();
        let lines = name_list(&g, g.primary_aliases());
        assert_eq!(lines, vec!["Jon Snow,Jon,Lord Snow", "Hodor", "Bran"]);
    }

    #[test]
    fn requested_alias_leads_its_line() {
        let g = groups();
        let lines = name_list(&g, ["Lord Snow", "Ghost", "Bran"]);
        assert_eq!(lines, vec!["Lord Snow,Jon,Jon Snow", "Bran"]);
    }

    #[test]
    fn equal_counts_keep_request_order() {
        let g = groups();
        assert_eq!(name_list(&g, ["Bran", "Hodor"]), vec!["Hodor", "Bran"]);
        let tied: PhraseCounter = [("Tyrion", 1), ("Cersei", 1)].iter().map(|&(p, c)| (p.to_string(), c)).collect();
        let g = CharacterGroups::new(&tied, &set(&[]));
        assert_eq!(name_list(&g, ["Cersei", "Tyrion"]), vec!["Cersei", "Tyrion"]);
    }

    #[test]
    fn first_names_only() {
        let g = groups();
        let vocabulary = Vocabulary::new(set(&[]), set(&["Lord"]), set(&[]), ".");
        let lines = first_name_list(&g, &vocabulary, ["Lord Snow", "Hodor"]);
        assert_eq!(lines, vec!["Snow,Jon", "Hodor"]);
    }

    #[test]
    fn general_member_first_words_are_left_out() {
        let counter: PhraseCounter = [("Ned Stark", 3), ("House Stark", 1)]
            .iter()
            .map(|&(p, c)| (p.to_string(), c))
            .collect();
        let g = CharacterGroups::new(&counter, &set(&["House"]));
        assert_eq!(g.group_members_of("Ned Stark"), vec!["House Stark"]);

        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&["House"]), ".");
        assert_eq!(first_name_list(&g, &vocabulary, ["Ned Stark"]), vec!["Ned"]);
    }

    #[test]
    fn member_first_word_equal_to_head_is_not_repeated() {
        let counter: PhraseCounter = [("Jon", 2), ("Jon Snow", 1)].iter().map(|&(p, c)| (p.to_string(), c)).collect();
        let g = CharacterGroups::new(&counter, &set(&[]));
        assert_eq!(g.group_members_of("Jon"), vec!["Jon Snow"]);

        let vocabulary = Vocabulary::new(set(&[]), set(&[]), set(&[]), ".");
        assert_eq!(first_name_list(&g, &vocabulary, ["Jon"]), vec!["Jon"]);
    }
}
