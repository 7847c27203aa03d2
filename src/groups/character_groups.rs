// File: src/groups/character_groups.rs
use crate::core::counter::PhraseCounter;
use crate::core::types::{is_capitalized, split_words, Count};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Clusters alias strings into character identities with a disjoint-set
/// forest (union by rank, path compression). Alias ids follow the counter's
/// discovery order, so every listing below is reproducible.
#[derive(Debug, Clone)]
pub struct CharacterGroups {
    /// alias -> its own mention count; the index is the alias id
    aliases: IndexMap<String, Count>,
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl CharacterGroups {
    /// Builds groups from a counter snapshot.
    ///
    /// An alias joins every alias whose descriptive words contain its own,
    /// as long as those longer aliases agree with each other (their word
    /// sets form a chain). "Arya" joins "Arya Stark", but "Stark" stays
    /// alone when both "Arya Stark" and "Sansa Stark" exist.
    pub fn new(counter: &PhraseCounter, nondescriptors: &HashSet<String>) -> Self {
        let aliases: IndexMap<String, Count> = counter.iter().map(|(k, v)| (k.to_string(), v)).collect();
        let n = aliases.len();
        let mut groups = Self {
            aliases,
            parent: (0..n).collect(),
            rank: vec![0; n],
        };

        let descriptors: Vec<HashSet<&str>> = groups
            .aliases
            .keys()
            .map(|alias| {
                split_words(alias)
                    .into_iter()
                    .filter(|w| is_capitalized(w) && !nondescriptors.contains(*w))
                    .collect()
            })
            .collect();

        let mut links = Vec::new();
        for (id, own) in descriptors.iter().enumerate() {
            if own.is_empty() {
                continue;
            }
            let mut supersets: Vec<usize> = (0..n)
                .filter(|&other| other != id && descriptors[other].is_superset(own))
                .collect();
            if supersets.is_empty() {
                continue;
            }
            supersets.sort_by_key(|&other| descriptors[other].len());
            let chained = supersets
                .windows(2)
                .all(|pair| descriptors[pair[0]].is_subset(&descriptors[pair[1]]));
            if chained {
                links.extend(supersets.into_iter().map(|other| (id, other)));
            }
        }
        for (a, b) in links {
            groups.union(a, b);
        }
        debug!(aliases = n, groups = groups.primary_aliases().len(), "built character groups");
        groups
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.aliases.get_index_of(name)
    }

    fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    fn find_compress(&mut self, x: usize) -> usize {
        let root = self.find(x);
        let mut idx = x;
        while self.parent[idx] != root {
            let next = self.parent[idx];
            self.parent[idx] = root;
            idx = next;
        }
        root
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find_compress(x);
        let ry = self.find_compress(y);
        if rx == ry {
            return;
        }
        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
    }

    /// Merges the groups holding `a` and `b`. Unknown names are logged and ignored.
    pub fn combine(&mut self, a: &str, b: &str) {
        match (self.id(a), self.id(b)) {
            (Some(x), Some(y)) => self.union(x, y),
            _ => warn!(a, b, "cannot combine groups: unknown alias"),
        }
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Every other alias in `name`'s group, in discovery order.
    pub fn group_members_of(&self, name: &str) -> Vec<String> {
        let Some(id) = self.id(name) else {
            return Vec::new();
        };
        let root = self.find(id);
        self.aliases
            .keys()
            .enumerate()
            .filter(|&(other, _)| other != id && self.find(other) == root)
            .map(|(_, alias)| alias.clone())
            .collect()
    }

    /// Total mentions of every alias in `name`'s group; zero for unknown names.
    pub fn alias_count(&self, name: &str) -> Count {
        let Some(id) = self.id(name) else {
            return 0;
        };
        let root = self.find(id);
        self.aliases
            .values()
            .enumerate()
            .filter(|&(other, _)| self.find(other) == root)
            .fold(0, |total: Count, (_, &count)| total.saturating_add(count))
    }

    /// One representative per group: its most mentioned alias, ties going
    /// to the earliest discovered. Groups are ordered by their first alias.
    pub fn primary_aliases(&self) -> Vec<String> {
        let mut best: IndexMap<usize, usize> = IndexMap::new();
        for (id, &count) in self.aliases.values().enumerate() {
            let root = self.find(id);
            let current = best.entry(root).or_insert(id);
            if count > self.aliases[*current] {
                *current = id;
            }
        }
        best.values()
            .map(|&id| self.aliases.get_index(id).map(|(alias, _)| alias.clone()).unwrap_or_default())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
