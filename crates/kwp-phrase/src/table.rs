//! Phrase frequency tables.

use std::collections::HashMap;

use serde::Serialize;

/// Mapping from phrase to occurrence count.
///
/// Phrases remember the order in which they were first counted. Ranking is
/// stable with respect to that order, so phrases with equal counts appear in
/// first-seen order across the whole merge sequence.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Position of each phrase in `entries`.
    index: HashMap<String, usize>,
    /// Phrases and counts in first-seen order.
    entries: Vec<(String, u64)>,
}

/// A phrase with its count, as presented to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPhrase {
    /// The phrase text.
    pub phrase: String,
    /// Number of occurrences.
    pub count: u64,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `phrase`.
    pub fn add(&mut self, phrase: impl Into<String>) {
        self.add_count(phrase, 1);
    }

    /// Adds `count` occurrences of `phrase`.
    pub fn add_count(&mut self, phrase: impl Into<String>, count: u64) {
        let phrase = phrase.into();
        if let Some(&pos) = self.index.get(&phrase) {
            self.entries[pos].1 += count;
        } else {
            self.index.insert(phrase.clone(), self.entries.len());
            self.entries.push((phrase, count));
        }
    }

    /// Returns the count for `phrase`, or 0 if it was never counted.
    pub fn get(&self, phrase: &str) -> u64 {
        self.index
            .get(phrase)
            .map_or(0, |&pos| self.entries[pos].1)
    }

    /// Returns the number of distinct phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no phrase has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates over phrases and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(phrase, count)| (phrase.as_str(), *count))
    }

    /// Adds every count from `other` into this table.
    ///
    /// Phrases new to this table are appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: Self) {
        for (phrase, count) in other.entries {
            self.add_count(phrase, count);
        }
    }

    /// Keeps only the phrases for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, u64) -> bool,
    {
        self.entries.retain(|(phrase, count)| keep(phrase, *count));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, (phrase, _))| (phrase.clone(), pos))
            .collect();
    }

    /// Returns phrases by descending count, ties in first-seen order.
    ///
    /// With `limit`, at most that many phrases are returned.
    pub fn ranked(&self, limit: Option<usize>) -> Vec<RankedPhrase> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(phrase, count)| RankedPhrase {
                phrase: phrase.clone(),
                count: *count,
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<S: Into<String>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for phrase in iter {
            self.add(phrase);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted_counts(table: &FrequencyTable) -> Vec<(String, u64)> {
        let mut counts: Vec<_> = table.iter().map(|(p, c)| (p.to_string(), c)).collect();
        counts.sort();
        counts
    }

    #[test]
    fn counts_each_occurrence() {
        let table: FrequencyTable = ["制御系", "Motor Drive", "制御系"].into_iter().collect();
        assert_eq!(table.get("制御系"), 2);
        assert_eq!(table.get("Motor Drive"), 1);
        assert_eq!(table.get("absent"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn merge_adds_counts() {
        let mut corpus: FrequencyTable = ["a", "b"].into_iter().collect();
        let doc: FrequencyTable = ["b", "c", "c"].into_iter().collect();
        corpus.merge(doc);

        assert_eq!(corpus.get("a"), 1);
        assert_eq!(corpus.get("b"), 2);
        assert_eq!(corpus.get("c"), 2);
        let order: Vec<&str> = corpus.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_is_commutative() {
        let d1: FrequencyTable = ["振動抑制", "Motor", "振動抑制"].into_iter().collect();
        let d2: FrequencyTable = ["Motor", "高効率化"].into_iter().collect();

        let mut forward = FrequencyTable::new();
        forward.merge(d1.clone());
        forward.merge(d2.clone());

        let mut backward = FrequencyTable::new();
        backward.merge(d2);
        backward.merge(d1);

        assert_eq!(sorted_counts(&forward), sorted_counts(&backward));
    }

    #[test]
    fn ranked_breaks_ties_by_first_seen() {
        let table: FrequencyTable = ["x", "y", "z", "y", "z", "w"].into_iter().collect();
        let ranked = table.ranked(None);
        let phrases: Vec<&str> = ranked.iter().map(|r| r.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["y", "z", "x", "w"]);
    }

    #[test]
    fn ranked_respects_limit() {
        let table: FrequencyTable = (0..20).map(|i| format!("p{i}")).collect();
        assert_eq!(table.ranked(Some(10)).len(), 10);
        assert_eq!(table.ranked(Some(0)).len(), 0);
        assert_eq!(FrequencyTable::new().ranked(Some(10)), Vec::new());
    }

    #[test]
    fn retain_rebuilds_lookup() {
        let mut table: FrequencyTable = ["a", "b", "c", "c"].into_iter().collect();
        table.retain(|phrase, _| phrase != "a");
        assert_eq!(table.get("a"), 0);
        assert_eq!(table.get("c"), 2);
        table.add("c");
        assert_eq!(table.get("c"), 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn ranked_phrase_serializes() {
        let ranked = RankedPhrase {
            phrase: "制御系".into(),
            count: 4,
        };
        let json = serde_json::to_string(&ranked).unwrap();
        assert_eq!(json, r#"{"phrase":"制御系","count":4}"#);
    }
}
