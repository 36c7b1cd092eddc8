use indexmap::IndexMap;
use serde::Serialize;

/// Occurrence counts keyed by category, remembering first-seen order so
/// rankings break ties stably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

impl CategoryCounts {
    /// Counts the non-empty keys yielded by `keys`.
    pub fn tally<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts = IndexMap::new();
        for key in keys.into_iter().flatten().filter(|key| !key.is_empty()) {
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> Vec<CountEntry> {
        self.counts
            .iter()
            .map(|(key, &count)| CountEntry {
                key: key.clone(),
                count,
            })
            .collect()
    }

    /// The `limit` most frequent keys, highest count first. Equal counts keep
    /// first-seen order.
    pub fn top(&self, limit: usize) -> Vec<CountEntry> {
        let mut ranked = self.entries();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}
