//! In-memory association table
//!
//! Stores `(subject, object)` pairs in their original order and indexes them by
//! both elements for constant-time lookups.

use super::{AssociationSource, Associations, PAIRS};
use crate::core::normalize;
use rustc_hash::FxHashMap;

/// An ordered list of association pairs indexed in both directions
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    pairs: Vec<(String, String)>,
    forward: FxHashMap<String, Vec<usize>>,
    backward: FxHashMap<String, Vec<usize>>,
}

impl PairTable {
    /// Build a table from pairs, normalizing every word
    ///
    /// Pairs with a blank side or identical sides are dropped.
    ///
    /// # Examples
    /// ```
    /// use olympiika::associations::{AssociationSource, PairTable};
    ///
    /// let table = PairTable::new([("море", "волна"), ("пляж", "море")]);
    /// let sea = table.lookup("море");
    /// assert_eq!(sea.forward, ["волна"]);
    /// assert_eq!(sea.backward, ["пляж"]);
    /// ```
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (subject, object) in pairs {
            table.push(subject.as_ref(), object.as_ref());
        }
        table
    }

    /// Table built from the pairs compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(PAIRS.iter().copied())
    }

    fn push(&mut self, subject: &str, object: &str) {
        let subject = normalize(subject);
        let object = normalize(object);
        if subject.is_empty() || object.is_empty() || subject == object {
            return;
        }

        let idx = self.pairs.len();
        self.forward.entry(subject.clone()).or_default().push(idx);
        self.backward.entry(object.clone()).or_default().push(idx);
        self.pairs.push((subject, object));
    }

    /// Number of stored pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of distinct words on either side of any pair
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        let mut words: Vec<&str> = self
            .forward
            .keys()
            .chain(self.backward.keys())
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words.dedup();
        words.len()
    }
}

impl AssociationSource for PairTable {
    fn lookup(&self, word: &str) -> Associations<'_> {
        let forward = self.forward.get(word).map_or_else(Vec::new, |indices| {
            indices.iter().map(|&i| self.pairs[i].1.as_str()).collect()
        });
        let backward = self.backward.get(word).map_or_else(Vec::new, |indices| {
            indices.iter().map(|&i| self.pairs[i].0.as_str()).collect()
        });

        Associations { forward, backward }
    }

    /// Start words are drawn from the subject column, one entry per pair
    fn domain_size(&self) -> usize {
        self.pairs.len()
    }

    fn domain_word(&self, index: usize) -> Option<&str> {
        self.pairs.get(index).map(|(subject, _)| subject.as_str())
    }
}
