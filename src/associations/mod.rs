//! Word association sources
//!
//! The generator only needs a lookup contract: for a word, the words it points to
//! (forward) and the words pointing at it (backward), in a stable order.

mod embedded;
pub mod loader;
mod table;

pub use embedded::{PAIRS, PAIRS_COUNT};
pub use table::PairTable;

/// Associations of one word in both directions of the relation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Associations<'a> {
    /// Words where the query is the first element of a stored pair
    pub forward: Vec<&'a str>,
    /// Words where the query is the second element of a stored pair
    pub backward: Vec<&'a str>,
}

/// A queryable word association table
///
/// Implementations must return lists in a stable order: the generator treats the
/// head of each list as the "easy" subset.
pub trait AssociationSource {
    /// Look up a word in both directions
    fn lookup(&self, word: &str) -> Associations<'_>;

    /// Number of entries a random start word is drawn from
    fn domain_size(&self) -> usize;

    /// Entry `index` of the start-word domain
    fn domain_word(&self, index: usize) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_count_matches_const() {
        assert_eq!(PAIRS.len(), PAIRS_COUNT);
    }

    #[test]
    fn embedded_pairs_are_normalized() {
        for &(subject, object) in PAIRS {
            assert_eq!(subject, crate::core::normalize(subject), "'{subject}' not normalized");
            assert_eq!(object, crate::core::normalize(object), "'{object}' not normalized");
            assert_ne!(subject, object);
        }
    }

    #[test]
    fn embedded_table_is_usable() {
        let table = PairTable::embedded();
        assert!(table.domain_size() > 100);

        let sea = table.lookup("море");
        assert!(sea.forward.contains(&"волна"));
        assert!(sea.backward.contains(&"вода"));
    }
}
