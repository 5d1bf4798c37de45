//! Association lookup command
//!
//! Shows the filtered candidate pool of a word and a random sample from it.

use crate::associations::AssociationSource;
use crate::core::normalize;
use crate::generator::Generator;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Result of looking up one word
#[derive(Debug)]
pub struct AssociationResult {
    pub word: String,
    /// Raw forward associations before filtering
    pub forward: usize,
    /// Raw backward associations before filtering
    pub backward: usize,
    /// Candidates eligible at the configured difficulty
    pub pool: Vec<String>,
    /// Random sample drawn from the pool
    pub sample: Vec<String>,
}

/// Look up a word and sample the configured number of associations
///
/// The sample size is the generator's [`GeneratorConfig::quantity`].
///
/// # Errors
///
/// Returns an error if the word has no associations at all or if the pool holds
/// fewer candidates than the configured quantity.
///
/// [`GeneratorConfig::quantity`]: crate::generator::GeneratorConfig::quantity
pub fn associate_word<A, R>(
    generator: &Generator<'_, A>,
    word: &str,
    rng: &mut R,
) -> Result<AssociationResult, String>
where
    A: AssociationSource,
    R: Rng + ?Sized,
{
    let word = normalize(word);
    let associations = generator.source().lookup(&word);
    if associations.forward.is_empty() && associations.backward.is_empty() {
        return Err(format!("No associations for '{word}'"));
    }

    let excluded = FxHashSet::default();
    let pool = generator
        .candidate_pool(&word, &excluded)
        .into_iter()
        .map(str::to_string)
        .collect();
    let sample = generator
        .associate(&word, generator.config().quantity, &excluded, rng)
        .map_err(|e| e.to_string())?;

    Ok(AssociationResult {
        forward: associations.forward.len(),
        backward: associations.backward.len(),
        word,
        pool,
        sample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::associations::PairTable;
    use crate::generator::{Difficulty, GeneratorConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn table() -> PairTable {
        PairTable::new([
            ("лес", "гриб"),
            ("лес", "дерево"),
            ("лес", "лесник"),
            ("волк", "лес"),
        ])
    }

    #[test]
    fn associate_known_word() {
        let table = table();
        let generator = Generator::new(&table, GeneratorConfig::new(Difficulty::Hard));
        let mut rng = StdRng::seed_from_u64(0);

        let result = associate_word(&generator, " Лес", &mut rng).unwrap();
        assert_eq!(result.word, "лес");
        assert_eq!(result.forward, 3);
        assert_eq!(result.backward, 1);
        // "лесник" shares the stem and is filtered out
        assert_eq!(result.pool, ["гриб", "дерево", "волк"]);
        assert_eq!(result.sample.len(), 2);
        assert!(result.sample.iter().all(|w| result.pool.contains(w)));
    }

    #[test]
    fn associate_unknown_word() {
        let table = table();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(0);

        assert!(associate_word(&generator, "море", &mut rng).is_err());
    }

    #[test]
    fn associate_too_many_requested() {
        let table = table();
        let config = GeneratorConfig::default().with_quantity(10);
        let generator = Generator::new(&table, config);
        let mut rng = StdRng::seed_from_u64(0);

        let err = associate_word(&generator, "лес", &mut rng).unwrap_err();
        assert!(err.contains("need 10"));
    }

    #[test]
    fn sample_size_follows_configured_quantity() {
        let table = table();
        let config = GeneratorConfig::new(Difficulty::Hard).with_quantity(3);
        let generator = Generator::new(&table, config);
        let mut rng = StdRng::seed_from_u64(5);

        let result = associate_word(&generator, "лес", &mut rng).unwrap();
        assert_eq!(result.sample.len(), 3);

        let config = GeneratorConfig::new(Difficulty::Hard).with_quantity(1);
        let generator = Generator::new(&table, config);
        let result = associate_word(&generator, "лес", &mut rng).unwrap();
        assert_eq!(result.sample.len(), 1);
    }
}
