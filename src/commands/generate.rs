//! Puzzle generation command
//!
//! Builds one tree and its solution grid.

use crate::associations::AssociationSource;
use crate::core::{AssociationTree, Matrix, Orientation, layout};
use crate::game::GameSession;
use crate::generator::{GenerationError, Generator, StartWord};
use crate::output::render_html;
use rand::Rng;
use std::time::Duration;

/// Configuration for generating a puzzle
pub struct GenerateConfig {
    pub steps: u32,
    pub start: StartWord,
    pub orientation: Orientation,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(steps: u32) -> Self {
        Self {
            steps,
            start: StartWord::Random,
            orientation: Orientation::RootFirst,
        }
    }
}

/// A generated puzzle with its statistics
#[derive(Debug)]
pub struct GenerateResult {
    pub tree: AssociationTree,
    pub solution: Matrix,
    pub attempts: usize,
    pub duration: Duration,
}

impl GenerateResult {
    /// A fresh game session on this puzzle
    #[must_use]
    pub fn session(&self) -> GameSession {
        GameSession::new(&self.tree, self.solution.orientation())
    }

    /// HTML table of the puzzle, either as a player first sees it or fully solved
    #[must_use]
    pub fn to_html(&self, show_solution: bool) -> String {
        if show_solution {
            render_html(&self.solution, None)
        } else {
            render_html(self.session().display(), None)
        }
    }
}

/// Generate a puzzle
///
/// # Errors
///
/// Returns a `GenerationError` if no complete tree could be built within the
/// generator's attempt limit.
pub fn generate_puzzle<A, R>(
    generator: &Generator<'_, A>,
    config: &GenerateConfig,
    rng: &mut R,
) -> Result<GenerateResult, GenerationError>
where
    A: AssociationSource,
    R: Rng + ?Sized,
{
    let generated = generator.generate(config.steps, &config.start, rng)?;
    let solution = layout(&generated.tree, config.orientation);

    Ok(GenerateResult {
        tree: generated.tree,
        solution,
        attempts: generated.attempts,
        duration: generated.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::associations::PairTable;
    use crate::generator::GeneratorConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_embedded_puzzle() {
        let table = PairTable::embedded();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        let result = generate_puzzle(&generator, &GenerateConfig::new(2), &mut rng).unwrap();
        assert_eq!(result.tree.words().len(), 7);
        assert_eq!(result.solution.rows(), 4);
        assert!(result.attempts >= 1);
    }

    #[test]
    fn generate_from_fixed_word() {
        let table = PairTable::embedded();
        let generator = Generator::new(&table, GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(8);

        let mut config = GenerateConfig::new(1);
        config.start = StartWord::Fixed("море".to_string());
        config.orientation = Orientation::LeavesFirst;

        let result = generate_puzzle(&generator, &config, &mut rng).unwrap();
        assert_eq!(result.tree.root(), "море");
        assert_eq!(result.solution.get(0, 1), "море");
    }

    #[test]
    fn html_hides_or_shows_solution() {
        let tree = AssociationTree::from_words(
            1,
            vec!["море".into(), "волна".into(), "пляж".into()],
        )
        .unwrap();
        let result = GenerateResult {
            solution: layout(&tree, Orientation::RootFirst),
            tree,
            attempts: 1,
            duration: Duration::ZERO,
        };

        let hidden = result.to_html(false);
        assert!(hidden.contains("море"));
        assert!(!hidden.contains("волна"));

        let shown = result.to_html(true);
        assert!(shown.contains("волна"));
        assert!(shown.contains("пляж"));
    }
}
