//! Tree-to-grid layout
//!
//! Each tree level becomes one column. A word is replicated over every row its
//! subtree spans, so a table renderer can merge those rows into a single cell.

use serde::{Deserialize, Serialize};

use super::tree::{AssociationTree, MAX_STEPS, TreeError, check_steps};

/// Which side of the grid the root sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Column 0 holds the root, the last column holds the leaves
    #[default]
    RootFirst,
    /// Column 0 holds the leaves, the last column holds the root
    LeavesFirst,
}

impl Orientation {
    /// Parse an orientation name
    ///
    /// Supported names: "root-first", "leaves-first" (also "pyramid").
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "root-first" | "root" => Some(Self::RootFirst),
            "leaves-first" | "leaves" | "pyramid" => Some(Self::LeavesFirst),
            _ => None,
        }
    }
}

/// A rectangular grid of cells, one column per tree level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    steps: u32,
    orientation: Orientation,
    cells: Vec<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
struct RawMatrix {
    steps: u32,
    orientation: Orientation,
    cells: Vec<Vec<String>>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = TreeError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let steps = check_steps(raw.steps)?;
        let rows = 1_usize << steps;
        let cols = steps as usize + 1;
        if raw.cells.len() != rows {
            return Err(TreeError::WrongLength {
                expected: rows,
                actual: raw.cells.len(),
            });
        }
        if let Some(row) = raw.cells.iter().find(|row| row.len() != cols) {
            return Err(TreeError::WrongLength {
                expected: cols,
                actual: row.len(),
            });
        }
        Ok(Self {
            steps,
            orientation: raw.orientation,
            cells: raw.cells,
        })
    }
}

impl From<Matrix> for RawMatrix {
    fn from(matrix: Matrix) -> Self {
        Self {
            steps: matrix.steps,
            orientation: matrix.orientation,
            cells: matrix.cells,
        }
    }
}

impl Matrix {
    /// A grid of blank cells shaped for a depth already checked by
    /// [`check_steps`]
    #[must_use]
    pub(crate) fn blank(steps: u32, orientation: Orientation) -> Self {
        debug_assert!(steps <= MAX_STEPS, "depth {steps} exceeds {MAX_STEPS}");
        let rows = 1_usize << steps;
        let cols = steps as usize + 1;
        Self {
            steps,
            orientation,
            cells: vec![vec![String::new(); cols]; rows],
        }
    }

    #[inline]
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of rows: 2^steps
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        1 << self.steps
    }

    /// Number of columns: steps + 1
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.steps as usize + 1
    }

    /// Tree level shown in a column
    #[must_use]
    pub const fn level_of_column(&self, col: usize) -> u32 {
        match self.orientation {
            Orientation::RootFirst => col as u32,
            Orientation::LeavesFirst => self.steps - col as u32,
        }
    }

    /// Rows covered by one word in a column
    ///
    /// Root-first: `R / 2^col`. Leaves-first: `2^col`.
    #[must_use]
    pub const fn span(&self, col: usize) -> usize {
        self.rows() >> self.level_of_column(col)
    }

    /// Whether `row` starts a merged block in `col`
    #[inline]
    #[must_use]
    pub const fn is_block_start(&self, row: usize, col: usize) -> bool {
        row % self.span(col) == 0
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.cells[row][col] = value.into();
    }

    /// All rows of the grid
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// One column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        self.cells.iter().map(move |row| row[col].as_str())
    }

    /// Every cell with its coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, cell)| (i, j, cell.as_str()))
        })
    }

    /// Whether any cell holds exactly `word`
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.iter().any(|(_, _, cell)| cell == word)
    }

    /// The first cell of each merged block in a column
    pub fn blocks(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        let span = self.span(col);
        self.cells
            .iter()
            .step_by(span)
            .map(move |row| row[col].as_str())
    }
}

/// Flatten a tree into its solution grid
///
/// Words are placed in level order; word `k` (1-based) fills `R / 2^floor(log2 k)`
/// consecutive rows of the column for its level, top to bottom. With
/// [`Orientation::LeavesFirst`] every row is then reversed.
///
/// # Examples
/// ```
/// use olympiika::core::{AssociationTree, Orientation, layout};
///
/// let tree = AssociationTree::from_words(1, vec!["море".into(), "волна".into(), "пляж".into()]).unwrap();
/// let grid = layout(&tree, Orientation::RootFirst);
///
/// assert_eq!(grid.get(0, 0), "море");
/// assert_eq!(grid.get(1, 0), "море");
/// assert_eq!(grid.get(0, 1), "волна");
/// assert_eq!(grid.get(1, 1), "пляж");
/// ```
#[must_use]
pub fn layout(tree: &AssociationTree, orientation: Orientation) -> Matrix {
    let steps = tree.steps();
    let mut grid = Matrix::blank(steps, Orientation::RootFirst);
    let rows = grid.rows();

    let mut row = 0;
    let mut col = 0;
    for (index, word) in tree.words().iter().enumerate() {
        let block = rows >> (index + 1).ilog2();
        for _ in 0..block {
            grid.set(row, col, word.as_str());
            row += 1;
        }
        if row >= rows {
            row = 0;
            col += 1;
        }
    }

    if orientation == Orientation::LeavesFirst {
        for cells in &mut grid.cells {
            cells.reverse();
        }
        grid.orientation = Orientation::LeavesFirst;
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(steps: u32) -> AssociationTree {
        let words = (0..super::super::tree::word_count(steps))
            .map(|i| format!("w{i:02}"))
            .collect();
        AssociationTree::from_words(steps, words).unwrap()
    }

    #[test]
    fn blank_shape() {
        let grid = Matrix::blank(3, Orientation::RootFirst);
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.cols(), 4);
        assert!(grid.iter().all(|(_, _, cell)| cell.is_empty()));
    }

    #[test]
    fn layout_steps_one() {
        let grid = layout(&tree(1), Orientation::RootFirst);
        assert_eq!(grid.cells(), &[vec!["w00", "w01"], vec!["w00", "w02"]]);
    }

    #[test]
    fn layout_steps_two() {
        let grid = layout(&tree(2), Orientation::RootFirst);
        let expected = [
            ["w00", "w01", "w03"],
            ["w00", "w01", "w04"],
            ["w00", "w02", "w05"],
            ["w00", "w02", "w06"],
        ];
        for (row, cells) in expected.iter().enumerate() {
            for (col, word) in cells.iter().enumerate() {
                assert_eq!(grid.get(row, col), *word);
            }
        }
    }

    #[test]
    fn column_zero_constant_and_runs_match_span() {
        for steps in 1..=5 {
            let grid = layout(&tree(steps), Orientation::RootFirst);
            assert!(grid.column(0).all(|cell| cell == "w00"));

            for col in 0..grid.cols() {
                let span = grid.span(col);
                assert_eq!(span, grid.rows() >> col);

                let cells: Vec<&str> = grid.column(col).collect();
                for (block_idx, block) in cells.chunks(span).enumerate() {
                    assert!(block.iter().all(|c| *c == block[0]), "run not constant");
                    if block_idx > 0 {
                        assert_ne!(cells[(block_idx - 1) * span], block[0]);
                    }
                }
            }
        }
    }

    #[test]
    fn leaves_first_reverses_rows() {
        let root_first = layout(&tree(2), Orientation::RootFirst);
        let leaves_first = layout(&tree(2), Orientation::LeavesFirst);

        assert_eq!(leaves_first.orientation(), Orientation::LeavesFirst);
        for row in 0..root_first.rows() {
            for col in 0..root_first.cols() {
                assert_eq!(
                    leaves_first.get(row, root_first.cols() - 1 - col),
                    root_first.get(row, col)
                );
            }
        }
        // Leaves-first spans grow as 2^col
        assert_eq!(leaves_first.span(0), 1);
        assert_eq!(leaves_first.span(1), 2);
        assert_eq!(leaves_first.span(2), 4);
    }

    #[test]
    fn level_column_mapping() {
        let grid = Matrix::blank(3, Orientation::LeavesFirst);
        assert_eq!(grid.level_of_column(0), 3);

        let grid = Matrix::blank(3, Orientation::RootFirst);
        assert_eq!(grid.level_of_column(2), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds")]
    fn blank_rejects_unchecked_depth() {
        let _ = Matrix::blank(64, Orientation::RootFirst);
    }

    #[test]
    fn blocks_yield_one_word_per_block() {
        let grid = layout(&tree(2), Orientation::RootFirst);
        assert_eq!(grid.blocks(0).collect::<Vec<_>>(), ["w00"]);
        assert_eq!(grid.blocks(1).collect::<Vec<_>>(), ["w01", "w02"]);
        assert_eq!(grid.blocks(2).collect::<Vec<_>>(), ["w03", "w04", "w05", "w06"]);
    }

    #[test]
    fn block_starts() {
        let grid = layout(&tree(2), Orientation::RootFirst);
        assert!(grid.is_block_start(0, 0));
        assert!(!grid.is_block_start(2, 0));
        assert!(grid.is_block_start(2, 1));
        assert!(grid.is_block_start(3, 2));
    }

    #[test]
    fn deserialize_rejects_ragged_grid() {
        let grid = layout(&tree(1), Orientation::RootFirst);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Matrix>(&json).unwrap(), grid);

        let ragged = r#"{"steps":1,"orientation":"RootFirst","cells":[["a","b"],["a"]]}"#;
        assert!(serde_json::from_str::<Matrix>(ragged).is_err());
    }

    #[test]
    fn orientation_names() {
        assert_eq!(Orientation::from_name("root-first"), Some(Orientation::RootFirst));
        assert_eq!(Orientation::from_name("pyramid"), Some(Orientation::LeavesFirst));
        assert_eq!(Orientation::from_name("sideways"), None);
    }
}
