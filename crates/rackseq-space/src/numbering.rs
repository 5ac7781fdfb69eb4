//! Sequence numbers per grid cell for each traversal direction.

use crate::structure::GridStructure;
use rackseq_core::TraversalDirection;

/// A `rows x cols` matrix of 1-based sequence numbers, stored row-major.
///
/// Regenerated on every call; the engine never caches one. Only the
/// serpentine and cross-aisle conventions produce unique numbers. The
/// sequential conventions deliberately repeat numbers across rows (or
/// columns) and rely on `{ROW}`/`{COL}` in the label pattern for
/// uniqueness.
///
/// # Examples
///
/// ```
/// use rackseq_core::TraversalDirection;
/// use rackseq_space::NumberingGrid;
///
/// let g = NumberingGrid::generate(2, 3, TraversalDirection::Serpentine);
/// assert_eq!(g.row(0), Some(&[1, 2, 3][..]));
/// assert_eq!(g.row(1), Some(&[6, 5, 4][..]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberingGrid {
    rows: u32,
    cols: u32,
    cells: Vec<u64>,
}

impl NumberingGrid {
    /// Build the numbering for a `rows x cols` grid under `direction`.
    ///
    /// A grid with either dimension zero is empty.
    pub fn generate(rows: u32, cols: u32, direction: TraversalDirection) -> Self {
        let (rows, cols) = if rows == 0 || cols == 0 {
            (0, 0)
        } else {
            (rows, cols)
        };
        let cells = match direction {
            TraversalDirection::Serpentine => serpentine(rows, cols),
            TraversalDirection::SequentialRows => {
                fill(rows, cols, |_, c| c as u64 + 1)
            }
            TraversalDirection::SequentialCols => {
                fill(rows, cols, |r, _| r as u64 + 1)
            }
            TraversalDirection::CrossAisle => cross_aisle(rows, cols),
        };
        Self { rows, cols, cells }
    }

    /// Build the numbering for a detected [`GridStructure`].
    pub fn for_structure(structure: GridStructure, direction: TraversalDirection) -> Self {
        Self::generate(structure.rows, structure.cols, direction)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// `true` for the 0x0 grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The number at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: u32, col: u32) -> Option<u64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    /// The number at `(row, col)`, falling back to the row-major position
    /// `row * cols + col + 1` when out of range. Never fails.
    pub fn number_at(&self, row: u32, col: u32) -> u64 {
        self.get(row, col)
            .unwrap_or(row as u64 * self.cols as u64 + col as u64 + 1)
    }

    /// One row of numbers, or `None` when out of range.
    pub fn row(&self, row: u32) -> Option<&[u64]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        self.cells.get(start..start + self.cols as usize)
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        (0..self.rows).filter_map(move |r| self.row(r))
    }

    /// All numbers, row-major.
    pub fn as_slice(&self) -> &[u64] {
        &self.cells
    }
}

fn fill(rows: u32, cols: u32, f: impl Fn(u32, u32) -> u64) -> Vec<u64> {
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .map(|(r, c)| f(r, c))
        .collect()
}

/// Row-major counter with every odd row reversed, so the count stays
/// continuous across row ends.
fn serpentine(rows: u32, cols: u32) -> Vec<u64> {
    let width = cols as u64;
    fill(rows, cols, |r, c| {
        let step = if r % 2 == 0 { c } else { cols - 1 - c };
        r as u64 * width + step as u64 + 1
    })
}

/// Rows taken in pairs. The first row of a pair gets odd numbers and the
/// second gets even numbers, both left to right; pair `k` starts at
/// `k * cols * 2 + 1`. A trailing unpaired row keeps the odd numbers.
fn cross_aisle(rows: u32, cols: u32) -> Vec<u64> {
    let width = cols as u64;
    (0..rows)
        .step_by(2)
        .fold(Vec::with_capacity(rows as usize * cols as usize), |mut acc, first| {
            let base = (first / 2) as u64 * width * 2;
            let sides = if first + 1 < rows { 2 } else { 1 };
            for side in 0..sides {
                acc.extend((0..width).map(|c| base + 2 * c + 1 + side));
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows_of(g: &NumberingGrid) -> Vec<Vec<u64>> {
        g.iter_rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn empty_grid() {
        for d in TraversalDirection::ALL {
            let g = NumberingGrid::generate(0, 0, d);
            assert!(g.is_empty());
            assert_eq!(g.rows(), 0);
            assert_eq!(g.get(0, 0), None);
        }
    }

    #[test]
    fn zero_columns_is_empty() {
        let g = NumberingGrid::generate(3, 0, TraversalDirection::CrossAisle);
        assert!(g.is_empty());
        assert_eq!(g.rows(), 0);
    }

    #[test]
    fn serpentine_three_by_three() {
        let g = NumberingGrid::generate(3, 3, TraversalDirection::Serpentine);
        assert_eq!(
            rows_of(&g),
            vec![vec![1, 2, 3], vec![6, 5, 4], vec![7, 8, 9]]
        );
    }

    #[test]
    fn sequential_rows_repeat_per_row() {
        let g = NumberingGrid::generate(2, 3, TraversalDirection::SequentialRows);
        assert_eq!(rows_of(&g), vec![vec![1, 2, 3], vec![1, 2, 3]]);
    }

    #[test]
    fn sequential_cols_is_the_transpose() {
        let g = NumberingGrid::generate(3, 2, TraversalDirection::SequentialCols);
        assert_eq!(rows_of(&g), vec![vec![1, 1], vec![2, 2], vec![3, 3]]);
    }

    #[test]
    fn cross_aisle_four_by_three() {
        let g = NumberingGrid::generate(4, 3, TraversalDirection::CrossAisle);
        assert_eq!(
            rows_of(&g),
            vec![
                vec![1, 3, 5],
                vec![2, 4, 6],
                vec![7, 9, 11],
                vec![8, 10, 12],
            ]
        );
    }

    #[test]
    fn cross_aisle_trailing_row_gets_odd_numbers() {
        let g = NumberingGrid::generate(3, 2, TraversalDirection::CrossAisle);
        assert_eq!(rows_of(&g), vec![vec![1, 3], vec![2, 4], vec![5, 7]]);
    }

    #[test]
    fn out_of_range_lookup_falls_back_to_row_major() {
        let g = NumberingGrid::generate(2, 3, TraversalDirection::SequentialRows);
        assert_eq!(g.get(5, 1), None);
        assert_eq!(g.number_at(5, 1), 5 * 3 + 1 + 1);
        assert_eq!(g.number_at(0, 7), 8);
        assert_eq!(g.number_at(1, 2), 3);
    }

    #[test]
    fn empty_grid_fallback_uses_zero_width() {
        let g = NumberingGrid::generate(0, 0, TraversalDirection::Serpentine);
        assert_eq!(g.number_at(2, 4), 5);
    }

    #[test]
    fn for_structure_matches_generate() {
        let s = GridStructure::new(4, 5);
        assert_eq!(
            NumberingGrid::for_structure(s, TraversalDirection::CrossAisle),
            NumberingGrid::generate(4, 5, TraversalDirection::CrossAisle)
        );
    }

    proptest! {
        #[test]
        fn serpentine_is_a_permutation(rows in 1u32..30, cols in 1u32..30) {
            let g = NumberingGrid::generate(rows, cols, TraversalDirection::Serpentine);
            let mut seen = g.as_slice().to_vec();
            seen.sort_unstable();
            let expected: Vec<u64> = (1..=(rows as u64 * cols as u64)).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn cross_aisle_even_rows_is_a_permutation(pairs in 1u32..15, cols in 1u32..30) {
            let rows = pairs * 2;
            let g = NumberingGrid::generate(rows, cols, TraversalDirection::CrossAisle);
            let mut seen = g.as_slice().to_vec();
            seen.sort_unstable();
            let expected: Vec<u64> = (1..=(rows as u64 * cols as u64)).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn serpentine_neighbours_differ_by_one(rows in 1u32..20, cols in 1u32..20) {
            let g = NumberingGrid::generate(rows, cols, TraversalDirection::Serpentine);
            for r in 0..rows {
                for c in 1..cols {
                    let a = g.number_at(r, c - 1);
                    let b = g.number_at(r, c);
                    prop_assert_eq!(a.abs_diff(b), 1);
                }
            }
        }
    }
}
