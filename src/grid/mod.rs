//! Bounded rectangular grid with a permanent inactive border.
//!
//! Interior cells are addressed `1..=rows` x `1..=columns`. The storage is
//! `(rows + 2) x (columns + 2)` so that the eight neighbors of any interior
//! cell always exist; border cells absorb the counts of edge cells and are
//! never read back as interior state.

mod cell;

pub use cell::Cell;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<S> {
    cells: Vec<Cell<S>>,
    rows: usize,
    columns: usize,
    population: usize,
    generation: u64,
}

impl<S: Copy + Default + Eq> Grid<S> {
    /// Allocates a grid with every cell in the base state.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = (rows > 0 && columns > 0)
            .then(|| rows.checked_add(2)?.checked_mul(columns.checked_add(2)?))
            .flatten()
            .ok_or(Error::InvalidDimension { rows, columns })?;
        Ok(Self {
            cells: vec![Cell::default(); len],
            rows,
            columns,
            population: 0,
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of interior cells in the active state.
    pub fn population(&self) -> usize {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.columns).contains(&column)
    }

    #[inline]
    fn stride(&self) -> usize {
        self.columns + 2
    }

    #[inline]
    pub(crate) fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.stride() + column
    }

    pub(crate) fn checked_index(&self, row: usize, column: usize) -> Result<usize> {
        if self.contains(row, column) {
            Ok(self.index_of(row, column))
        } else {
            Err(Error::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell<S>> {
        let idx = self.checked_index(row, column)?;
        Ok(&self.cells[idx])
    }

    pub fn state(&self, row: usize, column: usize) -> Result<S> {
        self.cell(row, column).map(Cell::state)
    }

    /// Interior cells in row-major order as `(row, column, cell)`.
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize, &Cell<S>)> + '_ {
        (1..=self.rows).flat_map(move |row| {
            (1..=self.columns)
                .map(move |column| (row, column, &self.cells[self.index_of(row, column)]))
        })
    }

    /// Adds `delta` to the neighbor count of the eight cells around an
    /// interior cell.
    pub fn update_neighbors(&mut self, row: usize, column: usize, delta: i8) -> Result<()> {
        let idx = self.checked_index(row, column)?;
        self.shift_neighbors(idx, delta);
        Ok(())
    }

    #[inline]
    pub(crate) fn shift_neighbors(&mut self, idx: usize, delta: i8) {
        let s = self.stride();
        for n in [
            idx - s - 1,
            idx - s,
            idx - s + 1,
            idx - 1,
            idx + 1,
            idx + s - 1,
            idx + s,
            idx + s + 1,
        ] {
            self.cells[n].shift_count(delta);
        }
    }

    pub fn reset_all_neighbor_counts(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.neighbor_count = 0;
        }
    }

    /// Rebuilds every neighbor count from the interior states. O(rows x columns).
    pub fn recount_all_neighbors(&mut self, is_active: impl Fn(&Cell<S>) -> bool) {
        self.reset_all_neighbor_counts();
        for row in 1..=self.rows {
            for column in 1..=self.columns {
                let idx = self.index_of(row, column);
                if is_active(&self.cells[idx]) {
                    self.shift_neighbors(idx, 1);
                }
            }
        }
    }

    /// Full reset: base state everywhere, zero counts, population and generation.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.population = 0;
        self.generation = 0;
    }

    /// Writes `state` at an already validated index and returns the old state.
    #[inline]
    pub(crate) fn replace_state(&mut self, idx: usize, state: S) -> S {
        std::mem::replace(&mut self.cells[idx].state, state)
    }

    #[inline]
    pub(crate) fn cell_at(&self, idx: usize) -> &Cell<S> {
        &self.cells[idx]
    }

    pub(crate) fn gain_population(&mut self) {
        self.population += 1;
    }

    pub(crate) fn lose_population(&mut self) {
        self.population -= 1;
    }

    pub(crate) fn advance_generation(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_count(grid: &Grid<bool>, row: usize, column: usize) -> u8 {
        let mut count = 0;
        for r in row - 1..=row + 1 {
            for c in column - 1..=column + 1 {
                if (r, c) != (row, column) && grid.contains(r, c) && grid.state(r, c).unwrap() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            Grid::<bool>::new(0, 5),
            Err(Error::InvalidDimension { rows: 0, columns: 5 })
        );
        assert!(Grid::<bool>::new(3, 0).is_err());
        assert_eq!(
            Grid::<bool>::new(usize::MAX, 3),
            Err(Error::InvalidDimension {
                rows: usize::MAX,
                columns: 3
            })
        );
        assert!(Grid::<bool>::new(usize::MAX / 4, usize::MAX / 4).is_err());

        let grid = Grid::<bool>::new(3, 4).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (3, 4));
        assert_eq!(grid.cells.len(), 5 * 6);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.interior().count(), 12);
    }

    #[test]
    fn test_border_is_not_addressable() {
        let mut grid = Grid::<bool>::new(3, 3).unwrap();
        for (row, column) in [(0, 1), (1, 0), (4, 1), (1, 4), (0, 0)] {
            assert!(matches!(
                grid.update_neighbors(row, column, 1),
                Err(Error::OutOfBounds { .. })
            ));
            assert!(grid.cell(row, column).is_err());
        }
        assert!(grid.cells.iter().all(|c| c.neighbor_count == 0));
    }

    #[test]
    fn test_update_neighbors_corner() {
        let mut grid = Grid::<bool>::new(2, 2).unwrap();
        grid.update_neighbors(1, 1, 1).unwrap();
        assert_eq!(grid.cell(1, 1).unwrap().neighbor_count(), 0);
        assert_eq!(grid.cell(1, 2).unwrap().neighbor_count(), 1);
        assert_eq!(grid.cell(2, 1).unwrap().neighbor_count(), 1);
        assert_eq!(grid.cell(2, 2).unwrap().neighbor_count(), 1);
        // 5 of the 8 increments land on the border
        let total: u32 = grid.cells.iter().map(|c| c.neighbor_count as u32).sum();
        assert_eq!(total, 8);

        grid.update_neighbors(1, 1, -1).unwrap();
        assert!(grid.cells.iter().all(|c| c.neighbor_count == 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "neighbor count")]
    fn test_negative_neighbor_count_is_caught() {
        let mut grid = Grid::<bool>::new(3, 3).unwrap();
        let _ = grid.update_neighbors(2, 2, -1);
    }

    #[test]
    fn test_recount_matches_naive() {
        let mut grid = Grid::<bool>::new(6, 7).unwrap();
        for (row, column) in [(1, 1), (1, 2), (2, 2), (3, 5), (6, 7), (5, 6), (4, 4)] {
            let idx = grid.index_of(row, column);
            grid.replace_state(idx, true);
        }
        grid.recount_all_neighbors(|cell| cell.state());
        for (row, column, cell) in grid.interior() {
            assert_eq!(cell.neighbor_count(), naive_count(&grid, row, column), "({row}, {column})");
        }
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut grid = Grid::<bool>::new(4, 4).unwrap();
        let idx = grid.index_of(2, 2);
        grid.replace_state(idx, true);
        grid.gain_population();
        grid.advance_generation();
        grid.recount_all_neighbors(|cell| cell.state());

        grid.clear();
        assert_eq!(grid, Grid::new(4, 4).unwrap());
    }
}
