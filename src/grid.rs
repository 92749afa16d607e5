//! Square-grid coordinates and a generic cell container.
//!
//! `Coord` is the common key shared by terrain, belief, and containment
//! grids. `Grid` is a flat row-major store sized N×N; belief updates use
//! its elementwise transform rather than nested index loops so the dense
//! renormalization stays a single pass.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A 0-indexed (row, column) position on an N×N grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (taxicab) distance to another coordinate.
    pub fn manhattan_distance(self, other: Coord) -> u64 {
        let dr = self.row.abs_diff(other.row) as u64;
        let dc = self.col.abs_diff(other.col) as u64;
        dr + dc
    }
}

/// A square N×N grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f` at every coordinate.
    pub fn from_fn(size: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(Coord::new(row, col)));
            }
        }
        Self { size, cells }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Iterate cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Iterate (coordinate, value) pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.cells.iter())
    }

    /// Apply `f` to every cell in place, passing each cell's coordinate.
    pub fn transform(&mut self, mut f: impl FnMut(Coord, &T) -> T) {
        let size = self.size;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let coord = Coord::new(index / size, index % size);
            *cell = f(coord, cell);
        }
    }

    fn offset(&self, coord: Coord) -> usize {
        debug_assert!(
            coord.row < self.size && coord.col < self.size,
            "coordinate ({}, {}) out of bounds for size {}",
            coord.row,
            coord.col,
            self.size
        );
        coord.row * self.size + coord.col
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.cells[self.offset(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let offset = self.offset(coord);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Coord::new(1, 4);
        let b = Coord::new(3, 0);
        assert_eq!(a.manhattan_distance(b), 6);
        assert_eq!(b.manhattan_distance(a), 6);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn from_fn_indexes_row_major() {
        let grid = Grid::from_fn(3, |c| c.row * 10 + c.col);
        assert_eq!(grid[Coord::new(0, 0)], 0);
        assert_eq!(grid[Coord::new(1, 2)], 12);
        assert_eq!(grid[Coord::new(2, 1)], 21);
    }

    #[test]
    fn transform_visits_every_cell_once() {
        let mut grid = Grid::filled(4, 1u32);
        grid.transform(|_, v| v + 1);
        assert!(grid.values().all(|&v| v == 2));
        assert_eq!(grid.values().count(), 16);
    }

    #[test]
    fn enumerate_pairs_coords_with_values() {
        let grid = Grid::from_fn(2, |c| c.row + c.col);
        let pairs: Vec<_> = grid.enumerate().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[3], (Coord::new(1, 1), &2));
    }
}
