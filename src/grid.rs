use std::ops::Index;
use tinyvec::ArrayVec;

/// The dimension of the board: N x N cells
pub const N: usize = 4;

/// Number of cells on the board
pub const NCELLS: usize = N * N;

/// Neighbours of a single cell, at most 8.
pub type Neighbors = ArrayVec<[u8; 8]>;

/// King-move adjacency of the 16 cells on a 4x4 board.
///
/// Cells are numbered row-major: cell `row * 4 + col`.
/// A corner cell has 3 neighbours, an edge cell 5 and an interior cell 8.
/// Neighbours are listed row by row, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency([Neighbors; NCELLS]);

impl Default for Adjacency {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Adjacency {
    type Output = [u8];
    fn index(&self, cell: usize) -> &Self::Output {
        &self.0[cell]
    }
}

impl Adjacency {
    /// Compute the adjacency for the 4x4 grid.
    /// ## Example
    /// ```
    /// # use wordhunt_solver::Adjacency;
    /// let adjacency = Adjacency::new();
    /// assert_eq!(adjacency.neighbors(0), &[1, 4, 5]);
    /// ```
    pub fn new() -> Adjacency {
        let mut neighbors = [Neighbors::new(); NCELLS];
        for r in 0..N as isize {
            for c in 0..N as isize {
                let cell = (r * N as isize + c) as usize;
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let (nr, nc) = (r + dr, c + dc);
                        if (0..N as isize).contains(&nr) && (0..N as isize).contains(&nc) {
                            neighbors[cell].push((nr * N as isize + nc) as u8);
                        }
                    }
                }
            }
        }
        Adjacency(neighbors)
    }

    /// The neighbours of `cell`.
    pub fn neighbors(&self, cell: usize) -> &[u8] {
        &self.0[cell]
    }

    /// Returns true if cells `a` and `b` touch (horizontally, vertically or diagonally).
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        a < NCELLS && b < NCELLS && self.0[a].contains(&(b as u8))
    }
}
