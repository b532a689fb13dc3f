//! Rectangular character grids

use anyhow::{Result, bail};

/// Offsets of the eight surrounding cells
pub const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major byte grid.
///
/// Every row must have the same width; [`Grid::parse`] rejects ragged input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse non-empty lines of equal width
    pub fn parse(input: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    bail!("(line {}) expected width {w}, got {}", idx + 1, line.len())
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let Some(width) = width else {
            bail!("grid is empty");
        };
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(row, col)`, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = value;
        }
    }

    /// Flattened index of `(row, col)`
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// In-bounds positions among the eight neighbors of `(row, col)`
    pub fn neighbors8(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBORS_8.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.height && c < self.width).then_some((r, c))
        })
    }

    /// Positions of every cell equal to `value`, row by row
    pub fn positions(&self, value: u8) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == value)
            .map(|(i, _)| (i / self.width, i % self.width))
    }

    /// Row `row` as a byte slice
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }
}
