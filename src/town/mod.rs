use std::fmt;

use rand::Rng;

use crate::errors::RouteError;


/// Location types a generated town is drawn from
pub const LOCATIONS: [&str; 7] = ["School", "Mall", "Hospital", "Station", "Park", "Library", "Office"];

/// Every route starts at the top-left corner
pub const ORIGIN: Cell = Cell { row: 0, col: 0 };


/// Grid coordinate, 0-indexed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 4-adjacent cells inside a size x size grid
    /// Order is up, down, left, right
    pub fn neighbors(&self, size: usize) -> impl Iterator<Item = Cell> + use<> {
        let Cell { row, col } = *self;
        let up = row.checked_sub(1).map(|r| Cell::new(r, col));
        let down = (row + 1 < size).then(|| Cell::new(row + 1, col));
        let left = col.checked_sub(1).map(|c| Cell::new(row, c));
        let right = (col + 1 < size).then(|| Cell::new(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }

    /// True if the cells share an edge
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of cells in a size x size grid
/// Zero and sizes whose square overflows are rejected
pub fn cell_count(size: usize) -> Result<usize, RouteError> {
    match size.checked_mul(size) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(RouteError::InvalidGridSize(size.to_string())),
    }
}


/// NxN town matrix of location labels, row-major
/// Never changes once built
#[derive(Clone, Debug, PartialEq)]
pub struct TownGrid {
    size: usize,
    labels: Vec<String>,
}

impl TownGrid {

    /// Fill a size x size grid with locations picked uniformly at random
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Result<Self, RouteError> {
        let count = cell_count(size)?;

        let labels = (0..count)
            .map(|_| LOCATIONS[rng.random_range(0..LOCATIONS.len())].to_string())
            .collect();

        Ok(Self { size, labels })
    }

    /// Build a grid from explicit rows, rows must form a non-empty square
    pub fn from_rows<S: Into<String>>(rows: Vec<Vec<S>>) -> Result<Self, RouteError> {
        let size = rows.len();
        if size == 0 {
            return Err(RouteError::MalformedGrid("grid has no rows".to_string()));
        }

        let mut labels = Vec::with_capacity(cell_count(size)?);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RouteError::MalformedGrid(format!(
                    "row {i} has {} cells, expected {size}",
                    row.len()
                )));
            }
            labels.extend(row.into_iter().map(Into::into));
        }

        Ok(Self { size, labels })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Label at a cell, None if out of bounds
    pub fn label(&self, cell: Cell) -> Option<&str> {
        if !self.contains(cell) {
            return None;
        }
        self.labels.get(cell.row * self.size + cell.col).map(String::as_str)
    }

    /// All cells in row-major order with their labels
    pub fn cells(&self) -> impl Iterator<Item = (Cell, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (Cell::new(i / self.size, i % self.size), label.as_str()))
    }

    /// First cell in row-major order carrying the label
    pub fn find(&self, label: &str) -> Option<Cell> {
        self.cells().find(|(_, l)| *l == label).map(|(cell, _)| cell)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.labels.chunks(self.size)
    }
}

impl fmt::Display for TownGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.labels.iter().map(String::len).max().unwrap_or(0);
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|l| format!("{l:<width$}")).collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
