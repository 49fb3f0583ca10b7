use std::fmt;

use crate::town::Cell;

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    InvalidGridSize(String), // Grid size is not a positive integer
    InvalidWeight { label: String, value: String }, // Weight is not a finite number
    EmptyLabel, // Location name is blank
    MalformedGrid(String), // Rows are missing or not square
    Unreachable(Cell), // Target has no recorded cost
    NoPathFound, // Predecessor chain is broken
    Io(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidGridSize(input) => {
                write!(f, "invalid grid size {input:?}, expected a positive integer")
            }
            RouteError::InvalidWeight { label, value } => {
                write!(f, "invalid importance weight {value:?} for {label:?}")
            }
            RouteError::EmptyLabel => write!(f, "location name must not be empty"),
            RouteError::MalformedGrid(reason) => write!(f, "malformed grid: {reason}"),
            RouteError::Unreachable(cell) => write!(f, "target {cell} is unreachable from the origin"),
            RouteError::NoPathFound => write!(f, "no path found"),
            RouteError::Io(msg) => write!(f, "i/o error: {msg}"),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<std::io::Error> for RouteError {
    fn from(error: std::io::Error) -> Self {
        RouteError::Io(error.to_string())
    }
}
