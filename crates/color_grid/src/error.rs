//! Errors returned by grid construction and queries

use std::fmt;

/// Grid axis named in an out-of-range error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// How the rejected value addressed the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// 1-based coordinate from the top-left corner
    Index,

    /// Distance from the bottom-right corner
    Offset,
}

/// Why a cell array was refused at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGridReason {
    /// No rows at all
    NoRows,

    /// A row without cells
    EmptyRow { row: usize },

    /// A row whose length differs from row 0
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur while building or querying a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate or offset outside `min..=max` on one axis
    OutOfRange {
        axis: Axis,
        kind: IndexKind,
        value: usize,
        min: usize,
        max: usize,
    },

    /// Color never appears in the grid
    ColorNotFound(String),

    /// No object of this color has exactly this price
    PriceNotFound { color: String, price: i32 },

    /// Negative minimum price
    InvalidRange { min_price: i32 },

    /// Neither range bound resolved to an indexed price
    NotFoundInRange {
        color: String,
        min_price: i32,
        max_price: i32,
    },

    /// Cell array is empty or not rectangular
    InvalidGrid(InvalidGridReason),

    /// Nearest-color search ran past the largest radius without a match.
    /// Only reachable if the color index disagrees with the cells.
    SearchExhausted { color: String, max_radius: usize },
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Index => write!(f, "index"),
            IndexKind::Offset => write!(f, "offset"),
        }
    }
}

impl fmt::Display for InvalidGridReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGridReason::NoRows => write!(f, "grid has no rows"),
            InvalidGridReason::EmptyRow { row } => write!(f, "row {} has no cells", row),
            InvalidGridReason::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfRange {
                axis,
                kind,
                value,
                min,
                max,
            } => write!(
                f,
                "{} {} out of range: {} not in {}..={}",
                axis, kind, value, min, max
            ),
            GridError::ColorNotFound(color) => write!(f, "Color not found: {}", color),
            GridError::PriceNotFound { color, price } => {
                write!(f, "Price not found: no {} object priced {}", color, price)
            }
            GridError::InvalidRange { min_price } => {
                write!(f, "Invalid price range: minimum {} is negative", min_price)
            }
            GridError::NotFoundInRange {
                color,
                min_price,
                max_price,
            } => write!(
                f,
                "No {} object found in the price range {}..={}",
                color, min_price, max_price
            ),
            GridError::InvalidGrid(reason) => write!(f, "Invalid grid: {}", reason),
            GridError::SearchExhausted { color, max_radius } => write!(
                f,
                "Search for {} exhausted after radius {}",
                color, max_radius
            ),
        }
    }
}

impl std::error::Error for GridError {}
