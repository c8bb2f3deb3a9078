//! Color grid - a fixed 2D grid of priced, colored objects
//!
//! Cells are addressed either by 1-based (row, col) or by offsets from the
//! bottom-right corner. A per-color price index built at construction answers
//! exact price, lowest price and price range queries, and a diamond ring walk
//! finds the nearest cell of a color by Manhattan distance.

#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod index;
pub mod object;
pub mod search;

pub use error::{Axis, GridError, IndexKind, InvalidGridReason};
pub use grid::Grid;
pub use index::{ColorIndex, Coord};
pub use object::Object;
