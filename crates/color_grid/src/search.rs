//! Diamond ring enumeration for nearest-cell searches
//!
//! `diamond_ring(origin, d)` yields every position at Manhattan distance `d`
//! from `origin`, in a fixed order that decides ties between equidistant cells:
//!
//! 1. for i in 0..=d: (r-d+i, c-i) then (r+d-i, c+i)
//!    (the upper-left and lower-right edges, walked together)
//! 2. for i in 1..d: (r-i, c+d-i) then (r+i, c-d+i)
//!    (the upper-right and lower-left edges, corners excluded)
//!
//! Positions are signed and may fall outside the grid; callers filter them.

use crate::index::Coord;

pub type RingPos = (isize, isize);

pub fn diamond_ring(origin: Coord, radius: usize) -> impl Iterator<Item = RingPos> {
    let r = origin.row as isize;
    let c = origin.col as isize;
    let d = radius as isize;

    let diagonal = (0..=d).flat_map(move |i| [(r - d + i, c - i), (r + d - i, c + i)]);
    let anti_diagonal = (1..d).flat_map(move |i| [(r - i, c + d - i), (r + i, c - d + i)]);

    diagonal.chain(anti_diagonal)
}

/// Largest Manhattan distance between two cells of a `rows` x `cols` grid
#[inline]
pub fn max_radius(rows: usize, cols: usize) -> usize {
    rows.saturating_sub(1) + cols.saturating_sub(1)
}
