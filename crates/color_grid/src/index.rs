// index.rs — color -> price-ordered cell coordinates, derived once from the cells
use crate::error::GridError;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Zero-based cell position inside the grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn manhattan(&self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Prices of one color in ascending order, one coordinate per price.
#[derive(Debug, Clone, Default)]
pub struct PriceLevels {
    levels: BTreeMap<i32, Coord>,
}

impl PriceLevels {
    /// Later inserts for the same price replace earlier ones.
    fn insert(&mut self, price: i32, coord: Coord) {
        self.levels.insert(price, coord);
    }

    pub fn exact(&self, price: i32) -> Option<Coord> {
        self.levels.get(&price).copied()
    }

    pub fn lowest(&self) -> Option<(i32, Coord)> {
        self.levels.first_key_value().map(|(p, c)| (*p, *c))
    }

    /// First entry with price >= `price`
    pub fn lower_bound(&self, price: i32) -> Option<(i32, Coord)> {
        self.levels.range(price..).next().map(|(p, c)| (*p, *c))
    }

    /// First entry with price > `price`
    pub fn upper_bound(&self, price: i32) -> Option<(i32, Coord)> {
        self.levels
            .range((Bound::Excluded(price), Bound::Unbounded))
            .next()
            .map(|(p, c)| (*p, *c))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, Coord)> + '_ {
        self.levels.iter().map(|(p, c)| (*p, *c))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ColorIndex {
    by_color: AHashMap<String, PriceLevels>,
}

impl ColorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, color: &str, price: i32, coord: Coord) {
        match self.by_color.get_mut(color) {
            Some(levels) => levels.insert(price, coord),
            None => {
                let mut levels = PriceLevels::default();
                levels.insert(price, coord);
                self.by_color.insert(color.to_owned(), levels);
            }
        }
    }

    pub fn contains(&self, color: &str) -> bool {
        self.by_color.contains_key(color)
    }

    pub fn prices(&self, color: &str) -> Result<&PriceLevels, GridError> {
        self.by_color
            .get(color)
            .ok_or_else(|| GridError::ColorNotFound(color.to_owned()))
    }

    /// Distinct colors, in no particular order
    pub fn colors(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_color.keys().map(String::as_str)
    }

    pub fn color_count(&self) -> usize {
        self.by_color.len()
    }

    /// Total (color, price) keys across all colors
    pub fn entry_count(&self) -> usize {
        self.by_color.values().map(PriceLevels::len).sum()
    }
}
