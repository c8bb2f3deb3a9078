// object.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A colored, sized and priced item sitting in one grid cell.
///
/// Owns its color outright and is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Object {
    color: String,
    size: i32,
    price: i32,
}

impl Object {
    pub fn new(color: impl Into<String>, size: i32, price: i32) -> Self {
        Self {
            color: color.into(),
            size,
            price,
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn price(&self) -> i32 {
        self.price
    }
}

/// Short "color price" label used when printing grids and query results.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.price)
    }
}
