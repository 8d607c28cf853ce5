//! Point
use num_bigint::BigUint;
use std::fmt::Debug;

/// Point
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: BigUint, y: BigUint) -> Point {
        Point { x, y }
    }

    /// The abscissa.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The ordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Consumes the point and returns the (x, y) coordinates in it.
    pub fn into_coordinates(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point").field("x", &self.x).field("y", &self.y).finish()
    }
}

impl From<(BigUint, BigUint)> for Point {
    fn from((x, y): (BigUint, BigUint)) -> Self {
        Point::new(x, y)
    }
}

impl From<(u64, u64)> for Point {
    fn from((x, y): (u64, u64)) -> Self {
        Point::new(BigUint::from(x), BigUint::from(y))
    }
}
