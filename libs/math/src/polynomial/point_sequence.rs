//! Point Sequence.

use crate::{
    errors::{InterpolationError, NotAFieldElement},
    fields::PrimeField,
    polynomial::point::Point,
};
use num_bigint::BigUint;
use std::collections::HashSet;

/// Point sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Get the points in the sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the point sequence and return the points in it.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Check if points is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of points in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if there are any duplicated abscissas.
    pub fn has_duplicates(&self) -> bool {
        let mut x_set = HashSet::new();
        self.points.iter().any(|p| !x_set.insert(&p.x))
    }

    /// Add a point to the point sequence.
    pub fn push(&mut self, point: Point) {
        self.points.push(point)
    }

    /// Get the unzipped vectors for X and Y coordinates.
    pub fn unzip(&self) -> (Vec<&BigUint>, Vec<&BigUint>) {
        self.points.iter().map(|point| (&point.x, &point.y)).unzip()
    }

    /// Get initial part of Point Sequence till count, or the whole sequence if it is shorter.
    pub fn take(&self, count: usize) -> PointSequence {
        self.points.iter().take(count).cloned().collect()
    }

    /// Lagrange interpolation for Point Sequence at Zero.
    ///
    /// Computes `sum_i y_i * prod_{j != i} (0 - x_j) / (x_i - x_j)`. Every coordinate must be a field element and
    /// abscissas must be pairwise distinct. The number of points is not checked against any threshold: with fewer
    /// points than the polynomial that produced them requires, the result is simply some other field element.
    pub fn lagrange_interpolate(&self, field: &PrimeField) -> Result<BigUint, InterpolationError> {
        if self.points.is_empty() {
            return Err(InterpolationError::EmptySequence);
        }
        if self.points.iter().any(|p| !field.contains(&p.x) || !field.contains(&p.y)) {
            return Err(NotAFieldElement.into());
        }
        if self.has_duplicates() {
            return Err(InterpolationError::DuplicateAbscissas);
        }

        let mut res = field.zero();
        for (i, pi) in self.points.iter().enumerate() {
            let mut num = field.one();
            let mut den = field.one();
            for (j, pj) in self.points.iter().enumerate() {
                if j != i {
                    num = field.mul(&num, &field.neg(&pj.x));
                    den = field.mul(&den, &field.sub(&pi.x, &pj.x));
                }
            }
            let coefficient = field.div(&num, &den)?;
            res = field.add(&res, &field.mul(&coefficient, &pi.y));
        }
        Ok(res)
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl IntoIterator for PointSequence {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
