// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned box arithmetic.
//!
//! `Aabb` is the working representation for all cut math: a space converts
//! to min/max corners, gets sliced or shrunk along one axis, and converts
//! back to center-plus-extents form. Keeping the corner form internal avoids
//! repeating half-extent bookkeeping in every operator.

use nalgebra::Point3;

use crate::primitives::{Axis, Dimensions, Position};

/// An axis-aligned bounding box in world millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Builds a box from its center and extents.
    pub fn from_center(position: &Position, dims: &Dimensions) -> Self {
        let half = dims.to_vector() / 2.0;
        let center = position.to_point();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// The box center.
    pub fn center(&self) -> Position {
        Position::from_point(&nalgebra::center(&self.min, &self.max))
    }

    /// The box extents. Negative components are possible for inverted boxes
    /// produced by oversized cuts; callers treat those as degenerate.
    pub fn dimensions(&self) -> Dimensions {
        let d = self.max - self.min;
        Dimensions::new(d.x, d.y, d.z)
    }

    #[inline]
    pub fn min_on(&self, axis: Axis) -> f64 {
        self.min[axis.index()]
    }

    #[inline]
    pub fn max_on(&self, axis: Axis) -> f64 {
        self.max[axis.index()]
    }

    /// Extent along one axis.
    #[inline]
    pub fn extent_on(&self, axis: Axis) -> f64 {
        self.max_on(axis) - self.min_on(axis)
    }

    /// Moves the minimum boundary inward by `by` along `axis`.
    pub fn shrink_min(&self, axis: Axis, by: f64) -> Self {
        let mut out = *self;
        out.min[axis.index()] += by;
        out
    }

    /// Moves the maximum boundary inward by `by` along `axis`.
    pub fn shrink_max(&self, axis: Axis, by: f64) -> Self {
        let mut out = *self;
        out.max[axis.index()] -= by;
        out
    }

    /// The part of the box below the plane `axis = at`.
    pub fn below(&self, axis: Axis, at: f64) -> Self {
        let mut out = *self;
        out.max[axis.index()] = at;
        out
    }

    /// The part of the box above the plane `axis = at`.
    pub fn above(&self, axis: Axis, at: f64) -> Self {
        let mut out = *self;
        out.min[axis.index()] = at;
        out
    }

    /// True when `other` lies entirely inside this box, within `tol`.
    pub fn contains(&self, other: &Aabb, tol: f64) -> bool {
        (0..3).all(|i| other.min[i] >= self.min[i] - tol && other.max[i] <= self.max[i] + tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn root_box() -> Aabb {
        Aabb::from_center(
            &Position::origin(),
            &Dimensions::new(800.0, 2100.0, 600.0),
        )
    }

    #[test]
    fn center_extent_round_trip() {
        let b = root_box();
        assert_relative_eq!(b.min_on(Axis::Y), -1050.0);
        assert_relative_eq!(b.max_on(Axis::Y), 1050.0);
        assert_eq!(b.center(), Position::origin());
        assert_eq!(b.dimensions(), Dimensions::new(800.0, 2100.0, 600.0));
    }

    #[test]
    fn shrink_min_shifts_center() {
        let b = root_box().shrink_min(Axis::Y, 18.0);
        assert_relative_eq!(b.extent_on(Axis::Y), 2082.0);
        assert_relative_eq!(b.center().y, 9.0);
        // unrelated axes untouched
        assert_relative_eq!(b.extent_on(Axis::X), 800.0);
        assert_relative_eq!(b.extent_on(Axis::Z), 600.0);
    }

    #[test]
    fn below_above_partition() {
        let b = root_box();
        let lower = b.below(Axis::X, 0.0);
        let upper = b.above(Axis::X, 0.0);
        assert_relative_eq!(lower.extent_on(Axis::X) + upper.extent_on(Axis::X), 800.0);
        assert_relative_eq!(lower.max_on(Axis::X), upper.min_on(Axis::X));
    }

    #[test]
    fn containment() {
        let b = root_box();
        let inner = b.shrink_min(Axis::Y, 18.0).shrink_max(Axis::Z, 18.0);
        assert!(b.contains(&inner, 1e-9));
        assert!(!inner.contains(&b, 1e-9));
    }
}
