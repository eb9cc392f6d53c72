// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension, position and axis value types.
//!
//! Width runs along X, height along Y, depth along Z. All lengths are
//! millimeters in a single shared world frame; positions name the geometric
//! center of a box, never a corner.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Spaces thinner than this on any axis are void: they keep their id slot in
/// the tree but are never advertised as active or selectable.
pub const VOID_EPSILON_MM: f64 = 1.0;

/// World axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into a `Point3`/`Vector3`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the axis name as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axes a manual division may cut along.
///
/// Measured cuts are planning lines drawn in the front elevation, so only
/// the two in-plane axes are available (no depth-wise manual cuts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitAxis {
    X,
    Y,
}

impl SplitAxis {
    /// Widens to the full world-axis enum.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            SplitAxis::X => Axis::X,
            SplitAxis::Y => Axis::Y,
        }
    }
}

/// Box extents in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// The zero box, used for freshly requested panels before resolution.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Extent along one axis.
    #[inline]
    pub fn on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    /// Returns a copy with the extent along `axis` replaced.
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.width = value,
            Axis::Y => self.height = value,
            Axis::Z => self.depth = value,
        }
        self
    }

    /// True when any component is non-positive. Degenerate boxes must be
    /// excluded from anything visual.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0
    }

    /// True when any component is at or below [`VOID_EPSILON_MM`].
    pub fn is_void(&self) -> bool {
        self.width <= VOID_EPSILON_MM
            || self.height <= VOID_EPSILON_MM
            || self.depth <= VOID_EPSILON_MM
    }

    /// Extents as a nalgebra vector (x = width, y = height, z = depth).
    #[inline]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }
}

/// Center of a box in the shared world frame, millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The world origin.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Component along one axis.
    #[inline]
    pub fn on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns a copy with the component along `axis` replaced.
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    #[inline]
    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_point(p: &Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
