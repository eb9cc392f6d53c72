// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Cabinet-Lite Geometry
//!
//! Pure placement and cutting operators for cabinet carcass layout.
//!
//! Every volume in the system is an axis-aligned rectangular box described
//! by a center [`Position`] and [`Dimensions`] in millimeters. Panels occupy
//! one thin axis of the space they are placed in; cutting a space either
//! shrinks it (boundary panels consume material depth) or forks it into two
//! sibling spaces (shelves, dividers, measured cuts). All operators here are
//! pure functions over value types; the stateful resolution loop lives in
//! `cabinet-lite-layout`.

pub mod bounds;
pub mod cutting;
pub mod piece;
pub mod placement;
pub mod primitives;
pub mod space;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bounds::Aabb;
pub use cutting::{
    apply_cut_to_space, divide_space, divide_space_by_measurement, fork_child_ids, ForkResult,
};
pub use piece::{CutPolicy, Piece, PieceKind};
pub use placement::{piece_dimensions, piece_position};
pub use primitives::{Axis, Dimensions, Position, SplitAxis, VOID_EPSILON_MM};
pub use space::{Space, ROOT_SPACE_ID};
