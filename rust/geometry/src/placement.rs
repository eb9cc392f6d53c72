// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel placement rules.
//!
//! Pure functions mapping a panel kind, its parent space and a thickness to
//! the panel's concrete box. Boundary-hugging kinds sit flush against the
//! inside of the hugged face, so a placed panel is always contained in the
//! space it resolved against; splitting kinds default to the parent's
//! mid-span. Inputs are well-formed by construction (the resolver only
//! calls these with a parent taken from the live frontier), so there are
//! no error paths.

use crate::piece::{Anchor, PieceKind};
use crate::primitives::{Axis, Dimensions, Position};
use crate::space::Space;

/// Extents of a panel placed in `parent`: the thin axis equals `thickness`,
/// the other two span the parent's current dimensions.
pub fn piece_dimensions(parent: &Space, kind: PieceKind, thickness: f64) -> Dimensions {
    let d = parent.current_dimensions;
    match kind.thin_axis() {
        Axis::X => Dimensions::new(thickness, d.height, d.depth),
        Axis::Y => Dimensions::new(d.width, thickness, d.depth),
        Axis::Z => Dimensions::new(d.width, d.height, thickness),
    }
}

/// Center of a panel placed in `parent`.
pub fn piece_position(parent: &Space, kind: PieceKind, thickness: f64) -> Position {
    let axis = kind.thin_axis();
    let bounds = parent.aabb();
    let center = match kind.anchor() {
        Some(Anchor::Min) => bounds.min_on(axis) + thickness / 2.0,
        Some(Anchor::Max) => bounds.max_on(axis) - thickness / 2.0,
        // splitting kinds sit at the parent's mid-span
        None => parent.position.on(axis),
    };
    parent.position.with(axis, center)
}
