// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Space cutting operators.
//!
//! Two mutually exclusive cut policies, chosen by panel kind:
//!
//! - a shrink cut reduces one space's extent along the panel's thin axis
//!   and keeps the parent's id, so boundary panels stack (bottom + back +
//!   left side all consume the same space in sequence);
//! - a fork cut replaces one space with two siblings either side of a split
//!   plane, so shelves and dividers branch the frontier.
//!
//! Fork children ids derive deterministically from the creating panel or
//! division id. Recomputing the tree from the same requests must reproduce
//! the same ids, and `parent_space_id` references recorded against a fork
//! child have to survive recomputation.

use smallvec::SmallVec;

use crate::piece::{Anchor, Piece};
use crate::primitives::{Axis, SplitAxis};
use crate::space::Space;

/// The spaces a fork cut produces: two siblings, or none for an invalid
/// measured cut.
pub type ForkResult = SmallVec<[Space; 2]>;

fn fork_suffixes(axis: Axis) -> [&'static str; 2] {
    match axis {
        Axis::X => ["left", "right"],
        Axis::Y => ["lower", "upper"],
        Axis::Z => ["near", "far"],
    }
}

/// The ids of the two children a fork by `creator` produces along `axis`.
///
/// Exposed so the request layer can recognize spaces created by a given
/// panel when it is removed, without string inspection of opaque ids.
pub fn fork_child_ids(creator: &str, axis: Axis) -> [String; 2] {
    let [low, high] = fork_suffixes(axis);
    [format!("{creator}:{low}"), format!("{creator}:{high}")]
}

/// Shrink cut for boundary-hugging panels.
///
/// The parent's extent along the panel's thin axis drops by the panel
/// thickness and its center shifts half that thickness toward the interior,
/// so the remaining space never overlaps the panel. The result keeps the
/// parent's id: structural panels consume boundary depth without forking
/// the hierarchy.
pub fn apply_cut_to_space(parent: &Space, piece: &Piece) -> Space {
    let axis = piece.kind.thin_axis();
    let bounds = parent.aabb();
    let cut = match piece.kind.anchor() {
        Some(Anchor::Min) => bounds.shrink_min(axis, piece.thickness),
        Some(Anchor::Max) => bounds.shrink_max(axis, piece.thickness),
        // splitting kinds never take the shrink path
        None => bounds,
    };

    let mut out = parent.clone();
    out.current_dimensions = cut.dimensions();
    out.position = cut.center();
    out.is_active = !out.current_dimensions.is_void();
    out
}

/// Fork cut for shelves and vertical dividers.
///
/// Splits the parent into two spaces either side of the panel's position
/// along its thin axis, each pulled back half the panel thickness from the
/// split plane. Both children are eligible to parent further panels and
/// divisions.
pub fn divide_space(parent: &Space, piece: &Piece) -> ForkResult {
    let axis = piece.kind.thin_axis();
    let plane = piece.position.on(axis);
    split_at(parent, axis, plane, piece.thickness / 2.0, &piece.id)
}

/// Fork cut for a manual measured division.
///
/// The split plane sits `value` millimeters from the parent's origin
/// boundary along `axis`, or from the far boundary when `from_end` is set.
/// A manual cut has zero material width, so no thickness is subtracted.
/// Returns an empty result when `value` does not fall strictly inside the
/// parent's extent (an invalid cut is a no-op, not an error).
pub fn divide_space_by_measurement(
    parent: &Space,
    axis: SplitAxis,
    value: f64,
    from_end: bool,
    division_id: &str,
) -> ForkResult {
    let axis = axis.axis();
    let bounds = parent.aabb();
    if value <= 0.0 || value >= bounds.extent_on(axis) {
        return SmallVec::new();
    }
    let plane = if from_end {
        bounds.max_on(axis) - value
    } else {
        bounds.min_on(axis) + value
    };
    split_at(parent, axis, plane, 0.0, division_id)
}

fn split_at(parent: &Space, axis: Axis, plane: f64, margin: f64, creator: &str) -> ForkResult {
    let bounds = parent.aabb();
    let boxes = [
        bounds.below(axis, plane - margin),
        bounds.above(axis, plane + margin),
    ];
    let ids = fork_child_ids(creator, axis);
    let suffixes = fork_suffixes(axis);

    let mut out = SmallVec::new();
    for i in 0..2 {
        out.push(Space::leaf(
            ids[i].clone(),
            format!("{} ({})", parent.name, suffixes[i]),
            boxes[i].dimensions(),
            boxes[i].center(),
            creator,
        ));
    }
    out
}
