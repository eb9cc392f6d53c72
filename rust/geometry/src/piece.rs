// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel (piece) data model.
//!
//! A piece is a flat, typed, thickness-bearing component. Its kind fixes
//! which axis is thin, which boundary of the parent space it hugs (if any),
//! and whether placing it shrinks the parent or forks it into two spaces.

use serde::{Deserialize, Serialize};

use crate::primitives::{Axis, Dimensions, Position};

/// The panel kinds a carcass is composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceKind {
    LateralLeft,
    LateralRight,
    Bottom,
    Top,
    LateralBack,
    LateralFront,
    Shelf,
    DividerVertical,
}

/// How placing a panel consumes its parent space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutPolicy {
    /// Reduce the parent along the thin axis; the parent keeps its id.
    Shrink,
    /// Replace the parent with two sibling spaces either side of the panel.
    Fork,
}

/// Which end of the thin axis a boundary panel sits flush against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Min,
    Max,
}

impl PieceKind {
    /// The axis along which the panel is `thickness` thin.
    pub fn thin_axis(self) -> Axis {
        match self {
            PieceKind::LateralLeft | PieceKind::LateralRight | PieceKind::DividerVertical => {
                Axis::X
            }
            PieceKind::Bottom | PieceKind::Top | PieceKind::Shelf => Axis::Y,
            PieceKind::LateralBack | PieceKind::LateralFront => Axis::Z,
        }
    }

    /// Shelves and vertical dividers fork; every boundary panel shrinks.
    pub fn cut_policy(self) -> CutPolicy {
        match self {
            PieceKind::Shelf | PieceKind::DividerVertical => CutPolicy::Fork,
            _ => CutPolicy::Shrink,
        }
    }

    pub(crate) fn anchor(self) -> Option<Anchor> {
        match self {
            PieceKind::LateralLeft | PieceKind::Bottom | PieceKind::LateralBack => {
                Some(Anchor::Min)
            }
            PieceKind::LateralRight | PieceKind::Top | PieceKind::LateralFront => {
                Some(Anchor::Max)
            }
            PieceKind::Shelf | PieceKind::DividerVertical => None,
        }
    }

    /// Display name applied to newly created pieces.
    pub fn default_name(self) -> &'static str {
        match self {
            PieceKind::LateralLeft => "Left Side",
            PieceKind::LateralRight => "Right Side",
            PieceKind::Bottom => "Bottom",
            PieceKind::Top => "Top",
            PieceKind::LateralBack => "Back",
            PieceKind::LateralFront => "Front",
            PieceKind::Shelf => "Shelf",
            PieceKind::DividerVertical => "Vertical Divider",
        }
    }

    /// Default display color (hex) applied to newly created pieces.
    pub fn default_color(self) -> &'static str {
        match self {
            PieceKind::LateralLeft | PieceKind::LateralRight => "#8b5cf6",
            PieceKind::Bottom | PieceKind::Top => "#ef4444",
            PieceKind::LateralBack => "#facc15",
            PieceKind::LateralFront => "#f59e0b",
            PieceKind::Shelf => "#10b981",
            PieceKind::DividerVertical => "#3b82f6",
        }
    }
}

/// A typed flat component of the carcass.
///
/// `position` and `dimensions` are computed by the resolver, never set by
/// the host; a freshly requested piece carries a zero box until resolved.
/// `parent_space_id` is fixed at creation and is the piece's only hierarchy
/// pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub id: String,
    pub kind: PieceKind,
    pub name: String,
    pub color: String,
    /// Material thickness in millimeters, uniform across the panel.
    pub thickness: f64,
    pub position: Position,
    pub dimensions: Dimensions,
    pub parent_space_id: String,
}

impl Piece {
    /// A freshly requested piece: named and colored by kind, zero-sized
    /// until the resolver places it.
    pub fn request(
        id: impl Into<String>,
        kind: PieceKind,
        thickness: f64,
        parent_space_id: impl Into<String>,
        initial_position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: kind.default_name().to_owned(),
            color: kind.default_color().to_owned(),
            thickness,
            position: initial_position,
            dimensions: Dimensions::zero(),
            parent_space_id: parent_space_id.into(),
        }
    }
}
