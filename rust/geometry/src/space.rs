// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular spaces and the flattened frontier.
//!
//! The tree of spaces is deliberately not recursive: the root holds the
//! full set of terminal leaves in `sub_spaces`, and every leaf points back
//! only through `created_by` (the panel or manual division whose fork
//! produced it). Intermediate generations are not retained.

use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::piece::Piece;
use crate::primitives::{Dimensions, Position};

/// Well-known id of the root space.
pub const ROOT_SPACE_ID: &str = "main";

/// An axis-aligned rectangular volume available for placing material or
/// further subdivision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    /// The user-declared full dimensions. Authoritative only on the root;
    /// leaves omit it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_dimensions: Option<Dimensions>,
    /// The live, possibly-shrunken box.
    pub current_dimensions: Dimensions,
    pub position: Position,
    /// Panels resolved against this space.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub pieces: Vec<Piece>,
    /// Root only: the flattened frontier of terminal leaves.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sub_spaces: Vec<Space>,
    /// True for leaves eligible for selection. The root is active only
    /// while the design is empty.
    pub is_active: bool,
    /// Id of the panel or manual division whose fork produced this space;
    /// `None` for the root and spaces that only ever shrank.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_by: Option<String>,
}

impl Space {
    /// The root space of a design, centered on the world origin.
    pub fn root(name: impl Into<String>, dims: Dimensions) -> Self {
        Self {
            id: ROOT_SPACE_ID.to_owned(),
            name: name.into(),
            original_dimensions: Some(dims),
            current_dimensions: dims,
            position: Position::origin(),
            pieces: Vec::new(),
            sub_spaces: Vec::new(),
            is_active: !dims.is_void(),
            created_by: None,
        }
    }

    /// A leaf space produced by a fork cut.
    pub fn leaf(
        id: impl Into<String>,
        name: impl Into<String>,
        dims: Dimensions,
        position: Position,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            original_dimensions: None,
            current_dimensions: dims,
            position,
            pieces: Vec::new(),
            sub_spaces: Vec::new(),
            is_active: !dims.is_void(),
            created_by: Some(created_by.into()),
        }
    }

    /// The space's live box in corner form.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(&self.position, &self.current_dimensions)
    }

    /// True when any current dimension is at or below the void threshold.
    pub fn is_void(&self) -> bool {
        self.current_dimensions.is_void()
    }
}
