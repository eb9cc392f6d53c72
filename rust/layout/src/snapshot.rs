// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON snapshots of the resolved design for presentation hosts.
//!
//! The snapshot carries exactly the read-only contract the presentation
//! adapter consumes: the root space with the flattened frontier attached,
//! the flat positioned-piece list, the ids of the selectable leaves, and
//! the current selection. The format is designed for portability between
//! Rust and TypeScript consumers (camelCase fields throughout).

use serde::{Deserialize, Serialize};

use cabinet_lite_geometry::{Piece, Space};

use crate::designer::Designer;
use crate::error::{Error, Result};
use crate::ids::IdSource;

/// Serializable read-only view of a resolved design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSnapshot {
    /// Root space; `sub_spaces` holds the full frontier with pieces.
    pub root: Space,
    /// Ids of the leaves a host may offer for selection (void leaves are
    /// already filtered out).
    pub active_space_ids: Vec<String>,
    /// Every positioned panel, for flat iteration.
    pub pieces: Vec<Piece>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub selected_space_id: Option<String>,
}

impl DesignSnapshot {
    /// Resolves `designer` and captures the adapter view.
    pub fn capture<I: IdSource>(designer: &Designer<I>) -> Self {
        let tree = designer.resolve();
        Self {
            active_space_ids: tree.active_spaces().map(|s| s.id.clone()).collect(),
            pieces: tree.pieces,
            root: tree.root,
            selected_space_id: designer.selected_space_id().map(str::to_owned),
        }
    }

    /// Serializes the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}
