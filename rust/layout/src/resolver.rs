// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fixed-point layout resolver.
//!
//! [`resolve`] derives the full space tree and all panel placements from
//! the durable request state. The derivation runs from scratch on every
//! call; there is no incremental patching and no state carried between
//! calls, so recomputation is idempotent by construction.
//!
//! Resolution runs in four passes over a *frontier* of leaf spaces:
//!
//! 1. panels, as a work-queue fixed point: the earliest panel whose parent
//!    id is present in the frontier is placed and its cut spliced in;
//! 2. manual divisions, same loop, with invalid measurements set aside;
//! 3. panels left over from pass 1 whose parent materialized during pass 2
//!    are placed late, without further subdividing;
//! 4. assembly of the frontier into the root's flattened `sub_spaces`.
//!
//! Each pass is deliberately O(n squared): a linear scan for a ready item on
//! every iteration. Request counts are interactive-tool small, and the scan
//! keeps the earliest-created-wins ordering contract obvious.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use cabinet_lite_geometry::{
    apply_cut_to_space, divide_space, divide_space_by_measurement, piece_dimensions,
    piece_position, CutPolicy, Dimensions, Piece, Space,
};

use crate::division::ManualDivision;

/// The durable request state a design derives from.
///
/// This is the complete persistent surface of a design session: cloning it
/// snapshots the session, and [`resolve`] is a pure function of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequests {
    pub root_name: String,
    pub root_dimensions: Dimensions,
    /// Thickness applied to pieces created after the setting changes.
    pub default_thickness: f64,
    /// Ordered panel-insertion requests.
    pub pieces: Vec<Piece>,
    /// Ordered manual-division requests.
    pub divisions: Vec<ManualDivision>,
}

impl Default for DesignRequests {
    fn default() -> Self {
        Self {
            root_name: "Main Cabinet".to_owned(),
            root_dimensions: Dimensions::new(800.0, 2100.0, 600.0),
            default_thickness: 18.0,
            pieces: Vec::new(),
            divisions: Vec::new(),
        }
    }
}

/// The derived, immutable output consumed by the presentation adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTree {
    /// The root space, carrying the flattened frontier as `sub_spaces` and
    /// the panels resolved directly against it.
    pub root: Space,
    /// The final frontier: every terminal leaf, void leaves included.
    pub leaves: Vec<Space>,
    /// Every positioned panel (root-level and leaf-level) for flat
    /// iteration, e.g. rendering without walking the tree.
    pub pieces: Vec<Piece>,
}

impl DesignTree {
    /// Leaves eligible for selection and visualization; void leaves are
    /// excluded.
    pub fn active_spaces(&self) -> impl Iterator<Item = &Space> {
        self.leaves.iter().filter(|s| s.is_active)
    }

    /// Looks up the root or a frontier leaf by id.
    pub fn find_space(&self, id: &str) -> Option<&Space> {
        if self.root.id == id {
            return Some(&self.root);
        }
        self.leaves.iter().find(|s| s.id == id)
    }
}

/// Places `piece` against `parent`, filling in its box.
fn place(piece: &Piece, parent: &Space) -> Piece {
    let mut placed = piece.clone();
    placed.dimensions = piece_dimensions(parent, piece.kind, piece.thickness);
    placed.position = piece_position(parent, piece.kind, piece.thickness);
    placed
}

/// Derives the full space tree and panel placements from `requests`.
pub fn resolve(requests: &DesignRequests) -> DesignTree {
    let root = Space::root(&requests.root_name, requests.root_dimensions);

    // Pass 1: panels against the physical frontier. A panel is ready when
    // its declared parent is currently a frontier leaf; the earliest ready
    // panel in request order wins each iteration.
    let mut frontier: Vec<Space> = vec![root.clone()];
    let mut positioned: Vec<Piece> = Vec::new();
    let mut pending: Vec<&Piece> = requests.pieces.iter().collect();

    loop {
        let Some(ready) = pending
            .iter()
            .position(|p| frontier.iter().any(|s| s.id == p.parent_space_id))
        else {
            break;
        };
        let piece = pending.remove(ready);
        let Some(parent_index) = frontier.iter().position(|s| s.id == piece.parent_space_id)
        else {
            // unreachable: the ready predicate just matched this id
            continue;
        };

        let placed = place(piece, &frontier[parent_index]);
        match placed.kind.cut_policy() {
            CutPolicy::Fork => {
                let children = divide_space(&frontier[parent_index], &placed);
                tracing::trace!(piece = %placed.id, parent = %placed.parent_space_id, "fork cut");
                frontier.splice(parent_index..=parent_index, children);
            }
            CutPolicy::Shrink => {
                tracing::trace!(piece = %placed.id, parent = %placed.parent_space_id, "shrink cut");
                frontier[parent_index] = apply_cut_to_space(&frontier[parent_index], &placed);
            }
        }
        positioned.push(placed);
    }
    tracing::debug!(
        placed = positioned.len(),
        unplaced = pending.len(),
        "panel pass converged"
    );

    // Pass 2: manual divisions against the frontier left by pass 1. A ready
    // division whose measurement falls outside its parent is set aside: it
    // stays a pending request forever but never blocks the rest of the
    // queue.
    let mut divisions: Vec<&ManualDivision> = requests.divisions.iter().collect();
    while let Some(ready) = divisions
        .iter()
        .position(|d| frontier.iter().any(|s| s.id == d.parent_space_id))
    {
        let division = divisions.remove(ready);
        let Some(parent_index) = frontier
            .iter()
            .position(|s| s.id == division.parent_space_id)
        else {
            continue;
        };

        let children = divide_space_by_measurement(
            &frontier[parent_index],
            division.axis,
            division.value,
            division.from_end,
            &division.id,
        );
        if children.is_empty() {
            tracing::debug!(
                division = %division.id,
                value = division.value,
                "measurement outside parent extent; division skipped"
            );
            continue;
        }
        tracing::trace!(division = %division.id, parent = %division.parent_space_id, "measured cut");
        frontier.splice(parent_index..=parent_index, children);
    }

    // Pass 3: panels whose parent only materialized during the division
    // pass are positioned against that leaf, but never subdivide it. Only
    // further manual divisions fork a measured leaf again.
    let mut late: Vec<Piece> = Vec::new();
    for piece in pending {
        match frontier.iter().find(|s| s.id == piece.parent_space_id) {
            Some(parent) => late.push(place(piece, parent)),
            None => tracing::debug!(
                piece = %piece.id,
                parent = %piece.parent_space_id,
                "parent never appeared in the frontier; panel left unplaced"
            ),
        }
    }

    // Pass 4: assembly. Frontier leaves collect their panels; the root
    // keeps the pass-1 panels and the frontier, and is active only while
    // the design is empty.
    let mut by_parent: FxHashMap<String, Vec<Piece>> = FxHashMap::default();
    for piece in positioned.iter().chain(late.iter()) {
        by_parent
            .entry(piece.parent_space_id.clone())
            .or_default()
            .push(piece.clone());
    }

    let mut leaves = frontier;
    for leaf in &mut leaves {
        if let Some(pieces) = by_parent.remove(leaf.id.as_str()) {
            leaf.pieces = pieces;
        }
    }

    let mut all_pieces = positioned.clone();
    all_pieces.extend(late);

    let mut root = root;
    root.pieces = positioned;
    root.sub_spaces = leaves.clone();
    root.is_active =
        requests.pieces.is_empty() && requests.divisions.is_empty() && !root.is_void();

    DesignTree {
        root,
        leaves,
        pieces: all_pieces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cabinet_lite_geometry::{PieceKind, Position, SplitAxis, ROOT_SPACE_ID};

    fn request_piece(id: &str, kind: PieceKind, parent: &str) -> Piece {
        Piece::request(id, kind, 18.0, parent, Position::origin())
    }

    #[test]
    fn empty_design_is_a_single_active_root() {
        let tree = resolve(&DesignRequests::default());
        assert!(tree.root.is_active);
        assert_eq!(tree.leaves.len(), 1);
        assert_eq!(tree.leaves[0].id, ROOT_SPACE_ID);
        assert!(tree.pieces.is_empty());
    }

    #[test]
    fn root_keeps_original_dimensions_after_cuts() {
        let mut requests = DesignRequests::default();
        requests
            .pieces
            .push(request_piece("p1", PieceKind::Bottom, ROOT_SPACE_ID));
        let tree = resolve(&requests);

        // the container root reports the declared size; the shrunken box
        // lives on in the frontier leaf with the same id
        assert_relative_eq!(tree.root.current_dimensions.height, 2100.0);
        assert!(!tree.root.is_active);
        assert_relative_eq!(tree.leaves[0].current_dimensions.height, 2082.0);
        assert_relative_eq!(tree.leaves[0].position.y, 9.0);
    }

    #[test]
    fn out_of_order_insertion_converges() {
        // The bottom targets a space that only exists once the shelf is
        // resolved, and it sits before the shelf in the request list.
        let mut requests = DesignRequests::default();
        requests
            .pieces
            .push(request_piece("p1", PieceKind::Bottom, "p2:lower"));
        requests
            .pieces
            .push(request_piece("p2", PieceKind::Shelf, ROOT_SPACE_ID));
        let tree = resolve(&requests);

        assert_eq!(tree.pieces.len(), 2);
        assert_eq!(tree.leaves.len(), 2);
        let lower = tree.find_space("p2:lower").unwrap();
        // 1041 minus the bottom panel
        assert_relative_eq!(lower.current_dimensions.height, 1023.0);
    }

    #[test]
    fn order_independence_where_legal() {
        let forward = {
            let mut r = DesignRequests::default();
            r.pieces
                .push(request_piece("shelf", PieceKind::Shelf, ROOT_SPACE_ID));
            r.pieces
                .push(request_piece("bottom", PieceKind::Bottom, "shelf:lower"));
            r
        };
        let reversed = {
            let mut r = DesignRequests::default();
            r.pieces
                .push(request_piece("bottom", PieceKind::Bottom, "shelf:lower"));
            r.pieces
                .push(request_piece("shelf", PieceKind::Shelf, ROOT_SPACE_ID));
            r
        };

        let a = resolve(&forward);
        let b = resolve(&reversed);
        assert_eq!(a.leaves, b.leaves);
        assert_eq!(a.pieces, b.pieces);
    }

    #[test]
    fn idempotent_recomputation() {
        let mut requests = DesignRequests::default();
        requests
            .pieces
            .push(request_piece("p1", PieceKind::Shelf, ROOT_SPACE_ID));
        requests.divisions.push(ManualDivision {
            id: "d1".to_owned(),
            parent_space_id: "p1:upper".to_owned(),
            axis: SplitAxis::X,
            value: 300.0,
            from_end: false,
        });

        let first = resolve(&requests);
        let second = resolve(&requests);
        assert_eq!(first, second);
    }

    #[test]
    fn orphaned_panel_stays_unplaced() {
        let mut requests = DesignRequests::default();
        requests
            .pieces
            .push(request_piece("p1", PieceKind::Bottom, "no-such-space"));
        let tree = resolve(&requests);

        assert!(tree.pieces.is_empty());
        assert_eq!(tree.leaves.len(), 1);
        // the request itself is untouched
        assert_eq!(requests.pieces.len(), 1);
    }

    #[test]
    fn invalid_division_does_not_block_later_ones() {
        let mut requests = DesignRequests::default();
        requests.divisions.push(ManualDivision {
            id: "bad".to_owned(),
            parent_space_id: ROOT_SPACE_ID.to_owned(),
            axis: SplitAxis::X,
            value: 900.0,
            from_end: false,
        });
        requests.divisions.push(ManualDivision {
            id: "good".to_owned(),
            parent_space_id: ROOT_SPACE_ID.to_owned(),
            axis: SplitAxis::X,
            value: 400.0,
            from_end: false,
        });
        let tree = resolve(&requests);

        assert_eq!(tree.leaves.len(), 2);
        assert_eq!(tree.leaves[0].id, "good:left");
        assert_eq!(tree.leaves[1].id, "good:right");
    }

    #[test]
    fn late_panel_positions_without_forking() {
        let mut requests = DesignRequests::default();
        requests.divisions.push(ManualDivision {
            id: "d1".to_owned(),
            parent_space_id: ROOT_SPACE_ID.to_owned(),
            axis: SplitAxis::Y,
            value: 700.0,
            from_end: false,
        });
        // a shelf inside a measured leaf is placed but must not fork it
        requests
            .pieces
            .push(request_piece("p1", PieceKind::Shelf, "d1:lower"));
        let tree = resolve(&requests);

        assert_eq!(tree.leaves.len(), 2);
        assert_eq!(tree.pieces.len(), 1);
        let lower = tree.find_space("d1:lower").unwrap();
        assert_eq!(lower.pieces.len(), 1);
        assert_relative_eq!(lower.current_dimensions.height, 700.0);
        // shelf centered in the 700mm leaf: -1050 + 350
        assert_relative_eq!(lower.pieces[0].position.y, -700.0);
    }

    #[test]
    fn leaf_pieces_group_by_parent() {
        let mut requests = DesignRequests::default();
        requests
            .pieces
            .push(request_piece("shelf", PieceKind::Shelf, ROOT_SPACE_ID));
        requests
            .pieces
            .push(request_piece("b1", PieceKind::Bottom, "shelf:lower"));
        requests
            .pieces
            .push(request_piece("b2", PieceKind::Bottom, "shelf:upper"));
        let tree = resolve(&requests);

        let lower = tree.find_space("shelf:lower").unwrap();
        let upper = tree.find_space("shelf:upper").unwrap();
        assert_eq!(lower.pieces.len(), 1);
        assert_eq!(lower.pieces[0].id, "b1");
        assert_eq!(upper.pieces.len(), 1);
        assert_eq!(upper.pieces[0].id, "b2");
        // the root lists every pass-1 panel for whole-design iteration
        assert_eq!(tree.root.pieces.len(), 3);
    }
}
