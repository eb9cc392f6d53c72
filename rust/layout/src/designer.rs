// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Design-session state and mutations.
//!
//! The designer owns the durable requests plus the current selection, and
//! nothing else: every mutation is a pure append, removal or replacement on
//! the request lists, and the tree is re-derived on demand via
//! [`resolve`]. No mutation here computes geometry. None of the mutating
//! operations can fail; degenerate outcomes surface as void or unresolved
//! entries in the derived tree instead.

use cabinet_lite_geometry::{fork_child_ids, Dimensions, Piece, PieceKind, SplitAxis, ROOT_SPACE_ID};

use crate::division::ManualDivision;
use crate::ids::{IdSource, SequentialIds};
use crate::resolver::{resolve, DesignRequests, DesignTree};
use crate::snapshot::DesignSnapshot;

/// A cabinet design session.
pub struct Designer<I: IdSource = SequentialIds> {
    requests: DesignRequests,
    selected_space_id: Option<String>,
    ids: I,
}

impl Designer<SequentialIds> {
    /// A session with default root dimensions and a counter-backed id
    /// source.
    pub fn new() -> Self {
        Self::with_ids(SequentialIds::new())
    }
}

impl Default for Designer<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> Designer<I> {
    /// A session drawing fresh ids from a host-owned source.
    pub fn with_ids(ids: I) -> Self {
        Self {
            requests: DesignRequests::default(),
            selected_space_id: Some(ROOT_SPACE_ID.to_owned()),
            ids,
        }
    }

    /// The durable request state. Cloning it snapshots the session for an
    /// atomic out-of-band [`resolve`].
    pub fn requests(&self) -> &DesignRequests {
        &self.requests
    }

    pub fn selected_space_id(&self) -> Option<&str> {
        self.selected_space_id.as_deref()
    }

    pub fn default_thickness(&self) -> f64 {
        self.requests.default_thickness
    }

    /// Derives the current tree. Pure; call as often as needed.
    pub fn resolve(&self) -> DesignTree {
        resolve(&self.requests)
    }

    /// Captures the adapter-facing snapshot of the current state.
    pub fn snapshot(&self) -> DesignSnapshot {
        DesignSnapshot::capture(self)
    }

    /// Appends a panel request parented to the selected space, or to the
    /// root when the selection is absent or stale. Returns the new piece's
    /// id. The piece stays a zero box until the next resolve.
    pub fn add_piece(&mut self, kind: PieceKind) -> String {
        let tree = self.resolve();
        let target = self
            .selected_space_id
            .as_deref()
            .and_then(|id| tree.active_spaces().find(|s| s.id == id))
            .unwrap_or(&tree.root);

        let id = self.ids.next_id();
        tracing::debug!(piece = %id, kind = ?kind, parent = %target.id, "piece requested");
        self.requests.pieces.push(Piece::request(
            id.clone(),
            kind,
            self.requests.default_thickness,
            target.id.clone(),
            target.position,
        ));
        id
    }

    /// Removes a panel request. Panels living in a space the removed panel
    /// forked out are reparented to the removed panel's own parent
    /// (flattening one level); a selection inside that space resets to the
    /// root. Unknown ids are ignored.
    pub fn remove_piece(&mut self, piece_id: &str) {
        let Some(index) = self.requests.pieces.iter().position(|p| p.id == piece_id) else {
            return;
        };
        let removed = self.requests.pieces.remove(index);

        // Spaces created by the removed panel's fork carry ids derived from
        // it; dependents move up to the removed panel's parent.
        let orphans = fork_child_ids(&removed.id, removed.kind.thin_axis());
        for piece in &mut self.requests.pieces {
            if orphans.contains(&piece.parent_space_id) {
                tracing::debug!(
                    piece = %piece.id,
                    from = %piece.parent_space_id,
                    to = %removed.parent_space_id,
                    "reparented after removal"
                );
                piece.parent_space_id = removed.parent_space_id.clone();
            }
        }

        if self
            .selected_space_id
            .as_deref()
            .is_some_and(|id| orphans.iter().any(|o| o == id))
        {
            self.selected_space_id = Some(ROOT_SPACE_ID.to_owned());
        }
    }

    /// Appends a manual-division request. Returns the new division's id.
    /// No geometry is computed and no validation happens here; a value
    /// outside the parent's extent simply never resolves.
    pub fn split_space(
        &mut self,
        space_id: &str,
        axis: SplitAxis,
        value: f64,
        from_end: bool,
    ) -> String {
        let id = self.ids.next_id();
        tracing::debug!(division = %id, parent = %space_id, axis = %axis.axis(), value, "split requested");
        self.requests.divisions.push(ManualDivision {
            id: id.clone(),
            parent_space_id: space_id.to_owned(),
            axis,
            value,
            from_end,
        });
        id
    }

    /// Empties both request lists.
    pub fn clear_all(&mut self) {
        self.requests.pieces.clear();
        self.requests.divisions.clear();
    }

    /// Replaces the root dimensions. Existing requests are not revalidated;
    /// anything that no longer fits becomes void in the derived tree.
    pub fn set_root_dimensions(&mut self, dims: Dimensions) {
        self.requests.root_dimensions = dims;
    }

    /// Sets the thickness applied to subsequently created pieces.
    pub fn set_default_thickness(&mut self, thickness: f64) {
        self.requests.default_thickness = thickness;
    }

    /// Selection only; never affects geometry.
    pub fn select_space(&mut self, space_id: Option<&str>) {
        self.selected_space_id = space_id.map(str::to_owned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn add_piece_targets_the_selection() {
        let mut designer = Designer::new();
        let shelf = designer.add_piece(PieceKind::Shelf);

        let upper = format!("{shelf}:upper");
        designer.select_space(Some(&upper));
        designer.add_piece(PieceKind::Bottom);

        let last = &designer.requests().pieces[1];
        assert_eq!(last.parent_space_id, upper);
    }

    #[test]
    fn stale_selection_falls_back_to_root() {
        let mut designer = Designer::new();
        designer.select_space(Some("gone"));
        designer.add_piece(PieceKind::Bottom);
        assert_eq!(designer.requests().pieces[0].parent_space_id, ROOT_SPACE_ID);
    }

    #[test]
    fn remove_piece_reparents_dependents() {
        let mut designer = Designer::new();
        let shelf = designer.add_piece(PieceKind::Shelf);
        let lower = format!("{shelf}:lower");
        designer.select_space(Some(&lower));
        let bottom = designer.add_piece(PieceKind::Bottom);

        designer.remove_piece(&shelf);

        let pieces = &designer.requests().pieces;
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].id, bottom);
        // moved up to the removed shelf's own parent
        assert_eq!(pieces[0].parent_space_id, ROOT_SPACE_ID);

        // and the reparented panel resolves against that ancestor
        let tree = designer.resolve();
        assert_eq!(tree.pieces.len(), 1);
        assert_relative_eq!(tree.pieces[0].position.y, -1041.0);
    }

    #[test]
    fn remove_piece_resets_a_selection_inside_it() {
        let mut designer = Designer::new();
        let shelf = designer.add_piece(PieceKind::Shelf);
        let upper = format!("{shelf}:upper");
        designer.select_space(Some(&upper));

        designer.remove_piece(&shelf);
        assert_eq!(designer.selected_space_id(), Some(ROOT_SPACE_ID));
    }

    #[test]
    fn remove_unknown_piece_is_a_noop() {
        let mut designer = Designer::new();
        designer.add_piece(PieceKind::Bottom);
        designer.remove_piece("nope");
        assert_eq!(designer.requests().pieces.len(), 1);
    }

    #[test]
    fn clear_all_empties_both_lists() {
        let mut designer = Designer::new();
        designer.add_piece(PieceKind::Shelf);
        designer.split_space(ROOT_SPACE_ID, SplitAxis::X, 400.0, false);
        designer.clear_all();

        assert!(designer.requests().pieces.is_empty());
        assert!(designer.requests().divisions.is_empty());
        let tree = designer.resolve();
        assert!(tree.root.is_active);
    }

    #[test]
    fn default_thickness_applies_at_creation_only() {
        let mut designer = Designer::new();
        designer.add_piece(PieceKind::Bottom);
        designer.set_default_thickness(25.0);
        designer.add_piece(PieceKind::Top);

        let pieces = &designer.requests().pieces;
        assert_relative_eq!(pieces[0].thickness, 18.0);
        assert_relative_eq!(pieces[1].thickness, 25.0);
    }

    #[test]
    fn resize_does_not_revalidate_requests() {
        let mut designer = Designer::new();
        designer.split_space(ROOT_SPACE_ID, SplitAxis::X, 400.0, false);
        designer.set_root_dimensions(Dimensions::new(300.0, 2100.0, 600.0));

        // the 400mm cut no longer fits; it pends silently
        let tree = designer.resolve();
        assert_eq!(tree.leaves.len(), 1);
        assert_eq!(tree.leaves[0].id, ROOT_SPACE_ID);
        assert_eq!(designer.requests().divisions.len(), 1);
    }
}
