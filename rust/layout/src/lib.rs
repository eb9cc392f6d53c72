// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Cabinet-Lite Layout
//!
//! Design-session state and the fixed-point layout resolver.
//!
//! The only durable state is the request set: root dimensions, default
//! thickness, the ordered panel list and the ordered manual-division list.
//! Everything a presentation host consumes (the space tree, panel boxes,
//! the selectable frontier) is re-derived from scratch on every read by
//! [`resolve`], which makes the derivation referentially transparent: the
//! same requests always produce the same tree.
//!
//! Pieces inserted later may target spaces that do not exist until an
//! earlier piece is resolved, so the resolver runs work-queue fixed-point
//! passes: an item is ready when its declared parent is present in the
//! current frontier, and items whose parent never appears stay silently
//! unresolved instead of erroring.

pub mod designer;
pub mod division;
pub mod error;
pub mod ids;
pub mod resolver;
pub mod snapshot;

pub use cabinet_lite_geometry as geometry;

pub use designer::Designer;
pub use division::ManualDivision;
pub use error::{Error, Result};
pub use ids::{IdSource, SequentialIds};
pub use resolver::{resolve, DesignRequests, DesignTree};
pub use snapshot::DesignSnapshot;
