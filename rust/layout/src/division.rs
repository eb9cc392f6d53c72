// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Manual measured divisions.

use serde::{Deserialize, Serialize};

use cabinet_lite_geometry::SplitAxis;

/// A user-issued straight cut not backed by a physical panel.
///
/// The cut plane sits `value` millimeters from the parent space's origin
/// boundary along `axis`, or from the far boundary when `from_end` is set.
/// A division whose value falls outside its parent's extent stays pending
/// forever; it never resolves and never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualDivision {
    pub id: String,
    pub parent_space_id: String,
    pub axis: SplitAxis,
    pub value: f64,
    pub from_end: bool,
}
