// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for layout operations.
//!
//! Mutations and resolution never fail: degenerate geometry becomes void
//! spaces and orphaned references stay unresolved, both filtered at the
//! data-model boundary. The only fallible surface is snapshot export.

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the layout crate's edges.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Snapshot JSON encode/decode failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}
