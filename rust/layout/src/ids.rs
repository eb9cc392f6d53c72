// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opaque id generation.
//!
//! Identifier generation belongs to the host (typically a UUID service in
//! the UI layer); the engine only requires session-unique opaque strings
//! for newly created pieces and divisions. Fork-child space ids are not
//! drawn from this source: they derive from the creating request id so
//! recomputation reproduces them.

/// A source of fresh ids, collision-free for the lifetime of a session.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Counter-backed id source for tests and standalone hosts.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("cl-{:04}", self.next)
    }
}
