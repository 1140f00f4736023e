// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result of one `apply_state` call.

use crate::error::TransportError;
use crate::protocol::Packet;

/// A packet the transport refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedWrite {
    /// The frame that was not written.
    pub packet: Packet,
    /// What the transport reported.
    pub error: TransportError,
}

/// Packets written and refused during one update, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    sent: Vec<Packet>,
    failed: Vec<FailedWrite>,
}

impl ApplyReport {
    /// Packets the transport accepted.
    #[must_use]
    pub fn sent(&self) -> &[Packet] {
        &self.sent
    }

    /// Packets the transport refused.
    #[must_use]
    pub fn failed(&self) -> &[FailedWrite] {
        &self.failed
    }

    /// Returns `true` if the change filter suppressed every write.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sent.is_empty() && self.failed.is_empty()
    }

    /// Number of writes attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.sent.len() + self.failed.len()
    }

    pub(crate) fn push_sent(&mut self, packet: Packet) {
        self.sent.push(packet);
    }

    pub(crate) fn push_failed(&mut self, packet: Packet, error: TransportError) {
        self.failed.push(FailedWrite { packet, error });
    }
}
