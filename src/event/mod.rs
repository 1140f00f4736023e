// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection lifecycle events forwarded by the host BLE stack.
//!
//! The host translates its own GATT client callbacks into
//! [`ConnectionEvent`]s and hands them to
//! [`Snl660Light::on_connection_event`](crate::Snl660Light::on_connection_event).
//! Events the driver does not care about (MTU exchange, notifications,
//! write confirmations) are simply not forwarded.

use std::fmt;

/// A connection lifecycle event.
///
/// # Examples
///
/// ```
/// use neewer_snl660::event::ConnectionEvent;
///
/// assert!(ConnectionEvent::Closed.is_link_loss());
/// assert!(!ConnectionEvent::ServiceSearchComplete.is_link_loss());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionEvent {
    /// The link came up; service search is in progress.
    Connected,
    /// Service search finished and the attribute table can be queried.
    ServiceSearchComplete,
    /// The link dropped.
    Disconnected,
    /// The GATT client closed the link.
    Closed,
}

impl ConnectionEvent {
    /// Returns `true` for events that invalidate attribute handles.
    #[must_use]
    pub const fn is_link_loss(&self) -> bool {
        matches!(self, Self::Disconnected | Self::Closed)
    }
}

impl fmt::Display for ConnectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connected => "connected",
            Self::ServiceSearchComplete => "service search complete",
            Self::Disconnected => "disconnected",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_loss_events() {
        assert!(ConnectionEvent::Disconnected.is_link_loss());
        assert!(ConnectionEvent::Closed.is_link_loss());
        assert!(!ConnectionEvent::Connected.is_link_loss());
        assert!(!ConnectionEvent::ServiceSearchComplete.is_link_loss());
    }

    #[test]
    fn display() {
        assert_eq!(
            ConnectionEvent::ServiceSearchComplete.to_string(),
            "service search complete"
        );
    }
}
