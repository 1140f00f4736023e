// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GATT discovery of the SNL-660 write handle.
//!
//! Discovery runs once per connection, when the host reports that service
//! search has completed. It resolves the control service and its write
//! characteristic, trying both byte orders of each UUID, and caches the
//! attribute handle until the link goes down.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --Connected--> Searching --SearchComplete--> Established { ready }
//!   ^                                                     |
//!   +-------------------- Disconnected/Closed ------------+
//! ```
//!
//! # Examples
//!
//! ```
//! use neewer_snl660::discovery::resolve_first;
//! use neewer_snl660::protocol::uuids::{ByteOrder, SERVICE};
//!
//! // Only the little-endian encoding is "present"
//! let present = SERVICE.get(ByteOrder::LittleEndian);
//! let found = resolve_first(&SERVICE.candidates(ByteOrder::BigEndian), |uuid| {
//!     (*uuid == present).then_some("svc")
//! });
//! assert_eq!(found, Some((ByteOrder::LittleEndian, "svc")));
//! ```

use uuid::Uuid;

use crate::error::DiscoveryError;
use crate::protocol::uuids::{ByteOrder, SERVICE, WRITE_CHARACTERISTIC};
use crate::protocol::{GattClient, GattService};

/// Phase of the per-connection discovery cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiscoveryPhase {
    /// No connection.
    #[default]
    Idle,
    /// Connected, waiting for service search to finish.
    Searching,
    /// Service search finished; `ready` tells whether a write handle exists.
    Established {
        /// Whether a usable write handle was cached.
        ready: bool,
    },
}

/// Outcome of a successful discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedHandle {
    /// Attribute handle of the write characteristic.
    pub handle: u16,
    /// Byte order under which the service matched.
    pub service_order: ByteOrder,
    /// Byte order under which the characteristic matched.
    pub characteristic_order: ByteOrder,
}

/// Returns the first candidate for which `lookup` yields a value.
///
/// Candidates are tried in order; the byte order of the winning candidate is
/// returned alongside the value.
pub fn resolve_first<T, F>(candidates: &[(ByteOrder, Uuid)], mut lookup: F) -> Option<(ByteOrder, T)>
where
    F: FnMut(&Uuid) -> Option<T>,
{
    candidates
        .iter()
        .find_map(|(order, uuid)| lookup(uuid).map(|found| (*order, found)))
}

/// Cached write handle for the current connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryState {
    write_handle: Option<u16>,
    handles_ready: bool,
    phase: DiscoveryPhase,
    resolved: Option<ResolvedHandle>,
}

impl DiscoveryState {
    /// Creates an idle state with no handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if writes may be attempted.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready_handle().is_some()
    }

    /// Returns the write handle if it is usable.
    #[must_use]
    pub fn ready_handle(&self) -> Option<u16> {
        self.write_handle
            .filter(|&handle| self.handles_ready && handle != 0)
    }

    /// Returns the cached handle, usable or not.
    #[must_use]
    pub const fn write_handle(&self) -> Option<u16> {
        self.write_handle
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DiscoveryPhase {
        self.phase
    }

    /// Returns details of the last successful resolution.
    #[must_use]
    pub const fn resolved(&self) -> Option<ResolvedHandle> {
        self.resolved
    }

    /// Marks the link as up and waiting for service search.
    pub fn begin_search(&mut self) {
        self.phase = DiscoveryPhase::Searching;
    }

    /// Drops the cached handle and returns to [`DiscoveryPhase::Idle`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resolves the write handle from the peer's attribute table.
    ///
    /// The service is looked up big-endian first. The characteristic is
    /// looked up in the order that matched the service first, then in the
    /// other order. Either way the phase ends up
    /// [`DiscoveryPhase::Established`].
    ///
    /// # Errors
    ///
    /// Returns a [`DiscoveryError`] if the service or characteristic is
    /// missing or the handle is zero. The state is then not ready.
    pub fn complete<C: GattClient + ?Sized>(
        &mut self,
        client: &C,
    ) -> Result<ResolvedHandle, DiscoveryError> {
        self.write_handle = None;
        self.handles_ready = false;
        self.resolved = None;
        self.phase = DiscoveryPhase::Established { ready: false };

        let (service_order, service) =
            resolve_first(&SERVICE.candidates(ByteOrder::BigEndian), |uuid| {
                client.service(uuid)
            })
            .ok_or(DiscoveryError::ServiceNotFound)?;
        tracing::trace!(order = ?service_order, "Matched control service");

        let (characteristic_order, characteristic) =
            resolve_first(&WRITE_CHARACTERISTIC.candidates(service_order), |uuid| {
                service.characteristic(uuid)
            })
            .ok_or(DiscoveryError::CharacteristicNotFound)?;
        tracing::trace!(order = ?characteristic_order, "Matched write characteristic");

        self.write_handle = Some(characteristic.handle);
        self.handles_ready = characteristic.handle != 0;
        self.phase = DiscoveryPhase::Established {
            ready: self.handles_ready,
        };

        if !self.handles_ready {
            return Err(DiscoveryError::NullHandle);
        }

        let resolved = ResolvedHandle {
            handle: characteristic.handle,
            service_order,
            characteristic_order,
        };
        self.resolved = Some(resolved);
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::fake::{FakeGatt, FakeService};

    #[test]
    fn new_state_is_idle_and_not_ready() {
        let state = DiscoveryState::new();
        assert_eq!(state.phase(), DiscoveryPhase::Idle);
        assert!(!state.is_ready());
        assert_eq!(state.write_handle(), None);
    }

    #[test]
    fn resolves_big_endian() {
        let client = FakeGatt::snl660(ByteOrder::BigEndian, ByteOrder::BigEndian, 0x2A);
        let mut state = DiscoveryState::new();
        state.begin_search();
        assert_eq!(state.phase(), DiscoveryPhase::Searching);

        let resolved = state.complete(&client).unwrap();
        assert_eq!(resolved.handle, 0x2A);
        assert_eq!(resolved.service_order, ByteOrder::BigEndian);
        assert_eq!(resolved.characteristic_order, ByteOrder::BigEndian);
        assert!(state.is_ready());
        assert_eq!(state.phase(), DiscoveryPhase::Established { ready: true });
    }

    #[test]
    fn resolves_little_endian_to_same_handle() {
        let client = FakeGatt::snl660(ByteOrder::LittleEndian, ByteOrder::LittleEndian, 0x2A);
        let mut state = DiscoveryState::new();

        let resolved = state.complete(&client).unwrap();
        assert_eq!(resolved.handle, 0x2A);
        assert_eq!(resolved.service_order, ByteOrder::LittleEndian);
        assert_eq!(state.ready_handle(), Some(0x2A));
    }

    #[test]
    fn characteristic_falls_back_independently() {
        // Service matched big-endian, characteristic only present little-endian
        let client = FakeGatt::snl660(ByteOrder::BigEndian, ByteOrder::LittleEndian, 0x10);
        let mut state = DiscoveryState::new();

        let resolved = state.complete(&client).unwrap();
        assert_eq!(resolved.service_order, ByteOrder::BigEndian);
        assert_eq!(resolved.characteristic_order, ByteOrder::LittleEndian);
    }

    #[test]
    fn missing_service_degrades() {
        let client = FakeGatt {
            connected: true,
            ..FakeGatt::default()
        };
        let mut state = DiscoveryState::new();

        assert_eq!(state.complete(&client), Err(DiscoveryError::ServiceNotFound));
        assert!(!state.is_ready());
        assert_eq!(state.phase(), DiscoveryPhase::Established { ready: false });
    }

    #[test]
    fn missing_characteristic_degrades() {
        let client = FakeGatt {
            connected: true,
            services: vec![(SERVICE.get(ByteOrder::BigEndian), FakeService::default())],
            ..FakeGatt::default()
        };
        let mut state = DiscoveryState::new();

        assert_eq!(
            state.complete(&client),
            Err(DiscoveryError::CharacteristicNotFound)
        );
        assert!(!state.is_ready());
    }

    #[test]
    fn null_handle_is_not_ready() {
        let client = FakeGatt::snl660(ByteOrder::BigEndian, ByteOrder::BigEndian, 0);
        let mut state = DiscoveryState::new();

        assert_eq!(state.complete(&client), Err(DiscoveryError::NullHandle));
        assert!(!state.is_ready());
        assert_eq!(state.ready_handle(), None);
    }

    #[test]
    fn failed_rediscovery_drops_previous_handle() {
        let mut state = DiscoveryState::new();
        state
            .complete(&FakeGatt::snl660(ByteOrder::BigEndian, ByteOrder::BigEndian, 7))
            .unwrap();
        assert!(state.is_ready());

        let empty = FakeGatt::default();
        assert!(state.complete(&empty).is_err());
        assert!(!state.is_ready());
        assert_eq!(state.write_handle(), None);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = DiscoveryState::new();
        state
            .complete(&FakeGatt::snl660(ByteOrder::BigEndian, ByteOrder::BigEndian, 7))
            .unwrap();

        state.reset();
        state.reset();
        assert_eq!(state, DiscoveryState::new());
        assert!(!state.is_ready());
    }

    #[test]
    fn resolve_first_prefers_earlier_candidate() {
        let both = |_: &Uuid| Some(());
        let found = resolve_first(&SERVICE.candidates(ByteOrder::LittleEndian), both);
        assert_eq!(found, Some((ByteOrder::LittleEndian, ())));

        let none = resolve_first(&SERVICE.candidates(ByteOrder::BigEndian), |_| None::<()>);
        assert_eq!(none, None);
    }
}
