// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seams to the host BLE stack.
//!
//! The driver never connects, negotiates MTU or dispatches GATT events
//! itself. The host implements [`GattClient`] on top of whatever stack it
//! runs and forwards connection events to the driver.

use uuid::Uuid;

use crate::error::TransportError;

/// A discovered characteristic and its attribute handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Characteristic {
    /// Characteristic UUID as reported by the stack.
    pub uuid: Uuid,
    /// Attribute handle, valid for the current connection only.
    pub handle: u16,
}

/// A service from the connected peer's attribute table.
pub trait GattService {
    /// Looks up a characteristic by UUID.
    fn characteristic(&self, uuid: &Uuid) -> Option<Characteristic>;
}

/// An already-connected GATT client link.
pub trait GattClient {
    /// Service handle type returned by [`GattClient::service`].
    type Service: GattService;

    /// Returns `true` while the link is up.
    fn is_connected(&self) -> bool;

    /// Looks up a service in the attribute table of the current connection.
    fn service(&self, uuid: &Uuid) -> Option<Self::Service>;

    /// Issues an unacknowledged write to `handle`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the stack refuses to queue the write.
    fn write_without_response(&mut self, handle: u16, data: &[u8]) -> Result<(), TransportError>;
}
