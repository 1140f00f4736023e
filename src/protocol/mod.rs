// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-facing protocol definitions.
//!
//! - [`Packet`]: the five-byte checksummed write frame
//! - [`uuids`]: service and characteristic identities in both byte orders
//! - [`GattClient`] / [`GattService`]: the transport seam the host implements

mod gatt;
mod packet;
pub mod uuids;

pub use gatt::{Characteristic, GattClient, GattService};
pub use packet::{CommandPrefix, HEADER, PAYLOAD_LEN_MARKER, Packet, checksum};

#[cfg(test)]
pub(crate) use gatt::fake;
