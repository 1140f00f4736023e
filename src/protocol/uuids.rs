// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GATT identities of the SNL-660 control service.
//!
//! BLE stacks disagree on whether 128-bit UUIDs are stored as declared or
//! byte-reversed, so each identity is kept in both orders and discovery
//! tries them in turn.

use uuid::Uuid;

/// Byte order in which a UUID was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// As declared (`69400001-...`).
    BigEndian,
    /// All sixteen bytes reversed.
    LittleEndian,
}

impl ByteOrder {
    /// Returns the opposite byte order.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::BigEndian => Self::LittleEndian,
            Self::LittleEndian => Self::BigEndian,
        }
    }
}

/// One logical UUID in both byte orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UuidPair {
    big_endian: Uuid,
    little_endian: Uuid,
}

impl UuidPair {
    /// Builds the pair from the declared (big-endian) value.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            big_endian: Uuid::from_u128(value),
            little_endian: Uuid::from_u128(value.swap_bytes()),
        }
    }

    /// Returns the UUID in the requested byte order.
    #[must_use]
    pub const fn get(&self, order: ByteOrder) -> Uuid {
        match order {
            ByteOrder::BigEndian => self.big_endian,
            ByteOrder::LittleEndian => self.little_endian,
        }
    }

    /// Returns both encodings, `preferred` first.
    #[must_use]
    pub const fn candidates(&self, preferred: ByteOrder) -> [(ByteOrder, Uuid); 2] {
        let fallback = preferred.other();
        [
            (preferred, self.get(preferred)),
            (fallback, self.get(fallback)),
        ]
    }
}

/// Light control service.
pub const SERVICE: UuidPair = UuidPair::from_u128(0x6940_0001_b5a3_f393_e0a9_e50e_24dc_ca99);

/// Write-without-response command characteristic.
pub const WRITE_CHARACTERISTIC: UuidPair =
    UuidPair::from_u128(0x6940_0002_b5a3_f393_e0a9_e50e_24dc_ca99);
