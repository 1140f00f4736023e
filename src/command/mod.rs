// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SNL-660 command definitions.
//!
//! | Command | Prefix | Value |
//! |---------|--------|-------|
//! | [`LightCommand::Power`] | `0x81` | `0x01` on, `0x02` off |
//! | [`LightCommand::Brightness`] | `0x82` | percent, 0-100 |
//! | [`LightCommand::ColorTemperature`] | `0x83` | Kelvin / 100, 32-56 |
//!
//! # Examples
//!
//! ```
//! use neewer_snl660::command::LightCommand;
//! use neewer_snl660::types::PowerState;
//!
//! let cmd = LightCommand::Power(PowerState::On);
//! assert_eq!(cmd.to_packet().as_bytes(), &[0x78, 0x81, 0x01, 0x01, 0xFB]);
//! ```

use std::fmt;

use crate::error::Error;
use crate::protocol::{CommandPrefix, Packet};
use crate::types::{Brightness, ColorTempCode, PowerState};

/// A single command the panel understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightCommand {
    /// Switch the panel on or off.
    Power(PowerState),
    /// Set brightness.
    Brightness(Brightness),
    /// Set color temperature.
    ColorTemperature(ColorTempCode),
}

impl LightCommand {
    /// Returns the frame prefix for this command.
    #[must_use]
    pub const fn prefix(&self) -> CommandPrefix {
        match self {
            Self::Power(_) => CommandPrefix::Power,
            Self::Brightness(_) => CommandPrefix::Brightness,
            Self::ColorTemperature(_) => CommandPrefix::ColorTemperature,
        }
    }

    /// Returns the value byte for this command.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Power(state) => state.wire_value(),
            Self::Brightness(bri) => bri.value(),
            Self::ColorTemperature(ct) => ct.value(),
        }
    }

    /// Encodes the command as a wire frame.
    #[must_use]
    pub const fn to_packet(&self) -> Packet {
        Packet::new(self.prefix(), self.value())
    }

    /// Decodes a validated frame back into a command.
    ///
    /// # Errors
    ///
    /// Returns `Error::Value` if the value byte is outside the range of the
    /// frame's command.
    pub fn from_packet(packet: &Packet) -> Result<Self, Error> {
        let value = packet.value();
        let cmd = match packet.prefix() {
            CommandPrefix::Power => Self::Power(PowerState::from_wire(value)?),
            CommandPrefix::Brightness => Self::Brightness(Brightness::new(value)?),
            CommandPrefix::ColorTemperature => Self::ColorTemperature(ColorTempCode::new(value)?),
        };
        Ok(cmd)
    }
}

impl fmt::Display for LightCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(state) => write!(f, "power {state}"),
            Self::Brightness(bri) => write!(f, "brightness {bri}"),
            Self::ColorTemperature(ct) => write!(f, "color temperature {ct}"),
        }
    }
}

impl From<LightCommand> for Packet {
    fn from(cmd: LightCommand) -> Self {
        cmd.to_packet()
    }
}
