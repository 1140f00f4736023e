// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state of the light panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Represents the power state of the panel.
///
/// The SNL-660 has no toggle command; the host always sends the absolute
/// state it wants.
///
/// # Examples
///
/// ```
/// use neewer_snl660::types::PowerState;
///
/// assert_eq!(PowerState::On.wire_value(), 0x01);
/// assert_eq!(PowerState::Off.wire_value(), 0x02);
/// assert_eq!(PowerState::from(true), PowerState::On);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// Panel is dark.
    #[default]
    Off,
    /// Panel is lit.
    On,
}

impl PowerState {
    /// Returns the display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns the value byte carried by a power packet.
    #[must_use]
    pub const fn wire_value(&self) -> u8 {
        match self {
            Self::On => 0x01,
            Self::Off => 0x02,
        }
    }

    /// Decodes the value byte of a power packet.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for anything but `0x01` or `0x02`.
    pub const fn from_wire(value: u8) -> Result<Self, ValueError> {
        match value {
            0x01 => Ok(Self::On),
            0x02 => Ok(Self::Off),
            other => Err(ValueError::OutOfRange {
                min: 0x01,
                max: 0x02,
                actual: other as u16,
            }),
        }
    }

    /// Returns `true` if the state is [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" | "0" | "FALSE" => Ok(Self::Off),
            "ON" | "1" | "TRUE" => Ok(Self::On),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: 1,
                actual: u16::MAX,
            }),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(value: PowerState) -> Self {
        value.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_wire_values() {
        assert_eq!(PowerState::On.wire_value(), 0x01);
        assert_eq!(PowerState::Off.wire_value(), 0x02);
    }

    #[test]
    fn power_state_from_wire() {
        assert_eq!(PowerState::from_wire(0x01).unwrap(), PowerState::On);
        assert_eq!(PowerState::from_wire(0x02).unwrap(), PowerState::Off);
        assert!(PowerState::from_wire(0x00).is_err());
        assert!(PowerState::from_wire(0x03).is_err());
    }

    #[test]
    fn power_state_from_str() {
        assert_eq!("ON".parse::<PowerState>().unwrap(), PowerState::On);
        assert_eq!("off".parse::<PowerState>().unwrap(), PowerState::Off);
        assert_eq!("true".parse::<PowerState>().unwrap(), PowerState::On);
        assert!("toggle".parse::<PowerState>().is_err());
    }

    #[test]
    fn power_state_from_bool() {
        assert_eq!(PowerState::from(true), PowerState::On);
        assert_eq!(PowerState::from(false), PowerState::Off);
        assert!(bool::from(PowerState::On));
    }

    #[test]
    fn power_state_default_is_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
    }
}
