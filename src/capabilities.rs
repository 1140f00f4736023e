// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability descriptor advertised to the host light abstraction.
//!
//! The SNL-660 is a bi-color panel: it can be switched, dimmed and tuned
//! between 3200K and 5600K. Hosts that model lights by color mode see it as
//! a color-temperature light; hosts that work in mireds get the range as
//! 179-313.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::ColorTempCode;

/// A control dimension a light can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Switchable only.
    OnOff,
    /// Switchable and dimmable.
    Brightness,
    /// Dimmable white with adjustable color temperature.
    ColorTemperature,
}

/// Capabilities of the driven light.
///
/// # Examples
///
/// ```
/// use neewer_snl660::{Capabilities, ColorMode};
///
/// let caps = Capabilities::snl660();
/// assert_eq!(caps.supported_color_modes(), &[ColorMode::ColorTemperature]);
/// assert_eq!(caps.mireds_range(), 179..=313);
/// assert_eq!(caps.kelvin_range(), 3200..=5600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Supports brightness control.
    pub dimmer: bool,

    /// Supports color temperature (CCT) control.
    pub color_temp: bool,

    /// Coolest supported temperature in mireds.
    pub min_mireds: u16,

    /// Warmest supported temperature in mireds.
    pub max_mireds: u16,
}

impl Capabilities {
    /// Coolest temperature of the SNL-660 (~5600K).
    pub const SNL660_MIN_MIREDS: u16 = 179;

    /// Warmest temperature of the SNL-660 (~3200K).
    pub const SNL660_MAX_MIREDS: u16 = 313;

    /// Capabilities of the Neewer SNL-660.
    #[must_use]
    pub const fn snl660() -> Self {
        Self {
            dimmer: true,
            color_temp: true,
            min_mireds: Self::SNL660_MIN_MIREDS,
            max_mireds: Self::SNL660_MAX_MIREDS,
        }
    }

    /// Returns the color modes the host should offer.
    #[must_use]
    pub const fn supported_color_modes(&self) -> &'static [ColorMode] {
        if self.color_temp {
            &[ColorMode::ColorTemperature]
        } else if self.dimmer {
            &[ColorMode::Brightness]
        } else {
            &[ColorMode::OnOff]
        }
    }

    /// Returns whether color temperature can be set.
    #[must_use]
    pub const fn supports_color_temperature(&self) -> bool {
        self.color_temp
    }

    /// Returns the supported range in mireds.
    #[must_use]
    pub const fn mireds_range(&self) -> RangeInclusive<u16> {
        self.min_mireds..=self.max_mireds
    }

    /// Returns the device-native range in Kelvin.
    #[must_use]
    pub fn kelvin_range(&self) -> RangeInclusive<u16> {
        ColorTempCode::WARM.to_kelvin()..=ColorTempCode::DAYLIGHT.to_kelvin()
    }

    /// Returns the range of the color temperature value byte.
    #[must_use]
    pub const fn code_range(&self) -> RangeInclusive<u8> {
        ColorTempCode::MIN_CODE..=ColorTempCode::MAX_CODE
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::snl660()
    }
}
