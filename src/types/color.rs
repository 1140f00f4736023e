// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature types.
//!
//! The host expresses color temperature in mireds; the panel takes Kelvin
//! divided by 100 in a single byte. [`ColorTempCode`] holds the device-side
//! value and owns the conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Device-native color temperature code (Kelvin / 100, 32-56).
///
/// The SNL-660 covers 3200K (warm) to 5600K (daylight).
///
/// # Examples
///
/// ```
/// use neewer_snl660::types::ColorTempCode;
///
/// // 250 mireds is 4000K
/// let ct = ColorTempCode::from_mireds(250.0);
/// assert_eq!(ct.value(), 40);
/// assert_eq!(ct.to_kelvin(), 4000);
///
/// // Degenerate mireds fall back to 4500K
/// assert_eq!(ColorTempCode::from_mireds(1.0).value(), 45);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorTempCode(u8);

impl ColorTempCode {
    /// Minimum code value (3200K).
    pub const MIN_CODE: u8 = 32;

    /// Maximum code value (5600K).
    pub const MAX_CODE: u8 = 56;

    /// Warmest supported temperature in Kelvin.
    pub const MIN_KELVIN: f32 = 3200.0;

    /// Coolest supported temperature in Kelvin.
    pub const MAX_KELVIN: f32 = 5600.0;

    /// Substituted when the mireds input cannot be inverted.
    pub const FALLBACK_KELVIN: f32 = 4500.0;

    /// Warmest setting (3200K).
    pub const WARM: Self = Self(Self::MIN_CODE);

    /// Neutral setting (4500K).
    pub const NEUTRAL: Self = Self(45);

    /// Daylight setting (5600K).
    pub const DAYLIGHT: Self = Self(Self::MAX_CODE);

    /// Creates a color temperature code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is outside [32, 56].
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if !(Self::MIN_CODE..=Self::MAX_CODE).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: u16::from(Self::MIN_CODE),
                max: u16::from(Self::MAX_CODE),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a code, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN_CODE {
            Self(Self::MIN_CODE)
        } else if value > Self::MAX_CODE {
            Self(Self::MAX_CODE)
        } else {
            Self(value)
        }
    }

    /// Converts a Kelvin temperature, clamping to 3200K-5600K first.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_kelvin(kelvin: f32) -> Self {
        let kelvin = if kelvin.is_nan() {
            Self::FALLBACK_KELVIN
        } else {
            kelvin.clamp(Self::MIN_KELVIN, Self::MAX_KELVIN)
        };
        let code = (kelvin / 100.0).round() as u8;
        Self::clamped(code)
    }

    /// Converts a reciprocal color temperature in mireds.
    ///
    /// Inputs of 1 mired or less (and NaN) cannot be meaningfully inverted,
    /// so they map to [`Self::FALLBACK_KELVIN`].
    #[must_use]
    pub fn from_mireds(mireds: f32) -> Self {
        let kelvin = if mireds > 1.0 {
            1_000_000.0 / mireds
        } else {
            Self::FALLBACK_KELVIN
        };
        Self::from_kelvin(kelvin)
    }

    /// Returns the raw code byte.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the temperature in Kelvin.
    #[must_use]
    pub fn to_kelvin(&self) -> u16 {
        u16::from(self.0) * 100
    }

    /// Returns the temperature in mireds, rounded to the nearest integer.
    #[must_use]
    pub fn to_mireds(&self) -> u16 {
        let kelvin = u32::from(self.to_kelvin());
        // At least 3200K, so mireds always fit
        u16::try_from((1_000_000 + kelvin / 2) / kelvin).unwrap_or(u16::MAX)
    }
}

impl Default for ColorTempCode {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTempCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.to_kelvin())
    }
}

impl TryFrom<u8> for ColorTempCode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorTempCode> for u8 {
    fn from(value: ColorTempCode) -> Self {
        value.0
    }
}
