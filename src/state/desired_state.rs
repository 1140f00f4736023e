// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired light state as handed over by the host.

use serde::{Deserialize, Serialize};

use crate::types::{Brightness, ColorTempCode, PowerState};

/// Snapshot of the host light abstraction's current values.
///
/// Hosts usually implement this on their own light-state type; [`DesiredState`]
/// is a plain implementation for callers that have none.
pub trait LightValues {
    /// Whether the light should be lit.
    fn is_on(&self) -> bool;

    /// Brightness as a fraction in `[0.0, 1.0]`.
    fn brightness(&self) -> f32;

    /// Color temperature in mireds.
    fn color_temperature(&self) -> f32;
}

/// Owned light values in host units.
///
/// # Examples
///
/// ```
/// use neewer_snl660::state::{DesiredState, LightValues};
///
/// let desired = DesiredState::on().with_brightness(0.73).with_mireds(250.0);
/// assert!(desired.is_on());
/// assert_eq!(desired.color_temperature(), 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesiredState {
    /// Whether the light should be lit.
    pub on: bool,
    /// Brightness fraction in `[0.0, 1.0]`.
    pub brightness: f32,
    /// Color temperature in mireds.
    pub mireds: f32,
}

impl DesiredState {
    /// Neutral white (4000K) used until the host sets a temperature.
    pub const DEFAULT_MIREDS: f32 = 250.0;

    /// Full brightness, neutral white, lit.
    #[must_use]
    pub const fn on() -> Self {
        Self {
            on: true,
            brightness: 1.0,
            mireds: Self::DEFAULT_MIREDS,
        }
    }

    /// Full brightness, neutral white, dark.
    #[must_use]
    pub const fn off() -> Self {
        Self {
            on: false,
            ..Self::on()
        }
    }

    /// Sets the brightness fraction.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Sets the color temperature in mireds.
    #[must_use]
    pub const fn with_mireds(mut self, mireds: f32) -> Self {
        self.mireds = mireds;
        self
    }

    /// Sets the color temperature in Kelvin.
    #[must_use]
    pub fn with_kelvin(mut self, kelvin: f32) -> Self {
        self.mireds = 1_000_000.0 / kelvin;
        self
    }
}

impl Default for DesiredState {
    fn default() -> Self {
        Self::off()
    }
}

impl LightValues for DesiredState {
    fn is_on(&self) -> bool {
        self.on
    }

    fn brightness(&self) -> f32 {
        self.brightness
    }

    fn color_temperature(&self) -> f32 {
        self.mireds
    }
}

/// Desired state converted to device units.
///
/// Conversion is total: every input, including NaN and out-of-range
/// values, lands inside the protocol ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetState {
    /// Requested power state.
    pub power: PowerState,
    /// Requested brightness.
    pub brightness: Brightness,
    /// Requested color temperature.
    pub color_temp: ColorTempCode,
}

impl TargetState {
    /// Converts host light values to device units.
    #[must_use]
    pub fn from_values<V: LightValues + ?Sized>(values: &V) -> Self {
        Self {
            power: PowerState::from(values.is_on()),
            brightness: Brightness::from_fraction(values.brightness()),
            color_temp: ColorTempCode::from_mireds(values.color_temperature()),
        }
    }
}
