// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Change filter over the last state written to the panel.

use crate::command::LightCommand;
use crate::types::{Brightness, ColorTempCode, PowerState};

use super::TargetState;

/// Last state written to the panel.
///
/// The protocol has no acknowledgement, so "written" means a write was
/// attempted (or, under
/// [`WritePolicy::RetryOnNextUpdate`](crate::WritePolicy::RetryOnNextUpdate),
/// accepted by the transport). `None` means unknown and forces the next
/// write for that dimension.
///
/// # Examples
///
/// ```
/// use neewer_snl660::state::{AppliedLightState, DesiredState, TargetState};
///
/// let mut applied = AppliedLightState::new();
/// let target = TargetState::from_values(&DesiredState::on());
///
/// let pending = applied.pending(&target);
/// assert_eq!(pending.len(), 3);
/// for cmd in &pending {
///     applied.record(cmd);
/// }
/// assert!(applied.pending(&target).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedLightState {
    last_on: bool,
    last_brightness: Option<Brightness>,
    last_color_temp: Option<ColorTempCode>,
}

impl AppliedLightState {
    /// Creates the unknown state: off, brightness and temperature unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_on: false,
            last_brightness: None,
            last_color_temp: None,
        }
    }

    /// Returns the last power state written.
    #[must_use]
    pub const fn last_on(&self) -> bool {
        self.last_on
    }

    /// Returns the last brightness written, if known.
    #[must_use]
    pub const fn last_brightness(&self) -> Option<Brightness> {
        self.last_brightness
    }

    /// Returns the last color temperature written, if known.
    #[must_use]
    pub const fn last_color_temp(&self) -> Option<ColorTempCode> {
        self.last_color_temp
    }

    /// Returns `true` if nothing is known about the panel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::new()
    }

    /// Computes the commands needed to move the panel to `target`.
    ///
    /// Order is fixed: power, then brightness, then color temperature. While
    /// the target is off only a power change is emitted, and the brightness
    /// and temperature memory stay as they were so the next power-on
    /// re-sends whatever differs.
    #[must_use]
    pub fn pending(&self, target: &TargetState) -> Vec<LightCommand> {
        let mut commands = Vec::with_capacity(3);

        let on = target.power.is_on();
        if on != self.last_on {
            commands.push(LightCommand::Power(target.power));
        }
        if !on {
            tracing::trace!(commands = commands.len(), "Target is off, skipping dimmer and CCT");
            return commands;
        }

        if self.last_brightness != Some(target.brightness) {
            commands.push(LightCommand::Brightness(target.brightness));
        }
        if self.last_color_temp != Some(target.color_temp) {
            commands.push(LightCommand::ColorTemperature(target.color_temp));
        }

        tracing::trace!(commands = commands.len(), "Computed pending commands");
        commands
    }

    /// Marks a command as written.
    ///
    /// Returns `true` if the recorded state changed.
    pub fn record(&mut self, command: &LightCommand) -> bool {
        match *command {
            LightCommand::Power(state) => {
                let on = state.is_on();
                let changed = self.last_on != on;
                self.last_on = on;
                changed
            }
            LightCommand::Brightness(bri) => {
                self.last_brightness.replace(bri) != Some(bri)
            }
            LightCommand::ColorTemperature(ct) => {
                self.last_color_temp.replace(ct) != Some(ct)
            }
        }
    }

    /// Forgets everything; the next write for every dimension goes out.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the last power state as a [`PowerState`].
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.last_on)
    }
}
