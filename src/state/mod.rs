// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracking and change detection.
//!
//! The host hands over desired values through [`LightValues`]. They are
//! converted to device units as a [`TargetState`] and diffed against the
//! [`AppliedLightState`] to decide which packets to send.
//!
//! # Examples
//!
//! ```
//! use neewer_snl660::command::LightCommand;
//! use neewer_snl660::state::{AppliedLightState, DesiredState, TargetState};
//! use neewer_snl660::types::PowerState;
//!
//! let mut applied = AppliedLightState::new();
//! applied.record(&LightCommand::Power(PowerState::On));
//!
//! // Turning off only ever sends the power packet
//! let pending = applied.pending(&TargetState::from_values(&DesiredState::off()));
//! assert_eq!(pending, vec![LightCommand::Power(PowerState::Off)]);
//! ```

mod applied_state;
mod desired_state;

pub use applied_state::AppliedLightState;
pub use desired_state::{DesiredState, LightValues, TargetState};
