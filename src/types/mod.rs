// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for SNL-660 light control.
//!
//! Each type holds a value that fits the single payload byte of its packet.
//! Strict constructors reject out-of-range input; the conversions used by the
//! encoder clamp instead, so encoding never fails.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`ColorTempCode`] - Color temperature as Kelvin / 100 (32-56)

mod color;
mod dimmer;
mod power;

pub use color::ColorTempCode;
pub use dimmer::Brightness;
pub use power::PowerState;
