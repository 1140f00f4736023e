// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `neewer_snl660` - A driver core for the Neewer SNL-660 bi-color LED panel.
//!
//! The panel is controlled over Bluetooth Low Energy by writing short
//! checksummed frames to a single vendor characteristic. This crate holds
//! everything between a host's light entity and its BLE stack:
//!
//! - **Discovery**: locating the write characteristic after connect, in
//!   either UUID byte order
//! - **Encoding**: turning on/off, brightness and color temperature into
//!   five-byte frames
//! - **Change filtering**: only writing the dimensions that actually changed
//!
//! Scanning, connecting and event dispatch stay with the host. It implements
//! [`GattClient`](protocol::GattClient) for its link and forwards
//! [`ConnectionEvent`](event::ConnectionEvent)s.
//!
//! # Quick Start
//!
//! ```
//! use neewer_snl660::protocol::uuids::{SERVICE, WRITE_CHARACTERISTIC, ByteOrder};
//! use neewer_snl660::protocol::{Characteristic, GattClient, GattService};
//! use neewer_snl660::error::TransportError;
//! use neewer_snl660::event::ConnectionEvent;
//! use neewer_snl660::state::DesiredState;
//! use neewer_snl660::{DriverConfig, Snl660Light, Uuid};
//!
//! // A stand-in for the host's BLE link
//! struct Link {
//!     writes: Vec<Vec<u8>>,
//! }
//!
//! struct ControlService;
//!
//! impl GattService for ControlService {
//!     fn characteristic(&self, uuid: &Uuid) -> Option<Characteristic> {
//!         (*uuid == WRITE_CHARACTERISTIC.get(ByteOrder::BigEndian))
//!             .then_some(Characteristic { uuid: *uuid, handle: 0x002A })
//!     }
//! }
//!
//! impl GattClient for Link {
//!     type Service = ControlService;
//!
//!     fn is_connected(&self) -> bool {
//!         true
//!     }
//!
//!     fn service(&self, uuid: &Uuid) -> Option<ControlService> {
//!         (*uuid == SERVICE.get(ByteOrder::BigEndian)).then_some(ControlService)
//!     }
//!
//!     fn write_without_response(&mut self, _handle: u16, data: &[u8]) -> Result<(), TransportError> {
//!         self.writes.push(data.to_vec());
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> neewer_snl660::Result<()> {
//! let mut light = Snl660Light::with_transport(DriverConfig::default(), Link { writes: Vec::new() });
//! light.on_connection_event(ConnectionEvent::ServiceSearchComplete)?;
//! assert!(light.is_ready());
//!
//! // 73% at 4000K: power, brightness and color temperature go out once
//! let desired = DesiredState::on().with_brightness(0.73).with_kelvin(4000.0);
//! assert_eq!(light.apply_state(&desired)?.sent().len(), 3);
//!
//! // Unchanged state writes nothing
//! assert!(light.apply_state(&desired)?.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`DriverConfig`] can be built in code or parsed from JSON:
//!
//! ```
//! use neewer_snl660::{DriverConfig, WritePolicy};
//!
//! let config = DriverConfig::from_json(r#"{
//!     "name": "desk_panel",
//!     "write_policy": "retry_on_next_update"
//! }"#)?;
//! assert_eq!(config.write_policy, WritePolicy::RetryOnNextUpdate);
//! # Ok::<(), neewer_snl660::Error>(())
//! ```

mod capabilities;
pub mod command;
mod config;
mod device;
pub mod discovery;
pub mod error;
pub mod event;
pub mod protocol;
pub mod state;
pub mod types;

pub use capabilities::{Capabilities, ColorMode};
pub use command::LightCommand;
pub use config::{DriverConfig, WritePolicy};
pub use device::{ApplyReport, FailedWrite, Snl660Light};
pub use error::{DiscoveryError, Error, ParseError, Result, TransportError, ValueError};
pub use event::ConnectionEvent;
pub use protocol::{GattClient, GattService, Packet};
pub use state::{DesiredState, LightValues};
pub use types::{Brightness, ColorTempCode, PowerState};
pub use uuid::Uuid;
