// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level driver for one SNL-660 panel.
//!
//! [`Snl660Light`] ties discovery and the change filter to a host-supplied
//! [`GattClient`]. The host drives it from two places:
//!
//! - its BLE client callbacks, forwarded as [`ConnectionEvent`]s
//! - its light entity, which calls [`Snl660Light::apply_state`] whenever the
//!   desired state changes
//!
//! Both calls are synchronous and never block; writes are fire-and-forget.

mod report;

pub use report::{ApplyReport, FailedWrite};

use crate::capabilities::Capabilities;
use crate::config::DriverConfig;
use crate::discovery::DiscoveryState;
use crate::error::{Error, Result};
use crate::event::ConnectionEvent;
use crate::protocol::GattClient;
use crate::state::{AppliedLightState, LightValues, TargetState};

/// Driver for a Neewer SNL-660 light panel.
///
/// # Type Parameter
///
/// `C` is the host's GATT client for the link to this panel. The driver
/// owns it once installed with [`set_transport`](Self::set_transport).
///
/// # Examples
///
/// ```ignore
/// use neewer_snl660::{DriverConfig, Snl660Light};
/// use neewer_snl660::event::ConnectionEvent;
/// use neewer_snl660::state::DesiredState;
///
/// let mut light = Snl660Light::new(DriverConfig::default());
/// light.set_transport(my_gatt_client);
///
/// // From the BLE client callbacks
/// light.on_connection_event(ConnectionEvent::Connected)?;
/// light.on_connection_event(ConnectionEvent::ServiceSearchComplete)?;
///
/// // From the light entity
/// let report = light.apply_state(&DesiredState::on().with_brightness(0.5))?;
/// assert_eq!(report.sent().len(), 3);
/// ```
#[derive(Debug)]
pub struct Snl660Light<C> {
    config: DriverConfig,
    client: Option<C>,
    discovery: DiscoveryState,
    applied: AppliedLightState,
}

impl<C: GattClient> Snl660Light<C> {
    /// Creates a driver with no transport installed.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            client: None,
            discovery: DiscoveryState::new(),
            applied: AppliedLightState::new(),
        }
    }

    /// Creates a driver with a transport already installed.
    #[must_use]
    pub fn with_transport(config: DriverConfig, client: C) -> Self {
        let mut light = Self::new(config);
        light.client = Some(client);
        light
    }

    /// Installs the transport for this panel, returning the previous one.
    ///
    /// Handles belong to a connection, so replacing the transport discards
    /// the cached handle and the filter memory.
    pub fn set_transport(&mut self, client: C) -> Option<C> {
        self.reset_link_state();
        tracing::debug!(device = %self.config.name, "Transport installed");
        self.client.replace(client)
    }

    /// Removes and returns the transport.
    pub fn take_transport(&mut self) -> Option<C> {
        self.reset_link_state();
        self.client.take()
    }

    /// Returns the installed transport.
    #[must_use]
    pub fn transport(&self) -> Option<&C> {
        self.client.as_ref()
    }

    /// Returns the installed transport mutably.
    #[must_use]
    pub fn transport_mut(&mut self) -> Option<&mut C> {
        self.client.as_mut()
    }

    /// Returns the driver configuration.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the capability descriptor for the host light entity.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::snl660()
    }

    /// Returns `true` if a write handle is cached for the current link.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.discovery.is_ready()
    }

    /// Returns the discovery state.
    #[must_use]
    pub fn discovery(&self) -> &DiscoveryState {
        &self.discovery
    }

    /// Returns the last state written to the panel.
    #[must_use]
    pub fn applied_state(&self) -> &AppliedLightState {
        &self.applied
    }

    /// Handles a connection lifecycle event from the host BLE stack.
    ///
    /// # Errors
    ///
    /// Returns `Error::Discovery` if service search completed without a
    /// usable write handle, and `Error::NoTransport` if search completed
    /// before a transport was installed. Both leave the driver not ready
    /// until the next successful discovery.
    pub fn on_connection_event(&mut self, event: ConnectionEvent) -> Result<()> {
        tracing::debug!(device = %self.config.name, event = %event, "Connection event");

        match event {
            ConnectionEvent::Connected => {
                self.discovery.begin_search();
                Ok(())
            }
            ConnectionEvent::Disconnected | ConnectionEvent::Closed => {
                self.reset_link_state();
                tracing::warn!(device = %self.config.name, "BLE disconnected (handles cleared)");
                Ok(())
            }
            ConnectionEvent::ServiceSearchComplete => self.discover(),
        }
    }

    /// Writes whatever part of `desired` differs from the last applied state.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoTransport`, `Error::NotConnected` or
    /// `Error::HandlesNotReady` if the update was skipped. Nothing is written
    /// and the filter is untouched in that case. Transport failures of
    /// individual writes are not errors; they are listed in the report.
    pub fn apply_state<V: LightValues + ?Sized>(&mut self, desired: &V) -> Result<ApplyReport> {
        let name = &self.config.name;

        let Some(client) = self.client.as_mut() else {
            tracing::warn!(device = %name, "No BLE transport; skipping update");
            return Err(Error::NoTransport);
        };
        if !client.is_connected() {
            tracing::warn!(device = %name, "BLE not connected; skipping update");
            return Err(Error::NotConnected);
        }
        let Some(handle) = self.discovery.ready_handle() else {
            tracing::warn!(device = %name, "Write handle not ready yet; skipping update");
            return Err(Error::HandlesNotReady);
        };

        let target = TargetState::from_values(desired);
        let mut report = ApplyReport::default();

        for command in self.applied.pending(&target) {
            let packet = command.to_packet();
            match client.write_without_response(handle, packet.as_bytes()) {
                Ok(()) => {
                    tracing::debug!(device = %name, %command, %packet, "Sent packet");
                    self.applied.record(&command);
                    report.push_sent(packet);
                }
                Err(error) => {
                    tracing::warn!(device = %name, %command, error = %error, "Write failed");
                    if self.config.write_policy.records_failed_writes() {
                        self.applied.record(&command);
                    }
                    report.push_failed(packet, error);
                }
            }
        }

        Ok(report)
    }

    fn discover(&mut self) -> Result<()> {
        let name = &self.config.name;
        let Some(client) = self.client.as_ref() else {
            tracing::debug!(device = %name, "Service search completed without transport");
            return Err(Error::NoTransport);
        };

        match self.discovery.complete(client) {
            Ok(resolved) => {
                tracing::info!(
                    device = %name,
                    handle = %format!("{:#06x}", resolved.handle),
                    service_order = ?resolved.service_order,
                    characteristic_order = ?resolved.characteristic_order,
                    "Cached write handle"
                );
                Ok(())
            }
            Err(error) => {
                tracing::warn!(device = %name, error = %error, "Discovery failed");
                Err(error.into())
            }
        }
    }

    /// Forgets everything tied to the current link.
    fn reset_link_state(&mut self) {
        self.discovery.reset();
        self.applied.reset();
    }
}
