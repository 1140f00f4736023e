// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Driver configuration.
//!
//! Protocol constants (UUIDs, frame layout) are fixed and not part of the
//! configuration. What the host can choose is how the driver identifies
//! itself in logs and how it treats failed writes.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How the change filter treats a write the transport rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Remember the value as applied even if the write failed.
    ///
    /// An identical follow-up update sends nothing; the value only goes out
    /// again once it changes or the link is re-established.
    #[default]
    Optimistic,

    /// Only remember values the transport accepted.
    ///
    /// The next update re-sends any dimension whose last write failed. There
    /// is no timer: retries happen at the host's update cadence.
    RetryOnNextUpdate,
}

impl WritePolicy {
    /// Returns `true` if a failed write still updates the filter.
    #[must_use]
    pub const fn records_failed_writes(&self) -> bool {
        matches!(self, Self::Optimistic)
    }
}

/// Configuration for one SNL-660 driver instance.
///
/// # Examples
///
/// ```
/// use neewer_snl660::{DriverConfig, WritePolicy};
///
/// let config = DriverConfig::new()
///     .with_name("key_light")
///     .with_write_policy(WritePolicy::RetryOnNextUpdate);
/// assert_eq!(config.name, "key_light");
///
/// let parsed = DriverConfig::from_json(r#"{"name": "fill_light"}"#).unwrap();
/// assert_eq!(parsed.write_policy, WritePolicy::Optimistic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Name attached to every log record of this instance.
    pub name: String,
    /// Handling of rejected writes.
    pub write_policy: WritePolicy,
}

impl DriverConfig {
    /// Default instance name.
    pub const DEFAULT_NAME: &'static str = "neewer_snl660";

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instance name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the write policy.
    #[must_use]
    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the document is malformed or carries an
    /// unknown policy.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            write_policy: WritePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let config = DriverConfig::default();
        assert_eq!(config.name, "neewer_snl660");
        assert_eq!(config.write_policy, WritePolicy::Optimistic);
        assert!(config.write_policy.records_failed_writes());
    }

    #[test]
    fn from_json_full() {
        let config =
            DriverConfig::from_json(r#"{"name": "panel", "write_policy": "retry_on_next_update"}"#)
                .unwrap();
        assert_eq!(config.name, "panel");
        assert_eq!(config.write_policy, WritePolicy::RetryOnNextUpdate);
        assert!(!config.write_policy.records_failed_writes());
    }

    #[test]
    fn from_json_empty_uses_defaults() {
        assert_eq!(DriverConfig::from_json("{}").unwrap(), DriverConfig::default());
    }

    #[test]
    fn from_json_rejects_unknown_policy() {
        let err = DriverConfig::from_json(r#"{"write_policy": "pessimistic"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let config = DriverConfig::new()
            .with_name("a")
            .with_write_policy(WritePolicy::RetryOnNextUpdate);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DriverConfig::from_json(&json).unwrap(), config);
    }
}
