// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the SNL-660 driver.
//!
//! None of the conditions below is fatal. Every failure degrades to "skip
//! this update" or "stay not-ready until the next discovery cycle", and
//! [`Error::is_recoverable`] reports that to callers that want to branch on it.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A captured frame could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Service or characteristic discovery did not yield a usable handle.
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// The transport rejected a write.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Driver configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// No transport has been installed with `set_transport` yet.
    #[error("no BLE transport installed")]
    NoTransport,

    /// The transport reports that the link is down.
    #[error("BLE link is not connected")]
    NotConnected,

    /// Discovery has not produced a write handle for the current connection.
    #[error("write handle not ready")]
    HandlesNotReady,
}

impl Error {
    /// Returns `true` if the driver can make progress again later.
    ///
    /// Skipped updates recover on the next state change, discovery failures
    /// on the next connection. Only a malformed configuration needs the host
    /// to intervene.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }

    /// Returns `true` if the update was skipped before anything was written.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::NoTransport | Self::NotConnected | Self::HandlesNotReady
        )
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },
}

/// Errors raised while decoding a captured SNL-660 frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Frame is not exactly five bytes.
    #[error("expected 5 bytes, got {0}")]
    InvalidLength(usize),

    /// First byte is not the `0x78` frame header.
    #[error("invalid header byte {0:#04x}")]
    InvalidHeader(u8),

    /// Third byte is not the `0x01` payload length marker.
    #[error("invalid length marker {0:#04x}")]
    InvalidMarker(u8),

    /// Command prefix is not one of the known commands.
    #[error("unknown command prefix {0:#04x}")]
    UnknownPrefix(u8),

    /// Trailing checksum does not match the frame contents.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed from the first four bytes.
        expected: u8,
        /// Checksum carried by the frame.
        actual: u8,
    },
}

/// Reasons a search-complete event left the driver without a write handle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Neither byte order of the service UUID is present.
    #[error("light control service not found")]
    ServiceNotFound,

    /// The service exists but carries no write characteristic in either order.
    #[error("write characteristic not found")]
    CharacteristicNotFound,

    /// The characteristic reported attribute handle 0.
    #[error("write characteristic has a null handle")]
    NullHandle,
}

/// Errors reported by the BLE transport when issuing a write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The link dropped before the write was queued.
    #[error("link is not connected")]
    NotConnected,

    /// The controller could not accept another write right now.
    #[error("link is busy")]
    Busy,

    /// The handle does not address a writable attribute.
    #[error("invalid attribute handle {0:#06x}")]
    InvalidHandle(u16),

    /// Stack-specific failure.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
