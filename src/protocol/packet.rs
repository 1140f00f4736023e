// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SNL-660 write frame.
//!
//! Every command is a fixed five-byte frame:
//!
//! ```text
//! +------+--------+------+-------+----------+
//! | 0x78 | prefix | 0x01 | value | checksum |
//! +------+--------+------+-------+----------+
//! ```
//!
//! The checksum is the low byte of the sum of the first four bytes. The
//! panel never answers, so there is no response frame.

use std::fmt;

use crate::error::ParseError;

/// First byte of every frame.
pub const HEADER: u8 = 0x78;

/// Third byte of every frame; the payload is always one byte long.
pub const PAYLOAD_LEN_MARKER: u8 = 0x01;

const FRAME_LEN: usize = 5;

/// Command selector carried in the second byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandPrefix {
    /// Power on/off.
    Power = 0x81,
    /// Brightness percentage.
    Brightness = 0x82,
    /// Color temperature code.
    ColorTemperature = 0x83,
}

impl CommandPrefix {
    /// Returns the prefix byte.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CommandPrefix {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x81 => Ok(Self::Power),
            0x82 => Ok(Self::Brightness),
            0x83 => Ok(Self::ColorTemperature),
            other => Err(ParseError::UnknownPrefix(other)),
        }
    }
}

/// A checksummed five-byte command frame.
///
/// # Examples
///
/// ```
/// use neewer_snl660::protocol::{CommandPrefix, Packet};
///
/// let packet = Packet::new(CommandPrefix::Brightness, 73);
/// assert_eq!(packet.as_bytes(), &[0x78, 0x82, 0x01, 0x49, 0x44]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Packet([u8; FRAME_LEN]);

impl Packet {
    /// Frame length in bytes.
    pub const LEN: usize = FRAME_LEN;

    /// Builds a frame for the given command and value byte.
    #[must_use]
    pub const fn new(prefix: CommandPrefix, value: u8) -> Self {
        let head = [HEADER, prefix.as_u8(), PAYLOAD_LEN_MARKER, value];
        Self([head[0], head[1], head[2], head[3], checksum(&head)])
    }

    /// Decodes a captured frame, validating every fixed field.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first field that does not
    /// match the frame layout.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let frame: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| ParseError::InvalidLength(bytes.len()))?;

        if frame[0] != HEADER {
            return Err(ParseError::InvalidHeader(frame[0]));
        }
        CommandPrefix::try_from(frame[1])?;
        if frame[2] != PAYLOAD_LEN_MARKER {
            return Err(ParseError::InvalidMarker(frame[2]));
        }

        let expected = checksum(&[frame[0], frame[1], frame[2], frame[3]]);
        if frame[4] != expected {
            return Err(ParseError::ChecksumMismatch {
                expected,
                actual: frame[4],
            });
        }

        Ok(Self(frame))
    }

    /// Returns the raw frame.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Returns the command prefix.
    #[must_use]
    pub fn prefix(&self) -> CommandPrefix {
        match self.0[1] {
            0x81 => CommandPrefix::Power,
            0x82 => CommandPrefix::Brightness,
            _ => CommandPrefix::ColorTemperature,
        }
    }

    /// Returns the value byte.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0[3]
    }

    /// Returns the trailing checksum byte.
    #[must_use]
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Packet> for [u8; FRAME_LEN] {
    fn from(packet: Packet) -> Self {
        packet.0
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{a:02X} {b:02X} {c:02X} {d:02X} {e:02X}")
    }
}

/// Low byte of the sum of the four leading bytes.
#[must_use]
pub const fn checksum(head: &[u8; 4]) -> u8 {
    head[0]
        .wrapping_add(head[1])
        .wrapping_add(head[2])
        .wrapping_add(head[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_frame() {
        let packet = Packet::new(CommandPrefix::Power, 0x01);
        assert_eq!(packet.as_bytes(), &[0x78, 0x81, 0x01, 0x01, 0xFB]);
    }

    #[test]
    fn color_temperature_frame() {
        let packet = Packet::new(CommandPrefix::ColorTemperature, 40);
        assert_eq!(packet.as_bytes(), &[0x78, 0x83, 0x01, 0x28, 0x24]);
    }

    #[test]
    fn checksum_law_holds_for_every_value() {
        for prefix in [
            CommandPrefix::Power,
            CommandPrefix::Brightness,
            CommandPrefix::ColorTemperature,
        ] {
            for value in 0..=u8::MAX {
                let b = Packet::new(prefix, value).0;
                let sum = u32::from(b[0]) + u32::from(b[1]) + u32::from(b[2]) + u32::from(b[3]);
                assert_eq!(u32::from(b[4]), sum & 0xFF);
            }
        }
    }

    #[test]
    fn parse_accepts_valid_frame() {
        let packet = Packet::parse(&[0x78, 0x82, 0x01, 0x32, 0x2D]).unwrap();
        assert_eq!(packet.prefix(), CommandPrefix::Brightness);
        assert_eq!(packet.value(), 50);
    }

    #[test]
    fn parse_rejects_bad_frames() {
        assert_eq!(
            Packet::parse(&[0x78, 0x81, 0x01]),
            Err(ParseError::InvalidLength(3))
        );
        assert_eq!(
            Packet::parse(&[0x79, 0x81, 0x01, 0x01, 0xFC]),
            Err(ParseError::InvalidHeader(0x79))
        );
        assert_eq!(
            Packet::parse(&[0x78, 0x84, 0x01, 0x01, 0xFE]),
            Err(ParseError::UnknownPrefix(0x84))
        );
        assert_eq!(
            Packet::parse(&[0x78, 0x81, 0x02, 0x01, 0xFC]),
            Err(ParseError::InvalidMarker(0x02))
        );
        assert_eq!(
            Packet::parse(&[0x78, 0x81, 0x01, 0x01, 0xFA]),
            Err(ParseError::ChecksumMismatch {
                expected: 0xFB,
                actual: 0xFA
            })
        );
    }

    #[test]
    fn display_as_hex() {
        let packet = Packet::new(CommandPrefix::Power, 0x02);
        assert_eq!(packet.to_string(), "78 81 01 02 FC");
    }
}
