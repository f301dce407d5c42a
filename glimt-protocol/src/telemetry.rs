//! Telemetry record codec
//!
//! One sample per tick: a wrapping sequence number and a temperature.
//! Encoded layout is byte 0 = sequence, bytes 1..5 = temperature as a
//! little-endian IEEE-754 f32. Both sides of the bus commit to this byte
//! order; it is part of the wire contract, not inferred from the host.

use crate::frame::{Frame, FrameError, MAX_FRAME_DATA};

/// Identifier of the telemetry frame
pub const TELEMETRY_FRAME_ID: u16 = 0x245;

/// Encoded length: sequence byte plus f32 temperature
pub const TELEMETRY_FRAME_LEN: usize = 1 + core::mem::size_of::<f32>();

// The record must fit a classic-format frame. Checked here so a future
// field addition fails the build instead of failing encode at runtime.
const _: () = assert!(TELEMETRY_FRAME_LEN <= MAX_FRAME_DATA);

/// A single telemetry sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryRecord {
    /// Sample index, wraps at 256
    pub sequence: u8,
    /// Measured temperature in degrees Celsius
    pub temperature_c: f32,
}

impl TelemetryRecord {
    /// Encode this record into a telemetry frame
    ///
    /// # Errors
    /// [`FrameError::PayloadTooLarge`] if the record layout no longer fits
    /// the frame capacity. With the current fixed layout this cannot
    /// happen (see the compile-time check above), but the guard stays for
    /// when the layout grows.
    pub fn encode(&self) -> Result<Frame, FrameError> {
        let mut payload = [0u8; TELEMETRY_FRAME_LEN];
        payload[0] = self.sequence;
        payload[1..].copy_from_slice(&self.temperature_c.to_le_bytes());

        Frame::new(TELEMETRY_FRAME_ID, &payload)
    }

    /// Decode a record from a telemetry frame
    ///
    /// # Errors
    /// - [`FrameError::UnexpectedId`] if the frame is not a telemetry frame
    /// - [`FrameError::Truncated`] if the payload is shorter than 5 bytes
    pub fn decode(frame: &Frame) -> Result<Self, FrameError> {
        if frame.id() != TELEMETRY_FRAME_ID {
            return Err(FrameError::UnexpectedId);
        }

        let data = frame.data();
        if data.len() < TELEMETRY_FRAME_LEN {
            return Err(FrameError::Truncated { len: data.len() });
        }

        let mut temp_bytes = [0u8; 4];
        temp_bytes.copy_from_slice(&data[1..TELEMETRY_FRAME_LEN]);

        Ok(Self {
            sequence: data[0],
            temperature_c: f32::from_le_bytes(temp_bytes),
        })
    }
}
