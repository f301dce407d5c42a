//! CAN telemetry protocol for the Glimt carrier board
//!
//! This crate defines the classic-format CAN frames the carrier board
//! sends on its periodic tick: a fixed heartbeat and a small telemetry
//! sample (sequence number plus temperature).
//!
//! # Wire layout
//!
//! Telemetry frame, identifier `0x245`:
//! ```text
//! ┌──────────┬──────────────────────────┐
//! │ SEQUENCE │ TEMPERATURE              │
//! │ 1B (u8)  │ 4B (IEEE-754 f32, LE)    │
//! └──────────┴──────────────────────────┘
//! ```
//!
//! Temperature bytes are **little-endian by contract**, independent of the
//! host platform; the receiver must decode them the same way. Frames are
//! pure values — transmission goes through the [`TransportPort`] boundary,
//! and transmit failures are counted, not retried (telemetry is
//! best-effort).

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod frame;
pub mod link;
pub mod telemetry;

pub use frame::{heartbeat_frame, Frame, FrameError, MAX_FRAME_DATA, MAX_STANDARD_ID};
pub use frame::{HEARTBEAT_FRAME_ID, HEARTBEAT_PAYLOAD};
pub use link::{TelemetryLink, TransmitError, TransportPort};
pub use telemetry::{TelemetryRecord, TELEMETRY_FRAME_ID, TELEMETRY_FRAME_LEN};
