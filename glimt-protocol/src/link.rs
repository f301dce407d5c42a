//! Transport boundary and best-effort telemetry link
//!
//! The bus controller (FlexCAN, bxCAN, a test double) sits behind the
//! [`TransportPort`] trait. [`TelemetryLink`] owns the per-board send
//! state: the wrapping sequence counter and a count of rejected sends.
//! Telemetry is best-effort, so a transmit failure is recorded and the
//! next tick simply sends the next sample; no retry or acknowledgement
//! happens at this layer.

use crate::frame::{heartbeat_frame, Frame};
use crate::telemetry::TelemetryRecord;

/// Errors reported by the transport when a frame cannot be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitError {
    /// Controller refused the frame (mailbox full, arbitration lost)
    Rejected,
    /// Controller is in bus-off state
    BusOff,
}

impl core::fmt::Display for TransmitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransmitError::Rejected => write!(f, "transport rejected frame"),
            TransmitError::BusOff => write!(f, "transport is bus-off"),
        }
    }
}

/// Abstract frame transmit boundary
///
/// Implemented by the platform's bus controller glue, consumed here.
/// `send` reports the number of bytes written on success. Timeouts and
/// bus recovery belong to the implementation, not to callers.
pub trait TransportPort {
    /// Transmit one frame
    fn send(&mut self, frame: &Frame) -> Result<usize, TransmitError>;
}

/// Periodic telemetry sender over a transport port
///
/// Stateless per encode; the only state carried across ticks is the
/// sequence counter and failure count.
#[derive(Debug)]
pub struct TelemetryLink<P> {
    port: P,
    sequence: u8,
    failed_sends: u32,
}

impl<P: TransportPort> TelemetryLink<P> {
    /// Create a link over the given transport
    pub fn new(port: P) -> Self {
        Self {
            port,
            sequence: 0,
            failed_sends: 0,
        }
    }

    /// Encode and send one temperature sample
    ///
    /// The sequence counter advances on every attempt, so a receiver can
    /// detect dropped samples. Returns the sequence number used. A
    /// transport failure is counted and returned, but the link stays
    /// usable; the caller keeps ticking.
    pub fn send_sample(&mut self, temperature_c: f32) -> Result<u8, TransmitError> {
        let record = TelemetryRecord {
            sequence: self.sequence,
            temperature_c,
        };
        self.sequence = self.sequence.wrapping_add(1);

        // Layout is compile-time checked, encode cannot fail for this record
        let Ok(frame) = record.encode() else {
            self.failed_sends = self.failed_sends.saturating_add(1);
            return Err(TransmitError::Rejected);
        };

        match self.port.send(&frame) {
            Ok(_) => Ok(record.sequence),
            Err(e) => {
                self.failed_sends = self.failed_sends.saturating_add(1);
                Err(e)
            }
        }
    }

    /// Send the fixed heartbeat frame
    pub fn send_heartbeat(&mut self) -> Result<(), TransmitError> {
        match self.port.send(&heartbeat_frame()) {
            Ok(_) => Ok(()),
            Err(e) => {
                self.failed_sends = self.failed_sends.saturating_add(1);
                Err(e)
            }
        }
    }

    /// Number of sends the transport has rejected so far
    pub fn failed_sends(&self) -> u32 {
        self.failed_sends
    }

    /// Sequence number the next sample will carry
    pub fn next_sequence(&self) -> u8 {
        self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::HEARTBEAT_FRAME_ID;
    use crate::telemetry::TELEMETRY_FRAME_ID;
    use std::vec::Vec;

    /// Test double that records frames and fails on demand
    struct FakePort {
        sent: Vec<Frame>,
        fail_next: bool,
    }

    impl FakePort {
        fn new() -> Self {
            Self {
                sent: Vec::new(),
                fail_next: false,
            }
        }
    }

    impl TransportPort for FakePort {
        fn send(&mut self, frame: &Frame) -> Result<usize, TransmitError> {
            if self.fail_next {
                self.fail_next = false;
                return Err(TransmitError::Rejected);
            }
            self.sent.push(frame.clone());
            Ok(frame.len())
        }
    }

    #[test]
    fn test_send_sample_advances_sequence() {
        let mut link = TelemetryLink::new(FakePort::new());
        assert_eq!(link.send_sample(23.1).unwrap(), 0);
        assert_eq!(link.send_sample(23.2).unwrap(), 1);
        assert_eq!(link.next_sequence(), 2);

        let sent = &link.port.sent;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].id(), TELEMETRY_FRAME_ID);
        assert_eq!(sent[0].data()[0], 0);
        assert_eq!(sent[1].data()[0], 1);
    }

    #[test]
    fn test_sequence_wraps_at_256() {
        let mut link = TelemetryLink::new(FakePort::new());
        for _ in 0..256 {
            link.send_sample(0.0).unwrap();
        }
        assert_eq!(link.send_sample(0.0).unwrap(), 0);
    }

    #[test]
    fn test_link_survives_transmit_failure() {
        let mut port = FakePort::new();
        port.fail_next = true;
        let mut link = TelemetryLink::new(port);

        assert_eq!(link.send_sample(1.0), Err(TransmitError::Rejected));
        assert_eq!(link.failed_sends(), 1);

        // Next tick goes through; the failed sample's sequence is skipped
        assert_eq!(link.send_sample(2.0).unwrap(), 1);
        assert_eq!(link.failed_sends(), 1);
    }

    #[test]
    fn test_send_heartbeat() {
        let mut link = TelemetryLink::new(FakePort::new());
        link.send_heartbeat().unwrap();

        let sent = &link.port.sent;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id(), HEARTBEAT_FRAME_ID);
        assert_eq!(sent[0].data(), &[0x26, 0x42, 0x00]);
    }
}
