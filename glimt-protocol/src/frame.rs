//! Classic-format CAN frame type
//!
//! Frame format:
//! - ID: 11-bit standard identifier (0x000-0x7FF)
//! - LENGTH: payload length (0-8)
//! - DATA: up to 8 payload bytes
//!
//! Addressing, acknowledgement and retransmission live in the bus
//! controller, not here; this type only models the id/length/data triplet
//! handed to the transport.

use heapless::Vec;

/// Maximum payload size of a classic-format frame in bytes
pub const MAX_FRAME_DATA: usize = 8;

/// Largest valid standard (11-bit) identifier
pub const MAX_STANDARD_ID: u16 = 0x7FF;

/// Identifier of the fixed heartbeat frame
pub const HEARTBEAT_FRAME_ID: u16 = 0x007;

/// Payload of the fixed heartbeat frame
pub const HEARTBEAT_PAYLOAD: [u8; 3] = [0x26, 0x42, 0x00];

/// Errors that can occur during frame construction or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Identifier exceeds the 11-bit standard range
    IdOutOfRange,
    /// Payload exceeds the classic-format capacity of 8 bytes
    PayloadTooLarge,
    /// Frame payload is shorter than the decoded record requires
    Truncated { len: usize },
    /// Frame carries an identifier the decoder does not handle
    UnexpectedId,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::IdOutOfRange => write!(f, "identifier exceeds 11-bit standard range"),
            FrameError::PayloadTooLarge => {
                write!(f, "payload exceeds {MAX_FRAME_DATA}-byte frame capacity")
            }
            FrameError::Truncated { len } => write!(f, "frame payload truncated at {len} bytes"),
            FrameError::UnexpectedId => write!(f, "unexpected frame identifier"),
        }
    }
}

/// A classic-format bus frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    id: u16,
    data: Vec<u8, MAX_FRAME_DATA>,
}

impl Frame {
    /// Create a frame with the given identifier and payload
    ///
    /// # Errors
    /// - [`FrameError::IdOutOfRange`] if `id > 0x7FF`
    /// - [`FrameError::PayloadTooLarge`] if `data` exceeds 8 bytes
    pub fn new(id: u16, data: &[u8]) -> Result<Self, FrameError> {
        if id > MAX_STANDARD_ID {
            return Err(FrameError::IdOutOfRange);
        }

        let mut payload = Vec::new();
        payload
            .extend_from_slice(data)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self { id, data: payload })
    }

    /// Frame identifier
    pub fn id(&self) -> u16 {
        self.id
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the frame carries no payload
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Payload bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// The fixed heartbeat frame sent on every tick
///
/// Always identical: id [`HEARTBEAT_FRAME_ID`], payload
/// [`HEARTBEAT_PAYLOAD`]. A constant in spirit; constructed on demand
/// because the payload vector has no const constructor.
pub fn heartbeat_frame() -> Frame {
    let mut data = Vec::new();
    // 3 bytes always fit the 8-byte capacity
    let _ = data.extend_from_slice(&HEARTBEAT_PAYLOAD);
    Frame {
        id: HEARTBEAT_FRAME_ID,
        data,
    }
}
