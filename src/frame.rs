//! Frame assembly and incremental frame parsing.
//!
//! A frame is one complete protocol exchange unit:
//!
//! ```text
//! [0xAA, 0x55] [LENGTH] [payload_id, payload_bytes]* [CHECKSUM]
//! ```
//!
//! `LENGTH` counts exactly the payload-region bytes and `CHECKSUM` is the
//! XOR of the length byte and the payload region. The serial channel is not
//! frame aligned, so the receive side is a [`FrameDecoder`] session that
//! accumulates transport reads and hands back one fully verified frame at a
//! time, resynchronizing on the start marker after garbage or corruption.

use log::{trace, warn};

use crate::{
    checksum::checksum,
    cursor::ByteCursor,
    decode::Decode,
    encode::{Encode, EncodeError},
    payloads::Payload,
};

/// Start marker preceding every frame.
pub const FRAME_HEADER: [u8; 2] = [0xAA, 0x55];

/// Byte count of everything in a frame except its payload region: the two
/// marker bytes, the length byte and the trailing checksum byte.
pub const FRAME_OVERHEAD: usize = FRAME_HEADER.len() + 2;

/// Largest payload region the one-byte length field can declare.
pub const MAX_PAYLOAD_REGION: usize = u8::MAX as usize;

/// Encodes payloads into one framed byte sequence ready for the transport.
///
/// Payloads are written in the order given. The length field is back-filled
/// with the exact payload-region byte count once encoding is done.
///
/// # Errors
///
/// Returns [`EncodeError::PayloadRegionTooLarge`] if the encoded payloads
/// exceed [`MAX_PAYLOAD_REGION`] bytes.
pub fn encode_frame(payloads: &[Payload]) -> Result<Vec<u8>, EncodeError> {
    let mut cursor = ByteCursor::new();
    cursor.append(&FRAME_HEADER);
    cursor.push(0); // length, back-filled below

    for payload in payloads {
        payload.encode(&mut cursor);
    }
    let region_len = cursor.len() - FRAME_HEADER.len() - 1;
    if region_len > MAX_PAYLOAD_REGION {
        return Err(EncodeError::PayloadRegionTooLarge { len: region_len });
    }
    cursor.write_at(FRAME_HEADER.len(), region_len as u8);

    let check = checksum(&cursor.as_bytes()[FRAME_HEADER.len()..]);
    cursor.push(check);
    Ok(cursor.into_bytes())
}

/// Incremental frame parser for one serial channel.
///
/// Bytes read from the transport go in through [`extend`](Self::extend) in
/// whatever chunks they arrive; [`poll`](Self::poll) yields one frame's
/// payloads whenever a complete, checksum-verified frame is buffered.
/// Leftover bytes between reads are state of this session value, so
/// multiple channels can parse independently.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: ByteCursor,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends bytes received from the transport.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.append(bytes);
    }

    /// Number of buffered bytes not yet consumed by a parsed frame.
    pub fn pending(&self) -> usize {
        self.buffer.remaining()
    }

    /// Drops all buffered bytes, abandoning any partially received frame.
    ///
    /// Call after a transport-level cancellation or timeout; an abandoned
    /// partial frame leaves no state that could corrupt a later parse.
    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Extracts the next complete frame from the buffered input.
    ///
    /// Returns `None` once the buffer holds no further complete frame; call
    /// again after more input arrives. Corrupt frames are dropped with a
    /// log line and scanning resumes past their marker, so a corrupted
    /// stream always makes forward progress.
    pub fn poll(&mut self) -> Option<Vec<Payload>> {
        loop {
            if !self.sync_to_marker() {
                self.buffer.compact();
                return None;
            }

            let unread = self.buffer.unread();
            // Marker plus length byte.
            if unread.len() < FRAME_HEADER.len() + 1 {
                return None;
            }
            let region_len = unread[FRAME_HEADER.len()] as usize;
            let frame_len = FRAME_OVERHEAD + region_len;
            if unread.len() < frame_len {
                // Partial frame; wait for the rest.
                return None;
            }

            // The checksum covers the length byte and the payload region.
            let covered = &unread[FRAME_HEADER.len()..frame_len - 1];
            let expected = unread[frame_len - 1];
            let computed = checksum(covered);
            if computed != expected {
                warn!(
                    "Dropping corrupt frame: checksum {computed:#04x} does not match trailing byte {expected:#04x}"
                );
                // Rescan just past the marker so an embedded marker inside
                // the corrupt bytes is still found.
                self.buffer.advance(FRAME_HEADER.len());
                continue;
            }

            let region = covered[1..].to_vec();
            self.buffer.advance(frame_len);
            self.buffer.compact();
            trace!("Received frame with {region_len} payload bytes");
            return Some(dispatch_region(region));
        }
    }

    /// Advances the read position to the next start marker, discarding any
    /// leading garbage. Returns `false` when no marker is buffered yet; a
    /// trailing lone first marker byte is retained in case its mate arrives
    /// with the next read.
    fn sync_to_marker(&mut self) -> bool {
        let unread = self.buffer.unread();
        match unread
            .windows(FRAME_HEADER.len())
            .position(|window| window == FRAME_HEADER)
        {
            Some(offset) => {
                if offset > 0 {
                    trace!("Discarded {offset} bytes while scanning for a start marker");
                }
                self.buffer.advance(offset);
                true
            }
            None => {
                let keep = (unread.last() == Some(&FRAME_HEADER[0])) as usize;
                let discard = unread.len() - keep;
                if discard > 0 {
                    trace!("Discarded {discard} bytes while scanning for a start marker");
                }
                self.buffer.advance(discard);
                false
            }
        }
    }
}

/// Decodes payloads out of one verified payload region until it is
/// exhausted.
///
/// A payload the registry does not recognize aborts the iteration, because
/// its length is unknowable, but the frame as a whole has already been
/// consumed to its declared length so the next frame stays in sync. The
/// same recovery applies if a declared length contradicts the payload
/// layouts inside an otherwise checksum-valid frame.
fn dispatch_region(region: Vec<u8>) -> Vec<Payload> {
    let mut cursor = ByteCursor::from_bytes(region);
    let mut payloads = Vec::new();
    while cursor.remaining() > 0 {
        match Payload::decode(&mut cursor) {
            Ok(payload) => payloads.push(payload),
            Err(error) => {
                warn!("Abandoning remainder of payload region: {error}");
                break;
            }
        }
    }
    payloads
}
