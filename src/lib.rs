//! Implementation of the Kobuki mobile base serial protocol in Rust. Not
//! affiliated with Yujin Robot.
//!
//! This crate is structured around two key traits: [`Encode`] and
//! [`Decode`]. These traits are used to encode payloads to be sent to the
//! base and decode payloads received from it, through a shared
//! [`ByteCursor`] buffer. Every payload kind the protocol defines is a
//! variant of the closed [`Payload`] set.
//!
//! Because the serial channel delivers bytes with no frame alignment,
//! incoming data goes through a [`FrameDecoder`]: feed it transport reads
//! with [`FrameDecoder::extend`] and drain verified frames with
//! [`FrameDecoder::poll`]. Outgoing payloads are framed in one call with
//! [`encode_frame`]. Opening and configuring the serial port itself is the
//! caller's job.

pub mod checksum;
pub mod cursor;
pub mod decode;
pub mod encode;
pub mod frame;
pub mod payloads;

pub use cursor::ByteCursor;
pub use decode::{Decode, DecodeError};
pub use encode::{Encode, EncodeError};
pub use frame::{encode_frame, FrameDecoder, FRAME_HEADER};
pub use payloads::Payload;
