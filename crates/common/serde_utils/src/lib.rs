//! Leaf decoders for the scalar encodings used by beacon node REST APIs.
//!
//! Integers arrive as bare JSON numbers or as quoted strings in any base, byte strings arrive
//! as (usually `0x`-prefixed) hex. The adapters in this crate are the only place those rules
//! are defined; every object decoder delegates its leaves here.

#![warn(clippy::unwrap_used)]

pub mod error;
pub mod hex_address;
pub mod hex_bytes;
pub mod hex_fixed;
pub mod uint64_text;

pub use error::ScalarError;
pub use hex_bytes::{HexBytes, decode_hex_bytes, encode_hex};
pub use uint64_text::{Uint64Text, decode_uint64_text};
