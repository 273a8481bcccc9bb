#![warn(clippy::unwrap_used)]

pub mod decode;
pub mod error;
