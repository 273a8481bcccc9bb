#![warn(clippy::unwrap_used)]

pub mod endpoints;
pub mod header;
pub mod responses;
