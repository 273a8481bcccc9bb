//! Checks a decoded block against the fork its response declares.
//!
//! Raw decoding accepts any combination of fork-introduced fields. The validation pass here is
//! run by the caller afterwards and rejects bodies that lack a field the declared fork requires
//! or carry one the fork predates.

#![warn(clippy::unwrap_used)]

pub mod fields;
pub mod resolve;
pub mod validator;
