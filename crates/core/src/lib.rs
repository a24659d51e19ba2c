//! Functional core for devoauth.
//!
//! Everything in here is pure: no I/O, no global state. The binary crate
//! owns HTTP, configuration and key material and calls into this crate
//! for protocol decisions.

pub mod oidc;
