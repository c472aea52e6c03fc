//! Administrative services.
//!
//! Holds the one-time setup code used to bootstrap the first admin account.

pub mod code;
