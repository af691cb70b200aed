//! Shared helpers.
//!
//! - [`clock`] - Injectable time source used by the cache and the lookup service

pub mod clock;
