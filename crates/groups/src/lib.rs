//! Bundled group implementations for the zkeq handshake
//!
//! The handshake consumes its algebra through the `zkeq_api::Group`
//! capability; this crate supplies two interchangeable implementations:
//!
//! - [`ModpGroup`]: the multiplicative group of integers modulo a prime,
//!   extended componentwise to power-of-two arities.
//! - [`MulticomplexGroup`]: hypercomplex-like tuples over a prime field,
//!   with recursive complex-style multiplication.
//!
//! Both derive generators deterministically from a seed with SHAKE256, so
//! two parties that agree on a seed and group parameters out-of-band obtain
//! the same generator without exchanging it.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod derive;
pub mod modp;
pub mod multicomplex;
pub mod params;

pub use modp::ModpGroup;
pub use multicomplex::MulticomplexGroup;
