//! Public API traits and types for the zkeq handshake
//!
//! This crate provides the shared surface of the zkeq workspace: the error
//! types, the group-element value type exchanged between the two parties,
//! and the [`Group`] capability trait the handshake consumes for its
//! algebra. Concrete group implementations live in `zkeq-groups`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Group;
pub use types::Element;
