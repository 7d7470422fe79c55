//! # zkeq
//!
//! A zero-knowledge mutual-authentication handshake: a generalized
//! Socialist Millionaire Protocol over pluggable finite groups. Two
//! parties, each holding a secret value, verify that the values match
//! without revealing them to each other or to an eavesdropper.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! zkeq = "0.2"
//! ```
//!
//! Each party drives one `Handshake` through four strictly ordered steps,
//! carrying the step outputs to the peer over any transport:
//!
//! ```
//! use zkeq::prelude::*;
//!
//! let group = ModpGroup::rfc3526_2048();
//! let mut alice = Handshake::new(&group, true, b"shared secret");
//! let mut bob = Handshake::new(&group, false, b"shared secret");
//!
//! let mut rng = rand::thread_rng();
//! let (a1, al1) = alice.step1(b"agreed seed", &mut rng, 1, 32)?;
//! let (a2, al2) = bob.step1(b"agreed seed", &mut rng, 1, 32)?;
//!
//! let (p1, q1) = alice.step2(&a2, &al2);
//! let (p2, q2) = bob.step2(&a1, &al1);
//!
//! let qq1 = alice.step3(&p2, &q2);
//! let qq2 = bob.step3(&p1, &q1);
//!
//! alice.step4(&qq2);
//! bob.step4(&qq1);
//!
//! assert!(!alice.failed() && !bob.failed());
//! # Ok::<(), zkeq::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `groups` (default): bundled mod-p and multicomplex group
//!   implementations
//! - `serde`: serde support for exchanged elements
//! - `std` (default): standard library support
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the
//! workspace members:
//!
//! - [`zkeq-api`](api): the group capability trait, element type, errors
//! - [`zkeq-handshake`](handshake): the four-step handshake core
//! - [`zkeq-groups`](groups): bundled group implementations

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use zkeq_api as api;
pub use zkeq_handshake as handshake;

// Feature-gated re-exports
#[cfg(feature = "groups")]
pub use zkeq_groups as groups;

/// Common imports for zkeq users
pub mod prelude {
    pub use zkeq_api::{Element, Error, Group, Result};
    pub use zkeq_handshake::{elements_equal, is_degenerate, Handshake};

    #[cfg(feature = "groups")]
    pub use zkeq_groups::{ModpGroup, MulticomplexGroup};
}
