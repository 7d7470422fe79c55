//! Zero-knowledge mutual-authentication handshake
//!
//! A generalized Socialist Millionaire Protocol: two parties, each holding
//! a secret message, prove to each other that the messages are equal
//! without revealing them to each other or to an eavesdropper. The algebra
//! runs over any `zkeq_api::Group` capability; `zkeq-groups` provides
//! ready-made mod-p and multicomplex groups.
//!
//! The two parties take asymmetric roles (primary and secondary — the
//! flags MUST differ) and drive one [`Handshake`] instance each through
//! four strictly ordered steps, exchanging the step outputs over any
//! transport:
//!
//! ```text
//! A.step1 -> (A1, Al1)     B.step1 -> (A2, Al2)      exchange both pairs
//! A.step2(A2, Al2) -> (P1, Q1)
//! B.step2(A1, Al1) -> (P2, Q2)                       exchange both pairs
//! A.step3(P2, Q2) -> QQ1   B.step3(P1, Q1) -> QQ2    exchange both values
//! A.step4(QQ2)             B.step4(QQ1)
//! ```
//!
//! After step4 each side reads its own [`Handshake::failed`] flag:
//! `false` means the peer holds the same message. No other intermediate
//! state is meaningful, and a failure is indistinguishable from outside as
//! to which check tripped it.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod predicates;
pub mod session;

pub use predicates::{elements_equal, is_degenerate};
pub use session::Handshake;
