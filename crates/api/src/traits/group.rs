//! Trait definition for the algebraic group capability
//!
//! The handshake never performs arithmetic itself: it consumes a [`Group`]
//! implementation for exponentiation, multiplication, inversion, and
//! deterministic element derivation. Any finite commutative group over
//! [`Element`] tuples can be substituted without touching the handshake
//! logic.

use crate::types::Element;
use crate::Result;

/// Capability interface over the session's algebraic group
///
/// All operations are total over well-formed elements of the session's
/// arity. Behavior on elements of mismatched arity is undefined and must be
/// prevented by callers; [`Element::new`](crate::Element::new) performs the
/// recommended construction-time arity check.
pub trait Group {
    /// Returns the group implementation name.
    fn name(&self) -> &'static str;

    /// Derive a reproducible element of the given arity from a byte seed.
    ///
    /// The element is squeezed from an extendable-output hash of `seed`:
    /// the same seed and the same group parameters always produce the same
    /// element. This lets both parties agree on a generator without
    /// exchanging it. Fails if `arity` is not a non-zero power of two.
    fn derive_element(&self, seed: &[u8], arity: usize) -> Result<Element>;

    /// Group exponentiation.
    ///
    /// The exponent is a byte string interpreted as a non-negative
    /// big-endian integer. An empty exponent yields the group identity.
    fn exp(&self, base: &Element, exponent: &[u8]) -> Element;

    /// Group operation.
    fn multiply(&self, a: &Element, b: &Element) -> Element;

    /// Group inverse.
    fn inverse(&self, a: &Element) -> Element;
}
