//! Validity predicates for exchanged group elements
//!
//! Pure, stateless checks shared by both roles. They guard the protocol
//! against identity-like elements an attacker could use to force a known
//! verdict, and detect self-collisions.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use subtle::{Choice, ConstantTimeEq};
use zkeq_api::Element;

/// True for trivial, identity-like elements
///
/// An element is degenerate when its first component does not exceed the
/// group unit, or when any later component is zero. Such elements (the
/// identity among them) must never enter the exchange: exponentiating them
/// yields predictable values that void the zero-knowledge property.
pub fn is_degenerate(element: &Element) -> bool {
    let first_trivial = element.component(0) <= &BigUint::one();
    let tail_zero = element.components()[1..].iter().any(Zero::is_zero);
    first_trivial || tail_zero
}

/// Componentwise equality of two elements
///
/// False on arity mismatch. Components are compared over padded byte
/// images without short-circuiting, so the comparison's shape does not
/// depend on where the first difference sits.
pub fn elements_equal(a: &Element, b: &Element) -> bool {
    if a.arity() != b.arity() {
        return false;
    }
    let mut equal = Choice::from(1u8);
    for (x, y) in a.components().iter().zip(b.components()) {
        equal &= component_eq(x, y);
    }
    equal.into()
}

fn component_eq(x: &BigUint, y: &BigUint) -> Choice {
    let xb = x.to_bytes_le();
    let yb = y.to_bytes_le();
    let width = xb.len().max(yb.len());
    let mut equal = Choice::from(1u8);
    for i in 0..width {
        let xi = xb.get(i).copied().unwrap_or(0);
        let yi = yb.get(i).copied().unwrap_or(0);
        equal &= xi.ct_eq(&yi);
    }
    equal
}
