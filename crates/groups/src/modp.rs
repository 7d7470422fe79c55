//! Multiplicative group of integers modulo a prime
//!
//! Arity 1 is the classic mod-p group. Higher power-of-two arities are the
//! componentwise direct product: every operation acts independently on each
//! component, so a session over arity n runs n parallel copies of the same
//! mod-p algebra under one set of exponents.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;
use zkeq_api::error::validate;
use zkeq_api::{Element, Group, Result};

use crate::derive;
use crate::params;

/// Integers-mod-p group capability
///
/// The modulus must be an odd prime: inversion relies on Fermat's little
/// theorem. Primality itself is not verified here; parameters are expected
/// to come from a vetted source such as [`params`].
#[derive(Clone, Debug)]
pub struct ModpGroup {
    modulus: BigUint,
}

impl ModpGroup {
    /// Create a group from a prime modulus
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(
            modulus.bit(0),
            "modulus",
            "must be an odd prime",
        )?;
        validate::parameter(
            modulus > BigUint::from(4u8),
            "modulus",
            "must exceed 4",
        )?;
        Ok(Self { modulus })
    }

    /// Create a group from a big-endian prime encoding
    pub fn from_prime_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// The RFC 3526 MODP group 14 (2048-bit) instance
    pub fn rfc3526_2048() -> Self {
        Self::from_prime_bytes(&params::MODP_2048_PRIME)
            .expect("RFC 3526 parameters must be valid")
    }

    /// The session modulus
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn wrap(&self, components: Vec<BigUint>) -> Element {
        Element::new(components).expect("group operations preserve arity")
    }
}

impl Group for ModpGroup {
    fn name(&self) -> &'static str {
        "modp"
    }

    fn derive_element(&self, seed: &[u8], arity: usize) -> Result<Element> {
        derive::components(seed, arity, &self.modulus).map(|c| self.wrap(c))
    }

    fn exp(&self, base: &Element, exponent: &[u8]) -> Element {
        let e = BigUint::from_bytes_be(exponent);
        self.wrap(
            base.components()
                .iter()
                .map(|c| c.modpow(&e, &self.modulus))
                .collect(),
        )
    }

    fn multiply(&self, a: &Element, b: &Element) -> Element {
        debug_assert_eq!(a.arity(), b.arity());
        self.wrap(
            a.components()
                .iter()
                .zip(b.components())
                .map(|(x, y)| (x * y) % &self.modulus)
                .collect(),
        )
    }

    fn inverse(&self, a: &Element) -> Element {
        // a^(p-2) mod p; the non-residue 0 stays 0, which downstream
        // degeneracy checks reject.
        let e = &self.modulus - 2u32;
        self.wrap(
            a.components()
                .iter()
                .map(|c| {
                    if c.is_zero() {
                        BigUint::zero()
                    } else {
                        c.modpow(&e, &self.modulus)
                    }
                })
                .collect(),
        )
    }
}
