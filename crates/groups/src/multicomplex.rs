//! Hypercomplex-like tuples over a prime field
//!
//! An arity-2^k element is read as a pair (x, y) of arity-2^(k-1) halves
//! with y carrying the level's imaginary unit, i^2 = -1:
//!
//! ```text
//! (x1, y1) * (x2, y2) = (x1*x2 - y1*y2, x1*y2 + y1*x2)
//! ```
//!
//! applied recursively down to plain residues mod p. Arity 1 degenerates to
//! the mod-p field, arity 2 are the complex numbers over it, arity 4 the
//! bicomplex numbers, and so on. The ring is commutative and associative,
//! and the handshake only ever touches its unit group: random session
//! values are zero divisors with negligible probability.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use zkeq_api::error::validate;
use zkeq_api::{Element, Group, Result};

use crate::derive;

/// Multicomplex group capability over Z_p
///
/// The modulus must be an odd prime (scalar inversion uses Fermat's little
/// theorem). Primality is not verified here.
#[derive(Clone, Debug)]
pub struct MulticomplexGroup {
    modulus: BigUint,
}

impl MulticomplexGroup {
    /// Create a group from a prime modulus
    pub fn new(modulus: BigUint) -> Result<Self> {
        validate::parameter(modulus.bit(0), "modulus", "must be an odd prime")?;
        validate::parameter(modulus > BigUint::from(4u8), "modulus", "must exceed 4")?;
        Ok(Self { modulus })
    }

    /// Create a group from a big-endian prime encoding
    pub fn from_prime_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// The session modulus
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn wrap(&self, components: Vec<BigUint>) -> Element {
        Element::new(components).expect("group operations preserve arity")
    }

    /// The multiplicative identity (1, 0, ..., 0)
    fn one(&self, arity: usize) -> Vec<BigUint> {
        let mut out = vec![BigUint::zero(); arity];
        out[0] = BigUint::one();
        out
    }

    fn reduce(&self, c: &BigUint) -> BigUint {
        c % &self.modulus
    }

    fn neg(&self, c: &BigUint) -> BigUint {
        let r = self.reduce(c);
        if r.is_zero() {
            r
        } else {
            &self.modulus - r
        }
    }

    fn add(&self, a: &[BigUint], b: &[BigUint]) -> Vec<BigUint> {
        a.iter()
            .zip(b)
            .map(|(x, y)| (x + y) % &self.modulus)
            .collect()
    }

    fn sub(&self, a: &[BigUint], b: &[BigUint]) -> Vec<BigUint> {
        a.iter()
            .zip(b)
            .map(|(x, y)| (self.reduce(x) + self.neg(y)) % &self.modulus)
            .collect()
    }

    fn mul(&self, a: &[BigUint], b: &[BigUint]) -> Vec<BigUint> {
        debug_assert_eq!(a.len(), b.len());
        if a.len() == 1 {
            return vec![(&a[0] * &b[0]) % &self.modulus];
        }
        let half = a.len() / 2;
        let (x1, y1) = a.split_at(half);
        let (x2, y2) = b.split_at(half);
        let xx = self.mul(x1, x2);
        let yy = self.mul(y1, y2);
        let xy = self.mul(x1, y2);
        let yx = self.mul(y1, x2);
        let mut out = self.sub(&xx, &yy);
        out.extend(self.add(&xy, &yx));
        out
    }

    fn pow(&self, base: &[BigUint], exponent: &BigUint) -> Vec<BigUint> {
        let mut acc = self.one(base.len());
        for bit in exponent.to_radix_be(2) {
            acc = self.mul(&acc, &acc);
            if bit == 1 {
                acc = self.mul(&acc, base);
            }
        }
        acc
    }

    /// Inverse via the level's conjugate: z = (x, y) has
    /// z * (x, -y) = (x^2 + y^2, 0), so z^-1 = (x, -y) * (x^2 + y^2)^-1
    /// with the norm inverted one level down. Returns None for zero
    /// divisors, whose norm chain bottoms out at 0.
    fn inv(&self, a: &[BigUint]) -> Option<Vec<BigUint>> {
        if a.len() == 1 {
            let r = self.reduce(&a[0]);
            if r.is_zero() {
                return None;
            }
            let e = &self.modulus - 2u32;
            return Some(vec![r.modpow(&e, &self.modulus)]);
        }
        let half = a.len() / 2;
        let (x, y) = a.split_at(half);
        let norm = self.add(&self.mul(x, x), &self.mul(y, y));
        let norm_inv = self.inv(&norm)?;
        let mut out = self.mul(x, &norm_inv);
        let y_neg: Vec<BigUint> = y.iter().map(|c| self.neg(c)).collect();
        out.extend(self.mul(&y_neg, &norm_inv));
        Some(out)
    }
}

impl Group for MulticomplexGroup {
    fn name(&self) -> &'static str {
        "multicomplex"
    }

    fn derive_element(&self, seed: &[u8], arity: usize) -> Result<Element> {
        derive::components(seed, arity, &self.modulus).map(|c| self.wrap(c))
    }

    fn exp(&self, base: &Element, exponent: &[u8]) -> Element {
        let e = BigUint::from_bytes_be(exponent);
        self.wrap(self.pow(base.components(), &e))
    }

    fn multiply(&self, a: &Element, b: &Element) -> Element {
        debug_assert_eq!(a.arity(), b.arity());
        self.wrap(self.mul(a.components(), b.components()))
    }

    fn inverse(&self, a: &Element) -> Element {
        // Zero divisors have no inverse; the zero tuple is returned for
        // them and trips the degeneracy checks downstream.
        match self.inv(a.components()) {
            Some(components) => self.wrap(components),
            None => self.wrap(vec![BigUint::zero(); a.arity()]),
        }
    }
}
