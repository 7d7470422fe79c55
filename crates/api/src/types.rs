//! Core value types exchanged during the handshake

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_bigint::BigUint;

use crate::error::{validate, Error, Result};

/// One element of the session's algebraic group
///
/// An element is an ordered tuple of large non-negative integers with a
/// fixed arity that must be a power of two. The arity is fixed for a session
/// and must match across both parties. Elements are immutable once produced
/// by a group operation: the type exposes accessors only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    components: Vec<BigUint>,
}

impl Element {
    /// Create an element from its components
    ///
    /// The number of components is the element's arity and must be a
    /// non-zero power of two.
    pub fn new(components: Vec<BigUint>) -> Result<Self> {
        validate::arity(components.len())?;
        Ok(Self { components })
    }

    /// The element's arity (number of components)
    pub fn arity(&self) -> usize {
        self.components.len()
    }

    /// All components in order
    pub fn components(&self) -> &[BigUint] {
        &self.components
    }

    /// A single component
    ///
    /// Panics if `index` is out of range for the element's arity.
    pub fn component(&self, index: usize) -> &BigUint {
        &self.components[index]
    }

    /// Byte encoding of the element
    ///
    /// Format: a big-endian `u32` arity, then for each component a
    /// big-endian `u32` byte length followed by the component's big-endian
    /// bytes. The encoding is self-delimiting so callers can frame it over
    /// their own transport.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.components.len() as u32).to_be_bytes());
        for component in &self.components {
            let bytes = component.to_bytes_be();
            out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
            out.extend_from_slice(&bytes);
        }
        out
    }

    /// Decode an element produced by [`Element::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (arity, mut rest) = read_u32(bytes, "element arity")?;
        validate::arity(arity as usize)?;

        let mut components = Vec::with_capacity(arity as usize);
        for _ in 0..arity {
            let (len, tail) = read_u32(rest, "component length")?;
            if tail.len() < len as usize {
                return Err(Error::Encoding {
                    context: "component truncated",
                });
            }
            let (body, tail) = tail.split_at(len as usize);
            components.push(BigUint::from_bytes_be(body));
            rest = tail;
        }
        if !rest.is_empty() {
            return Err(Error::Encoding {
                context: "trailing bytes after element",
            });
        }
        Self::new(components)
    }
}

fn read_u32<'a>(bytes: &'a [u8], context: &'static str) -> Result<(u32, &'a [u8])> {
    if bytes.len() < 4 {
        return Err(Error::Encoding { context });
    }
    let (head, rest) = bytes.split_at(4);
    let value = u32::from_be_bytes([head[0], head[1], head[2], head[3]]);
    Ok((value, rest))
}
