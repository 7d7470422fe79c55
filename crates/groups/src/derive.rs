//! Deterministic element derivation shared by the bundled groups

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use num_bigint::BigUint;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use zkeq_api::error::validate;
use zkeq_api::Result;

/// Squeeze `arity` components out of SHAKE256(seed)
///
/// Each component is read as a big-endian integer `modulus_len + 16` bytes
/// wide and folded into the range `[2, modulus - 1]`, so a derived element
/// never carries a degenerate component. The mapping is fixed: both parties
/// squeeze identical components from identical seeds.
pub(crate) fn components(seed: &[u8], arity: usize, modulus: &BigUint) -> Result<Vec<BigUint>> {
    validate::arity(arity)?;

    let chunk_len = ((modulus.bits() as usize + 7) / 8) + 16;
    let span = modulus - 2u32;

    let mut xof = Shake256::default();
    xof.update(seed);
    let mut reader = xof.finalize_xof();

    let mut out = Vec::with_capacity(arity);
    let mut chunk = vec![0u8; chunk_len];
    for _ in 0..arity {
        reader.read(&mut chunk);
        let wide = BigUint::from_bytes_be(&chunk);
        out.push((wide % &span) + 2u32);
    }
    Ok(out)
}
