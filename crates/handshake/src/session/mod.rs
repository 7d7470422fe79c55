//! The four-step handshake state machine

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;
use zkeq_api::error::validate;
use zkeq_api::{Element, Error, Group, Result};

use crate::predicates::{elements_equal, is_degenerate};

/// One party's half of a zero-knowledge equality handshake
///
/// A session runs two instances, one per party, with opposite `primary`
/// flags (the surrounding session setup must guarantee they differ). Each
/// instance is single-use: the steps run exactly once, strictly in order
/// 1 → 2 → 3 → 4, with the step outputs carried to the peer by the caller.
/// Calling a step out of order is a contract violation and panics. After a
/// failed [`step1`](Handshake::step1) the instance holds partial state and
/// must be discarded; retrying with the same instance would reuse secrets
/// that are strictly single-use.
///
/// A protocol-level problem (degenerate peer value, collision, final
/// mismatch) is never surfaced mid-run: every step always executes its
/// full operation sequence and only the [`failed`](Handshake::failed) flag
/// records the verdict. Which check tripped is deliberately not exposed.
pub struct Handshake<'g, G: Group> {
    group: &'g G,
    primary: bool,
    message: Zeroizing<Vec<u8>>,

    generator: Option<Element>,
    secret_a: Zeroizing<Vec<u8>>,
    secret_al: Zeroizing<Vec<u8>>,
    secret_r: Zeroizing<Vec<u8>>,

    g: Option<Element>,
    y: Option<Element>,
    p: Option<Element>,
    q: Option<Element>,
    expected_c: Option<Element>,

    failed: bool,
}

impl<'g, G: Group> Handshake<'g, G> {
    /// Create a fresh session half
    ///
    /// `message` is the byte-encoded secret to be compared against the
    /// peer's; it is kept in zeroizing storage and never transmitted.
    /// Exactly one of the two communicating instances must be constructed
    /// with `primary = true`.
    pub fn new(group: &'g G, primary: bool, message: &[u8]) -> Self {
        Self {
            group,
            primary,
            message: Zeroizing::new(message.to_vec()),
            generator: None,
            secret_a: Zeroizing::new(Vec::new()),
            secret_al: Zeroizing::new(Vec::new()),
            secret_r: Zeroizing::new(Vec::new()),
            g: None,
            y: None,
            p: None,
            q: None,
            expected_c: None,
            failed: false,
        }
    }

    /// Step 1: derive the generator and commit to fresh secrets
    ///
    /// Derives the session generator from `seed` (both parties must agree
    /// on the seed out-of-band for their generators to match), then draws
    /// the three ephemeral secret exponents of `secret_len` bytes each
    /// from `rng`. Returns the two public commitments
    /// `(generator^a, generator^al)` for transmission to the peer.
    ///
    /// `arity` must be a non-zero power of two. Fails if the random source
    /// cannot supply `3 * secret_len` bytes; the instance is then unusable.
    pub fn step1<R: CryptoRng + RngCore>(
        &mut self,
        seed: &[u8],
        rng: &mut R,
        arity: usize,
        secret_len: usize,
    ) -> Result<(Element, Element)> {
        validate::min_length("secret exponent", secret_len, 1)?;
        let generator = self.group.derive_element(seed, arity)?;
        self.failed = false;

        self.secret_a = Zeroizing::new(vec![0u8; secret_len]);
        self.secret_al = Zeroizing::new(vec![0u8; secret_len]);
        self.secret_r = Zeroizing::new(vec![0u8; secret_len]);
        for secret in [&mut self.secret_a, &mut self.secret_al, &mut self.secret_r] {
            rng.try_fill_bytes(secret.as_mut_slice())
                .map_err(|_| Error::Random {
                    context: "secret exponent draw",
                })?;
        }

        let public_a = self.group.exp(&generator, &self.secret_a);
        let public_al = self.group.exp(&generator, &self.secret_al);
        self.generator = Some(generator);
        Ok((public_a, public_al))
    }

    /// Step 2: bind the message into the exchanged commitments
    ///
    /// Takes the peer's step-1 commitments. Degenerate peer values mark
    /// the session failed, but the step still runs to completion so its
    /// execution shape does not reveal which input was rejected. Returns
    /// `(P, Q)` for transmission to the peer.
    pub fn step2(&mut self, peer_a: &Element, peer_al: &Element) -> (Element, Element) {
        let degenerate = is_degenerate(peer_a) | is_degenerate(peer_al);
        if degenerate {
            self.failed = true;
        }

        let generator = self
            .generator
            .as_ref()
            .expect("step1 must complete before step2");
        let g = self.group.exp(peer_a, &self.secret_a);
        let y = self.group.exp(peer_al, &self.secret_al);
        let p = self.group.exp(&y, &self.secret_r);
        let q = self.group.multiply(
            &self.group.exp(generator, &self.secret_r),
            &self.group.exp(&g, &self.message),
        );

        self.g = Some(g);
        self.y = Some(y);
        self.p = Some(p.clone());
        self.q = Some(q.clone());
        (p, q)
    }

    /// Step 3: combine the commitment pairs under the role asymmetry
    ///
    /// Takes the peer's `(P, Q)`. A collision with this instance's own
    /// pair (talking to oneself, or a replayed value) marks the session
    /// failed. The primary inverts the peer's values, the secondary its
    /// own: exactly one side of each product must carry the inverse so
    /// that both parties' step-4 checks telescope to the same combined
    /// comparison. Returns `QQ` for transmission to the peer.
    pub fn step3(&mut self, peer_p: &Element, peer_q: &Element) -> Element {
        let mut q1 = self.q.clone().expect("step2 must complete before step3");
        let mut q2 = peer_q.clone();
        let mut p1 = self.p.clone().expect("step2 must complete before step3");
        let mut p2 = peer_p.clone();

        let collision = elements_equal(&q1, &q2) | elements_equal(&p1, &p2);
        if collision {
            self.failed = true;
        }

        if self.primary {
            q2 = self.group.inverse(&q2);
            p2 = self.group.inverse(&p2);
        } else {
            q1 = self.group.inverse(&q1);
            p1 = self.group.inverse(&p1);
        }

        let qq = self
            .group
            .exp(&self.group.multiply(&q1, &q2), &self.secret_al);
        self.expected_c = Some(self.group.multiply(&p1, &p2));
        qq
    }

    /// Step 4: verify the peer's combined value
    ///
    /// Takes the peer's step-3 output and compares it, raised to this
    /// instance's secret, against the retained expectation. The result
    /// lands in [`failed`](Handshake::failed); nothing distinguishes a
    /// mismatch here from a failure recorded in an earlier step.
    pub fn step4(&mut self, peer_qq: &Element) {
        let expected = self
            .expected_c
            .as_ref()
            .expect("step3 must complete before step4");
        let c = self.group.exp(peer_qq, &self.secret_al);
        if !elements_equal(&c, expected) {
            self.failed = true;
        }
    }

    /// The session verdict
    ///
    /// Meaningful only after [`step4`](Handshake::step4): `false` means
    /// the peer proved knowledge of an equal message.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Whether this instance plays the primary role
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

#[cfg(test)]
mod tests;
