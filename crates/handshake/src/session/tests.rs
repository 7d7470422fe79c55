use super::*;

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use zkeq_groups::params::M61_PRIME;
use zkeq_groups::ModpGroup;

const SECRET_LEN: usize = 16;

fn toy_group() -> ModpGroup {
    ModpGroup::new(BigUint::from(M61_PRIME)).unwrap()
}

fn rng(stream: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(stream)
}

fn exchange<G: Group>(
    group: &G,
    arity: usize,
    message_a: &[u8],
    message_b: &[u8],
    a_is_primary: bool,
) -> (bool, bool) {
    let mut rng_a = rng(11);
    let mut rng_b = rng(29);
    let mut alice = Handshake::new(group, a_is_primary, message_a);
    let mut bob = Handshake::new(group, !a_is_primary, message_b);

    let (a1, al1) = alice.step1(b"session seed", &mut rng_a, arity, SECRET_LEN).unwrap();
    let (a2, al2) = bob.step1(b"session seed", &mut rng_b, arity, SECRET_LEN).unwrap();

    let (p1, q1) = alice.step2(&a2, &al2);
    let (p2, q2) = bob.step2(&a1, &al1);

    let qq1 = alice.step3(&p2, &q2);
    let qq2 = bob.step3(&p1, &q1);

    alice.step4(&qq2);
    bob.step4(&qq1);
    (alice.failed(), bob.failed())
}

#[test]
fn equal_messages_authenticate() {
    let group = toy_group();
    assert_eq!(exchange(&group, 1, b"hunter2", b"hunter2", true), (false, false));
}

#[test]
fn differing_messages_fail_on_both_sides() {
    let group = toy_group();
    assert_eq!(exchange(&group, 1, b"hunter2", b"hunter3", true), (true, true));
}

#[test]
fn swapping_roles_preserves_the_verdict() {
    let group = toy_group();
    assert_eq!(exchange(&group, 2, b"pw", b"pw", false), (false, false));
    assert_eq!(exchange(&group, 2, b"pw", b"other", false), (true, true));
}

#[test]
fn degenerate_peer_commitment_fails_but_step_completes() {
    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    hs.step1(b"seed", &mut rng(3), 1, SECRET_LEN).unwrap();

    let degenerate = Element::new(vec![BigUint::from(0u8)]).unwrap();
    let honest = Element::new(vec![BigUint::from(5u8)]).unwrap();
    let (p, q) = hs.step2(&degenerate, &honest);

    assert!(hs.failed());
    // The step still produced well-formed output for transmission
    assert_eq!(p.arity(), 1);
    assert_eq!(q.arity(), 1);
}

#[test]
fn own_pair_fed_back_is_a_collision() {
    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    let mut r = rng(17);

    // Talking to oneself: the instance's own commitments come back as the
    // "peer's"
    let (pa, pal) = hs.step1(b"seed", &mut r, 1, SECRET_LEN).unwrap();
    let (p, q) = hs.step2(&pa, &pal);

    hs.step3(&p, &q);
    assert!(hs.failed());
}

#[test]
fn failed_flag_is_sticky_through_step4() {
    let group = toy_group();
    let mut rng_a = rng(5);
    let mut rng_b = rng(19);
    let mut alice = Handshake::new(&group, true, b"pw");
    let mut bob = Handshake::new(&group, false, b"pw");

    let (_a1, al1) = alice.step1(b"seed", &mut rng_a, 1, SECRET_LEN).unwrap();
    let (a2, al2) = bob.step1(b"seed", &mut rng_b, 1, SECRET_LEN).unwrap();

    // Hand Bob a degenerate commitment in place of Alice's real one
    let degenerate = Element::new(vec![BigUint::from(1u8)]).unwrap();
    let (p2, q2) = bob.step2(&degenerate, &al1);
    let (p1, q1) = alice.step2(&a2, &al2);

    let qq1 = alice.step3(&p2, &q2);
    let qq2 = bob.step3(&p1, &q1);
    alice.step4(&qq2);
    bob.step4(&qq1);

    assert!(bob.failed());
}

#[test]
fn step1_rejects_zero_secret_length() {
    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    assert!(hs.step1(b"seed", &mut rng(1), 1, 0).is_err());
}

#[test]
fn step1_rejects_bad_arity() {
    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    assert!(hs.step1(b"seed", &mut rng(1), 3, SECRET_LEN).is_err());
    assert!(hs.step1(b"seed", &mut rng(1), 0, SECRET_LEN).is_err());
}

#[test]
fn exhausted_random_source_aborts_step1() {
    struct ShortRng {
        inner: ChaCha20Rng,
        budget: usize,
    }

    impl rand::RngCore for ShortRng {
        fn next_u32(&mut self) -> u32 {
            self.inner.next_u32()
        }
        fn next_u64(&mut self) -> u64 {
            self.inner.next_u64()
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.inner.fill_bytes(dest)
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
            if dest.len() > self.budget {
                return Err(rand::Error::new("entropy source exhausted"));
            }
            self.budget -= dest.len();
            self.inner.try_fill_bytes(dest)
        }
    }

    impl rand::CryptoRng for ShortRng {}

    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    // Two secrets' worth of bytes: the third draw must fail
    let mut short = ShortRng {
        inner: rng(23),
        budget: 2 * SECRET_LEN,
    };
    let result = hs.step1(b"seed", &mut short, 1, SECRET_LEN);
    assert!(matches!(result, Err(Error::Random { .. })));
}

#[test]
#[should_panic(expected = "step1 must complete before step2")]
fn step2_before_step1_panics() {
    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    let e = Element::new(vec![BigUint::from(5u8)]).unwrap();
    hs.step2(&e, &e);
}

#[test]
#[should_panic(expected = "step3 must complete before step4")]
fn step4_before_step3_panics() {
    let group = toy_group();
    let mut hs = Handshake::new(&group, true, b"pw");
    let e = Element::new(vec![BigUint::from(5u8)]).unwrap();
    hs.step4(&e);
}
