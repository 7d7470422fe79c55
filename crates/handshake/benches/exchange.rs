use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use zkeq_api::Group;
use zkeq_groups::params::M61_PRIME;
use zkeq_groups::{ModpGroup, MulticomplexGroup};
use zkeq_handshake::Handshake;

fn full_exchange<G: Group>(group: &G, arity: usize) -> (bool, bool) {
    let mut rng_a = ChaCha20Rng::seed_from_u64(1);
    let mut rng_b = ChaCha20Rng::seed_from_u64(2);
    let mut alice = Handshake::new(group, true, b"benchmark message");
    let mut bob = Handshake::new(group, false, b"benchmark message");

    let (a1, al1) = alice.step1(b"bench seed", &mut rng_a, arity, 16).unwrap();
    let (a2, al2) = bob.step1(b"bench seed", &mut rng_b, arity, 16).unwrap();
    let (p1, q1) = alice.step2(&a2, &al2);
    let (p2, q2) = bob.step2(&a1, &al1);
    let qq1 = alice.step3(&p2, &q2);
    let qq2 = bob.step3(&p1, &q1);
    alice.step4(&qq2);
    bob.step4(&qq1);
    (alice.failed(), bob.failed())
}

fn bench_exchange(c: &mut Criterion) {
    let modp = ModpGroup::new(BigUint::from(M61_PRIME)).unwrap();
    c.bench_function("exchange_modp_m61_arity1", |b| {
        b.iter(|| full_exchange(&modp, 1))
    });

    let multicomplex = MulticomplexGroup::new(BigUint::from(M61_PRIME)).unwrap();
    c.bench_function("exchange_multicomplex_m61_arity4", |b| {
        b.iter(|| full_exchange(&multicomplex, 4))
    });

    let modp_2048 = ModpGroup::rfc3526_2048();
    c.bench_function("exchange_modp_rfc3526_2048", |b| {
        b.iter(|| full_exchange(&modp_2048, 1))
    });
}

criterion_group!(benches, bench_exchange);
criterion_main!(benches);
