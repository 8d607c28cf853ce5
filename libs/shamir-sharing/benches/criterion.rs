use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_lib::modular::Prime;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shamir_sharing::protocol::Shamir;

const SECRET_VALUE: u64 = 15130512518_u64;

// A 64 bit prime, large enough to hold the secret.
const PRIME: u64 = 18446744072637906947;

fn build_shamir(threshold: u64, share_count: u64) -> Shamir {
    let prime = Prime::from_u64(PRIME).expect("invalid prime");
    Shamir::new(threshold, share_count, prime).expect("shamir construction failed")
}

fn bench_generate_shares(bench_name: &str, threshold: u64, share_count: u64, c: &mut Criterion) {
    let shamir = build_shamir(threshold, share_count);
    let secret = BigUint::from(SECRET_VALUE);
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    c.bench_function(bench_name, |b| {
        b.iter(|| {
            shamir.generate_shares_with_rng(black_box(&secret), &mut rng).expect("generate shares failed");
        });
    });
}

fn bench_recover(bench_name: &str, threshold: u64, share_count: u64, c: &mut Criterion) {
    let shamir = build_shamir(threshold, share_count);
    let secret = BigUint::from(SECRET_VALUE);
    let shares = shamir.generate_shares(&secret).expect("generate shares failed");
    let pool = shares.take(threshold as usize);
    c.bench_function(bench_name, |b| {
        b.iter(|| {
            shamir.recover_secret(black_box(pool.clone())).expect("recover failed");
        });
    });
}

fn bench_generate_shares_small(c: &mut Criterion) {
    bench_generate_shares("generate shares (3 of 5)", 3, 5, c);
}

fn bench_generate_shares_large(c: &mut Criterion) {
    bench_generate_shares("generate shares (38 of 531)", 38, 531, c);
}

fn bench_recover_small(c: &mut Criterion) {
    bench_recover("recover (3 of 5)", 3, 5, c);
}

fn bench_recover_large(c: &mut Criterion) {
    bench_recover("recover (38 of 531)", 38, 531, c);
}

criterion_group!(
    name = generate_shares;
    config = Criterion::default();
    targets = bench_generate_shares_small, bench_generate_shares_large
);

criterion_group!(
    name = recover;
    config = Criterion::default();
    targets = bench_recover_small, bench_recover_large
);

criterion_main!(generate_shares, recover);
