use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use brakerski::params::presets::demo;
use brakerski::regev::{gen_secret_key_with_rng, gen_public_key_with_rng, encrypt_with_rng, decrypt};
use brakerski::leveled::{leveled_keygen_with_rng, leveled_add, leveled_mul, LeveledScheme};

fn regev_keygen(c: &mut Criterion) {
    let params = demo().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    c.bench_function("regev_keygen_secret", |b| {
        b.iter(|| gen_secret_key_with_rng(black_box(&params), &mut rng))
    });

    let sk = gen_secret_key_with_rng(&params, &mut rng);
    c.bench_function("regev_keygen_public", |b| {
        b.iter(|| gen_public_key_with_rng(black_box(&sk), &mut rng))
    });
}

fn regev_encrypt_decrypt(c: &mut Criterion) {
    let params = demo().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let sk = gen_secret_key_with_rng(&params, &mut rng);
    let pk = gen_public_key_with_rng(&sk, &mut rng).unwrap();

    c.bench_function("regev_encrypt", |b| {
        b.iter(|| encrypt_with_rng(black_box(&pk), 1, &mut rng))
    });

    let ct = encrypt_with_rng(&pk, 1, &mut rng).unwrap();
    c.bench_function("regev_decrypt", |b| {
        b.iter(|| decrypt(&sk, black_box(&ct)))
    });
}

fn leveled_keygen(c: &mut Criterion) {
    let params = demo().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2);

    let mut group = c.benchmark_group("leveled_keygen");
    group.sample_size(10);
    group.bench_function("demo", |b| {
        b.iter(|| leveled_keygen_with_rng(black_box(&params), &mut rng))
    });
    group.finish();
}

fn leveled_eval(c: &mut Criterion) {
    let params = demo().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let (pk, evks, _sk) = leveled_keygen_with_rng(&params, &mut rng).unwrap();
    let ct1 = encrypt_with_rng(&pk, 1, &mut rng).unwrap();
    let ct2 = encrypt_with_rng(&pk, 0, &mut rng).unwrap();

    c.bench_function("leveled_add", |b| {
        b.iter(|| leveled_add(&evks[0], black_box(&ct1), black_box(&ct2)))
    });

    c.bench_function("leveled_mul", |b| {
        b.iter(|| leveled_mul(&evks[0], black_box(&ct1), black_box(&ct2)))
    });

    let scheme = LeveledScheme::with_rng(&params, &mut rng).unwrap();
    let h1 = scheme.encrypt_with_rng(1, &mut rng).unwrap();
    let h2 = scheme.encrypt_with_rng(1, &mut rng).unwrap();
    c.bench_function("handle_multiply", |b| {
        b.iter(|| black_box(&h1).multiply(black_box(&h2)))
    });
}

criterion_group!(benches, regev_keygen, regev_encrypt_decrypt, leveled_keygen, leveled_eval);
criterion_main!(benches);
