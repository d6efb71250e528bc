use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ghr::{KeyPair, Message, derive_prime};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghr_keygen");
    for sec_param in [8u32, 12, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(sec_param),
            &sec_param,
            |bencher, &sec_param| {
                let mut rng = StdRng::seed_from_u64(42);
                bencher.iter(|| black_box(KeyPair::generate(&mut rng, sec_param).expect("keygen")))
            },
        );
    }
    group.finish();
}

fn bench_derive_prime(c: &mut Criterion) {
    let k = BigUint::from(0xbeefu32);
    let mask = BigUint::from(0x1234_5678u32);
    let z = BigUint::from(0x2au32);
    c.bench_function("ghr_derive_prime_31_bits", |bencher| {
        bencher.iter(|| black_box(derive_prime(31, &k, &mask, black_box(&z)).expect("derive")))
    });
}

fn bench_weak(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&mut rng, 16).expect("keygen");
    let msg = Message::from("hello world");
    let sig = keys.private.weak_sign(&msg, &keys.constants).expect("sign");

    c.bench_function("ghr_weak_sign", |bencher| {
        bencher.iter(|| {
            let sig = keys
                .private
                .weak_sign(black_box(&msg), &keys.constants)
                .expect("sign");
            black_box(sig);
        })
    });

    c.bench_function("ghr_weak_verify", |bencher| {
        bencher.iter(|| {
            let ok = keys
                .public
                .weak_verify(black_box(&msg), black_box(&sig), &keys.constants)
                .expect("verify");
            black_box(ok);
        })
    });
}

fn bench_strong(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&mut rng, 16).expect("keygen");
    let msg = Message::from("hello world");
    let sig = keys
        .private
        .strong_sign(&mut rng, &msg, &keys.constants)
        .expect("sign");

    c.bench_function("ghr_strong_sign", |bencher| {
        bencher.iter(|| {
            let sig = keys
                .private
                .strong_sign(&mut rng, black_box(&msg), &keys.constants)
                .expect("sign");
            black_box(sig);
        })
    });

    c.bench_function("ghr_strong_verify", |bencher| {
        bencher.iter(|| {
            let ok = keys
                .public
                .strong_verify(black_box(&msg), black_box(&sig), &keys.constants)
                .expect("verify");
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_keygen, bench_derive_prime, bench_weak, bench_strong);
criterion_main!(benches);
