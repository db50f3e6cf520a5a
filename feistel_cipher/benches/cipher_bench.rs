use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use feistel_cipher::crypto::cipher_context::CipherContext;
use feistel_cipher::crypto::cipher_types::PaddingPolicy;
use feistel_cipher::crypto::des::DES;
use rand::RngCore;

fn bench_des_ecb(c: &mut Criterion) {
    let mut data = vec![0u8; 1024 * 1024];
    rand::rng().fill_bytes(&mut data);

    let mut ctx = CipherContext::new(Box::new(DES::default()), PaddingPolicy::Lenient);
    ctx.set_key(&[0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1])
        .unwrap();

    let mut group = c.benchmark_group("DES ECB");
    group.bench_function(BenchmarkId::new("encrypt", "1MB"), |b| {
        b.iter(|| ctx.encrypt(&data))
    });

    let ciphertext = ctx.encrypt(&data);
    group.bench_function(BenchmarkId::new("decrypt", "1MB"), |b| {
        b.iter(|| ctx.decrypt(&ciphertext).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_des_ecb);
criterion_main!(benches);
