use base58check::{Alphabet, Base58, Base58Check, BigUint, HashAlgorithm, HashChecksum};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 4] = [21, 64, 256, 1024];

fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let codec = Base58Check::default();
    let mut group = c.benchmark_group("encode_base58check");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = payload(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let codec = Base58Check::default();
    let mut group = c.benchmark_group("decode_base58check");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let encoded = codec.encode(&payload(size)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &encoded,
            |b, encoded| {
                b.iter(|| codec.decode(black_box(encoded)));
            },
        );
    }
    group.finish();
}

fn bench_checksum_strategies(c: &mut Criterion) {
    let data = payload(64);
    let mut group = c.benchmark_group("encode_checksum_strategy");

    for algorithm in [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake3,
    ] {
        let codec = Base58Check::builder()
            .checksum_strategy(HashChecksum::new(algorithm, 2).unwrap())
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.as_str()),
            &data,
            |b, data| {
                b.iter(|| codec.encode(black_box(data)));
            },
        );
    }
    group.finish();
}

fn bench_integers(c: &mut Criterion) {
    let codec = Base58::with_alphabet(Alphabet::bitcoin()).unwrap();
    let mut group = c.benchmark_group("base58_integer");

    for size in SIZES {
        let value = BigUint::from_bytes_be(&payload(size));
        let encoded = codec.encode(&value);

        group.bench_with_input(BenchmarkId::new("encode", size), &value, |b, value| {
            b.iter(|| codec.encode(black_box(value)));
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_checksum_strategies,
    bench_integers
);
criterion_main!(benches);
