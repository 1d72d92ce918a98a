use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ethauth_crypto::{CurveBackend, Secp256k1, SecretKey};
use ethauth_types::SignatureBlob;

fn keccak256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("keccak256_256B", |b| {
        b.iter(|| ethauth_crypto::keccak256(black_box(&data)))
    });
}

fn hash_signed_message_bench(c: &mut Criterion) {
    let challenge = "A".repeat(88);

    c.bench_function("hash_signed_message_88B", |b| {
        b.iter(|| ethauth_crypto::hash_signed_message(black_box(&challenge)))
    });
}

fn sign_message_bench(c: &mut Criterion) {
    let key = SecretKey::from_bytes(&[0x42; 32]).unwrap();

    c.bench_function("secp256k1_sign_message", |b| {
        b.iter(|| key.sign_message(black_box("bench message")).unwrap())
    });
}

fn recover_bench(c: &mut Criterion) {
    let key = SecretKey::from_bytes(&[0x42; 32]).unwrap();
    let digest = ethauth_crypto::hash_signed_message("bench message");
    let mut bytes = *key.sign_digest(&digest).unwrap().as_bytes();
    ethauth_crypto::normalize_signature(&mut bytes);
    let sig = SignatureBlob::new(bytes);

    c.bench_function("secp256k1_recover_and_derive", |b| {
        b.iter(|| {
            let pk = Secp256k1
                .recover_public_key(black_box(&digest), black_box(&sig))
                .unwrap();
            Secp256k1.derive_account(&pk)
        })
    });
}

fn checksum_bench(c: &mut Criterion) {
    let account = SecretKey::from_bytes(&[0x42; 32]).unwrap().account();

    c.bench_function("eip55_checksum", |b| {
        b.iter(|| ethauth_crypto::to_checksum_address(black_box(&account)))
    });
}

criterion_group!(
    benches,
    keccak256_bench,
    hash_signed_message_bench,
    sign_message_bench,
    recover_bench,
    checksum_bench,
);
criterion_main!(benches);
