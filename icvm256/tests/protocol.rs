use icvm256::{BigInt, Curve, CurveError, CurveParameters, Point, Signature};

use p256::ecdsa::signature::Verifier;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::OsRng;
use sha3::Keccak256;

fn to_be_bytes_32(value: &BigInt) -> [u8; 32] {
    let (_, bytes) = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

fn sec1_uncompressed(point: &Point) -> Vec<u8> {
    let (x, y) = point.coordinates().unwrap();
    let mut encoded = vec![0x04];
    encoded.extend_from_slice(&to_be_bytes_32(x));
    encoded.extend_from_slice(&to_be_bytes_32(y));
    encoded
}

#[test]
fn signatures_verify_under_p256_crate() {
    let curve = Curve::p256().unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let messages: [&[u8]; 3] = [b"hello world", b"", b"another test and three pugs"];
    for msg in messages {
        let keypair = curve.generate_keypair(&mut rng).unwrap();
        let sig = curve
            .sign_message(&mut rng, keypair.private_key(), msg)
            .unwrap();
        assert!(curve.verify_signature(keypair.public_key(), msg, &sig));

        let verifying_key =
            p256::ecdsa::VerifyingKey::from_sec1_bytes(&sec1_uncompressed(keypair.public_key()))
                .unwrap();
        let p256_sig =
            p256::ecdsa::Signature::from_scalars(to_be_bytes_32(sig.r()), to_be_bytes_32(sig.s()))
                .unwrap();
        assert!(verifying_key.verify(msg, &p256_sig).is_ok());
    }
}

#[test]
fn ecdh_agreement() {
    let curve = Curve::p256().unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let alice = curve.generate_keypair(&mut rng).unwrap();
    let bob = curve.generate_keypair(&mut rng).unwrap();
    let carol = curve.generate_keypair(&mut rng).unwrap();

    let ab = curve
        .ecdh_shared_secret(alice.private_key(), bob.public_key())
        .unwrap();
    let ba = curve
        .ecdh_shared_secret(bob.private_key(), alice.public_key())
        .unwrap();
    let ac = curve
        .ecdh_shared_secret(alice.private_key(), carol.public_key())
        .unwrap();
    assert_eq!(ab, ba);
    assert_ne!(ab, ac);
}

#[test]
fn digest_is_injectable() {
    let sha = Curve::p256().unwrap();
    let keccak = Curve::<Keccak256>::with_digest(CurveParameters::p256()).unwrap();
    let msg = b"digest injection";
    assert_ne!(sha.hash_message(msg), keccak.hash_message(msg));

    let keypair = keccak.generate_keypair(&mut OsRng).unwrap();
    let sig = keccak
        .sign_message(&mut OsRng, keypair.private_key(), msg)
        .unwrap();
    assert!(keccak.verify_signature(keypair.public_key(), msg, &sig));
    assert!(!sha.verify_signature(keypair.public_key(), msg, &sig));
}

#[test]
fn tampered_signatures_are_rejected() {
    let curve = Curve::p256().unwrap();
    let keypair = curve.generate_keypair(&mut OsRng).unwrap();
    let msg = b"pay 10 coins";
    let sig = curve
        .sign_message(&mut OsRng, keypair.private_key(), msg)
        .unwrap();

    assert!(!curve.verify_signature(keypair.public_key(), b"pay 11 coins", &sig));
    let n = curve.order();
    let flipped_r = Signature::new(n - sig.r(), sig.s().clone());
    assert!(!curve.verify_signature(keypair.public_key(), msg, &flipped_r));
    // (r, n - s) is the other valid ECDSA signature for the same nonce
    let malleated = Signature::new(sig.r().clone(), n - sig.s());
    assert!(curve.verify_signature(keypair.public_key(), msg, &malleated));
}

#[test]
fn curve_is_shareable_across_threads() {
    let curve = Curve::p256().unwrap();
    let keypair = curve.generate_keypair(&mut OsRng).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let curve = &curve;
                let keypair = &keypair;
                scope.spawn(move || {
                    let msg = [i; 16];
                    let sig = curve
                        .sign_message(&mut OsRng, keypair.private_key(), &msg)
                        .unwrap();
                    curve.verify_signature(keypair.public_key(), &msg, &sig)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn reference_parameters_are_rejected() {
    let params = CurveParameters::icvm256();
    let result = Curve::new(params.a, params.b, params.p, params.n, params.gx, params.gy);
    assert!(matches!(result, Err(CurveError::InvalidParameter(_))));
}
