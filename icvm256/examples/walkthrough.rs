use icvm256::config::Settings;
use rand_core::OsRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let settings = Settings::load()?;
    println!("settings: {:?}", settings);
    let curve = settings.build_curve()?;

    let mut rng = OsRng;
    let alice = curve.generate_keypair(&mut rng)?;
    let bob = curve.generate_keypair(&mut rng)?;
    println!("alice public key: {}", alice.public_key());
    println!("bob public key: {}", bob.public_key());

    let alice_secret = curve.ecdh_shared_secret(alice.private_key(), bob.public_key())?;
    let bob_secret = curve.ecdh_shared_secret(bob.private_key(), alice.public_key())?;
    println!("shared secret: {:x}", alice_secret);
    println!("secrets agree: {}", alice_secret == bob_secret);

    let msg = b"Hello, ICVM256!";
    let signature = curve.sign_message(&mut rng, alice.private_key(), msg)?;
    println!("r: {:x}", signature.r());
    println!("s: {:x}", signature.s());
    println!(
        "valid: {}",
        curve.verify_signature(alice.public_key(), msg, &signature)
    );
    println!(
        "valid for tampered message: {}",
        curve.verify_signature(alice.public_key(), b"Hello, ICVM257!", &signature)
    );
    Ok(())
}
