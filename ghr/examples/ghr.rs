use ghr::{KeyPair, Message, PrivateKey, PublicKey, SchemeConstants, StrongSignature};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&mut rng, 12).expect("keygen");

    let sk_bytes = bincode::serialize(&keys.private).expect("serialize sk");
    let pk_bytes = bincode::serialize(&keys.public).expect("serialize pk");
    let constants_bytes = bincode::serialize(&keys.constants).expect("serialize constants");

    let msg = Message::from("hello ghr");

    let weak = keys.private.weak_sign(&msg, &keys.constants).expect("weak sign");
    let strong = keys
        .private
        .strong_sign(&mut rng, &msg, &keys.constants)
        .expect("strong sign");
    let sig_bytes = bincode::serialize(&strong).expect("serialize sig");

    let sk2: PrivateKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKey = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    let constants2: SchemeConstants =
        bincode::deserialize(&constants_bytes).expect("deserialize constants");
    let strong2: StrongSignature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let weak_ok = pk2.weak_verify(&msg, &weak, &constants2).expect("weak verify");
    let strong_ok = pk2.strong_verify(&msg, &strong2, &constants2).expect("strong verify");
    assert!(weak_ok);
    assert!(strong_ok);
    assert_eq!(sk2.public_key(), pk2);

    println!("weak: {weak_ok}");
    println!("strong: {strong_ok}");
}
