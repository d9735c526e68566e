pub mod keygen;
pub mod encrypt;

pub use keygen::{
    SecretKey, PublicKey,
    gen_secret_key, gen_secret_key_with_rng,
    gen_public_key, gen_public_key_with_rng,
};
pub use encrypt::{encrypt, encrypt_with_rng, decrypt, noise};
