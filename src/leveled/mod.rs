pub mod keyswitch;
pub mod keygen;
pub mod eval;
pub mod ciphertext;
pub mod scheme;

pub use keyswitch::{EvaluationKey, gen_switch_key, gen_switch_key_with_rng, switch_key};
pub use keygen::{
    KeyChain, expanded_secret_key,
    gen_key_chain, gen_key_chain_with_rng,
    leveled_keygen, leveled_keygen_with_rng,
};
pub use eval::{leveled_add, leveled_mul};
pub use ciphertext::LeveledCiphertext;
pub use scheme::LeveledScheme;
