//! # Brakerski: leveled homomorphic encryption over LWE
//!
//! A Brakerski-style leveled scheme layered over Regev encryption. Each
//! ciphertext carries one bit; ciphertexts can be added (XOR) and multiplied
//! (AND) under encryption until their evaluation keys run out.
//!
//! Every homomorphic operation tensors the operands in powers-of-two form,
//! then key-switches the expanded ciphertext back to dimension n + 1 under
//! the next secret key of a chain sk₀ → sk₁ → … → sk_L. A scheme built with
//! level budget L therefore supports L sequential operations per ciphertext.
//!
//! ## Quick Start
//!
//! ```no_run
//! use brakerski::prelude::*;
//!
//! // n=3, q=2^16, L=1
//! let params = brakerski::params::presets::demo().unwrap();
//! let scheme = LeveledScheme::new(&params).unwrap();
//!
//! let a = scheme.encrypt(1).unwrap();
//! let b = scheme.encrypt(1).unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(scheme.decrypt(&product).unwrap(), 1);
//!
//! // The single level is spent.
//! assert!(matches!(product.add(&a), Err(BrakerskiError::DepthExhausted)));
//! ```

pub mod error;
pub mod logger;
pub mod params;
pub mod lattice;
pub mod sampling;
pub mod regev;
pub mod leveled;

/// Convenient re-exports for common types and functions.
pub mod prelude {
    pub use crate::error::{BrakerskiError, Result};
    pub use crate::params::{Params, ParamsBuilder};
    pub use crate::lattice::{ZqVector, ZqMatrix, bit_decomp, powers_of_two, tensor};
    pub use crate::regev::{
        SecretKey, PublicKey,
        gen_secret_key, gen_public_key, encrypt, decrypt,
    };
    pub use crate::leveled::{
        EvaluationKey, KeyChain, LeveledCiphertext, LeveledScheme,
        gen_switch_key, switch_key,
        leveled_keygen, leveled_add, leveled_mul,
    };
}
