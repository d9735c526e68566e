use std::sync::Arc;
use std::time::Instant;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::{BrakerskiError, Result};
use crate::lattice::{bit_decomp, tensor_mod, ZqVector};
use crate::leveled::keyswitch::{gen_switch_key_with_rng, EvaluationKey};
use crate::params::Params;
use crate::regev::{gen_public_key_with_rng, gen_secret_key_with_rng, PublicKey, SecretKey};

/// Every key of a leveled instance.
///
/// `secret_keys[i]` decrypts ciphertexts that have gone through i
/// homomorphic operations; `evaluation_keys[i]` switches from the expanded
/// form of `secret_keys[i]` to `secret_keys[i + 1]`.
#[derive(Debug)]
pub struct KeyChain {
    pub public_key: PublicKey,
    pub evaluation_keys: Vec<EvaluationKey>,
    pub secret_keys: Vec<SecretKey>,
}

/// Tensor-expanded secret key of one level: bit_decomp(1, s) ⊗ bit_decomp(1, s).
///
/// A tensor of powers-of-two ciphertexts has phase ⟨c1, (1,s)⟩·⟨c2, (1,s)⟩
/// against this vector. Length ((n + 1)·l)².
pub fn expanded_secret_key(sk: &SecretKey) -> ZqVector {
    let decomposed = bit_decomp(&sk.extended());
    tensor_mod(&decomposed, &decomposed)
}

/// Generate the full key chain.
pub fn gen_key_chain(params: &Arc<Params>) -> Result<KeyChain> {
    let mut rng = ChaCha20Rng::from_os_rng();
    gen_key_chain_with_rng(params, &mut rng)
}

/// Generate the full key chain with provided RNG.
///
/// Evaluation keys are built in parallel, each level from its own ChaCha20
/// stream seeded by `rng`, so a seeded caller gets a reproducible chain.
pub fn gen_key_chain_with_rng<R: Rng>(params: &Arc<Params>, rng: &mut R) -> Result<KeyChain> {
    let start = Instant::now();

    let secret_keys: Vec<SecretKey> = (0..=params.levels)
        .map(|_| gen_secret_key_with_rng(params, rng))
        .collect();
    let public_key = gen_public_key_with_rng(&secret_keys[0], rng)?;

    let seeds: Vec<[u8; 32]> = (0..params.levels)
        .map(|_| {
            let mut seed = [0u8; 32];
            rng.fill(&mut seed[..]);
            seed
        })
        .collect();

    let evaluation_keys = seeds
        .into_par_iter()
        .enumerate()
        .map(|(level, seed)| {
            let mut level_rng = ChaCha20Rng::from_seed(seed);
            let mut expanded = expanded_secret_key(&secret_keys[level]);
            debug_assert_eq!(expanded.len(), params.expanded_key_len());
            let evk = gen_switch_key_with_rng(
                &expanded,
                &secret_keys[level + 1].vector,
                params.sigma,
                &mut level_rng,
            );
            expanded.coeffs.zeroize();
            evk
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        levels = params.levels,
        evk_rows = params.evaluation_key_rows(),
        "key chain generated {:?}",
        start.elapsed()
    );

    Ok(KeyChain {
        public_key,
        evaluation_keys,
        secret_keys,
    })
}

/// Generate (public key, evaluation keys in level order, final secret key).
///
/// The returned secret key is the last one of the chain: it decrypts a
/// ciphertext once all L evaluation keys have been consumed.
pub fn leveled_keygen(params: &Arc<Params>) -> Result<(PublicKey, Vec<EvaluationKey>, SecretKey)> {
    let mut rng = ChaCha20Rng::from_os_rng();
    leveled_keygen_with_rng(params, &mut rng)
}

/// [`leveled_keygen`] with provided RNG.
pub fn leveled_keygen_with_rng<R: Rng>(
    params: &Arc<Params>,
    rng: &mut R,
) -> Result<(PublicKey, Vec<EvaluationKey>, SecretKey)> {
    let KeyChain { public_key, evaluation_keys, mut secret_keys } =
        gen_key_chain_with_rng(params, rng)?;
    let sk = secret_keys
        .pop()
        .ok_or_else(|| BrakerskiError::InvalidParam("empty key chain".into()))?;
    Ok((public_key, evaluation_keys, sk))
}
