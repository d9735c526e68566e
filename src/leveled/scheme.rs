use std::sync::Arc;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::error::{BrakerskiError, Result};
use crate::leveled::ciphertext::LeveledCiphertext;
use crate::leveled::keygen::{gen_key_chain_with_rng, KeyChain};
use crate::leveled::keyswitch::EvaluationKey;
use crate::params::Params;
use crate::regev::{self, PublicKey, SecretKey};

/// One instance of the leveled scheme: parameters plus its key chain.
///
/// Holds every secret key of the chain, so a handle can be decrypted at
/// whatever level it has reached.
#[derive(Debug)]
pub struct LeveledScheme {
    params: Arc<Params>,
    public_key: PublicKey,
    evaluation_keys: Arc<[EvaluationKey]>,
    secret_keys: Vec<SecretKey>,
}

impl LeveledScheme {
    /// Generate a fresh key chain for `params`.
    pub fn new(params: &Arc<Params>) -> Result<Self> {
        let mut rng = ChaCha20Rng::from_os_rng();
        Self::with_rng(params, &mut rng)
    }

    /// Generate the key chain with provided RNG.
    pub fn with_rng<R: rand::Rng>(params: &Arc<Params>, rng: &mut R) -> Result<Self> {
        let KeyChain { public_key, evaluation_keys, secret_keys } =
            gen_key_chain_with_rng(params, rng)?;
        debug!(
            dimension = params.dimension,
            modulus = params.modulus,
            levels = params.levels,
            "leveled scheme ready"
        );
        Ok(Self {
            params: params.clone(),
            public_key,
            evaluation_keys: evaluation_keys.into(),
            secret_keys,
        })
    }

    pub fn params(&self) -> &Arc<Params> {
        &self.params
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn evaluation_keys(&self) -> &Arc<[EvaluationKey]> {
        &self.evaluation_keys
    }

    /// Encrypt one bit into a fresh handle carrying the full level budget.
    pub fn encrypt(&self, bit: u64) -> Result<LeveledCiphertext> {
        let mut rng = ChaCha20Rng::from_os_rng();
        self.encrypt_with_rng(bit, &mut rng)
    }

    /// Encrypt with provided RNG.
    pub fn encrypt_with_rng<R: rand::Rng>(&self, bit: u64, rng: &mut R) -> Result<LeveledCiphertext> {
        let inner = regev::encrypt_with_rng(&self.public_key, bit, rng)?;
        Ok(LeveledCiphertext::new(inner, self.evaluation_keys.clone()))
    }

    fn key_for(&self, ct: &LeveledCiphertext) -> Result<&SecretKey> {
        self.secret_keys.get(ct.level()).ok_or_else(|| {
            BrakerskiError::InvalidParam(format!(
                "ciphertext level {} is outside this key chain (0..={})",
                ct.level(),
                self.params.levels
            ))
        })
    }

    /// Decrypt under the secret key matching the handle's level.
    pub fn decrypt(&self, ct: &LeveledCiphertext) -> Result<u8> {
        regev::decrypt(self.key_for(ct)?, ct.as_vector())
    }

    /// Distance of the handle's phase from its encoding; see [`regev::noise`].
    pub fn noise(&self, ct: &LeveledCiphertext) -> Result<u64> {
        regev::noise(self.key_for(ct)?, ct.as_vector())
    }
}
