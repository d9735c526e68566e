pub mod presets;

use std::sync::Arc;
use crate::error::{BrakerskiError, Result};
use crate::lattice::modular::bit_length;

/// Largest supported modulus: every intermediate product of two residues and
/// the rescale numerator 4·x·y must fit in a u128.
pub const MAX_MODULUS: u64 = 1 << 62;

/// Parameters of a leveled scheme instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Length n of each base secret key.
    pub dimension: usize,
    /// Ciphertext modulus q.
    pub modulus: u64,
    /// Level budget L: evaluation keys generated, i.e. homomorphic
    /// operations available to each fresh ciphertext.
    pub levels: usize,
    /// Standard deviation of the LWE error distribution.
    pub sigma: f64,
}

impl Params {
    /// l = ⌈log2 q⌉.
    pub fn bit_length(&self) -> usize {
        bit_length(self.modulus)
    }

    /// Length of a ciphertext: n + 1.
    pub fn ciphertext_len(&self) -> usize {
        self.dimension + 1
    }

    /// Rows N = (n + 1)·(l + 1) of the public key.
    pub fn public_key_rows(&self) -> usize {
        self.ciphertext_len() * (self.bit_length() + 1)
    }

    /// Length ((n + 1)·l)² of the tensor-expanded secret key of one level.
    pub fn expanded_key_len(&self) -> usize {
        let d = self.ciphertext_len() * self.bit_length();
        d * d
    }

    /// Rows of every evaluation key in the chain: the expanded key length
    /// times l, one row per bit of the decomposed tensor ciphertext.
    pub fn evaluation_key_rows(&self) -> usize {
        self.expanded_key_len() * self.bit_length()
    }

    /// q/2, the encoding of plaintext bit 1.
    pub fn half_modulus(&self) -> u64 {
        self.modulus / 2
    }
}

/// Builder for Params.
pub struct ParamsBuilder {
    dimension: usize,
    modulus: u64,
    levels: usize,
    sigma: f64,
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamsBuilder {
    pub fn new() -> Self {
        Self {
            dimension: 3,
            modulus: 1 << 16,
            levels: 1,
            sigma: 2.0,
        }
    }

    pub fn dimension(mut self, n: usize) -> Self {
        self.dimension = n;
        self
    }

    pub fn modulus(mut self, q: u64) -> Self {
        self.modulus = q;
        self
    }

    /// Set q = 2^bits.
    pub fn modulus_bits(mut self, bits: u32) -> Self {
        self.modulus = 1u64.checked_shl(bits).unwrap_or(0);
        self
    }

    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn build(self) -> Result<Arc<Params>> {
        if self.modulus < 2 {
            return Err(BrakerskiError::InvalidParam(
                format!("modulus must be >= 2, got {}", self.modulus)
            ));
        }
        if self.modulus > MAX_MODULUS {
            return Err(BrakerskiError::InvalidParam(
                format!("modulus must be <= 2^62, got {}", self.modulus)
            ));
        }
        if self.dimension == 0 {
            return Err(BrakerskiError::InvalidParam("dimension must be >= 1".into()));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(BrakerskiError::InvalidParam(
                format!("sigma must be positive, got {}", self.sigma)
            ));
        }

        Ok(Arc::new(Params {
            dimension: self.dimension,
            modulus: self.modulus,
            levels: self.levels,
            sigma: self.sigma,
        }))
    }
}
