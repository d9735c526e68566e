use std::fmt;
use std::sync::Arc;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;
use zeroize::Zeroize;

use crate::error::Result;
use crate::lattice::{ZqMatrix, ZqVector};
use crate::params::Params;
use crate::sampling::{sample_gaussian_vector, sample_uniform_matrix, sample_uniform_vector};

/// Regev secret key: s ∈ Z_q^n, uniform.
pub struct SecretKey {
    pub vector: ZqVector,
    pub params: Arc<Params>,
}

impl SecretKey {
    /// (1, s): the vector a ciphertext's phase is measured against.
    pub fn extended(&self) -> ZqVector {
        self.vector.prepend_one()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        // Zero out secret key material
        self.vector.coeffs.zeroize();
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("dimension", &self.vector.len())
            .field("modulus", &self.vector.modulus)
            .finish_non_exhaustive()
    }
}

/// Regev public key P = [b | -A] with b = A·s + e.
///
/// Shape (N, n + 1) with N = (n + 1)·(l + 1).
#[derive(Clone, Debug)]
pub struct PublicKey {
    pub matrix: ZqMatrix,
    pub params: Arc<Params>,
}

impl PublicKey {
    pub fn shape(&self) -> (usize, usize) {
        self.matrix.shape()
    }
}

/// Generate a secret key.
pub fn gen_secret_key(params: &Arc<Params>) -> SecretKey {
    let mut rng = ChaCha20Rng::from_os_rng();
    gen_secret_key_with_rng(params, &mut rng)
}

/// Generate a secret key with a provided RNG.
pub fn gen_secret_key_with_rng<R: rand::Rng>(params: &Arc<Params>, rng: &mut R) -> SecretKey {
    let vector = sample_uniform_vector(params.dimension, params.modulus, rng);
    SecretKey {
        vector,
        params: params.clone(),
    }
}

/// Generate a public key from a secret key.
pub fn gen_public_key(sk: &SecretKey) -> Result<PublicKey> {
    let mut rng = ChaCha20Rng::from_os_rng();
    gen_public_key_with_rng(sk, &mut rng)
}

/// Generate a public key with a provided RNG.
pub fn gen_public_key_with_rng<R: rand::Rng>(sk: &SecretKey, rng: &mut R) -> Result<PublicKey> {
    let (pk, _e) = gen_public_key_and_error(sk, rng)?;
    Ok(pk)
}

/// Public key together with the error vector e it hides, so P·(1, s) = e.
pub(crate) fn gen_public_key_and_error<R: rand::Rng>(
    sk: &SecretKey,
    rng: &mut R,
) -> Result<(PublicKey, ZqVector)> {
    let params = &sk.params;
    let q = params.modulus;
    let rows = params.public_key_rows();

    let a = sample_uniform_matrix(rows, params.dimension, q, rng);
    let e = sample_gaussian_vector(rows, q, params.sigma, rng);

    // b = A·s + e
    let b = a.mul_vec(&sk.vector)?.add(&e)?;
    let matrix = ZqMatrix::from_key_parts(&b, &a)?;
    trace!(rows = matrix.rows, cols = matrix.cols, "public key generated");

    Ok((
        PublicKey {
            matrix,
            params: params.clone(),
        },
        e,
    ))
}
