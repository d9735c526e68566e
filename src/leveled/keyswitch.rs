use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::error::{BrakerskiError, Result};
use crate::lattice::modular::bit_length;
use crate::lattice::{bit_decomp, powers_of_two, ZqMatrix, ZqVector};
use crate::sampling::{sample_gaussian_vector, sample_uniform_matrix};

/// Key-switching matrix from a source key s to a target key (1, t).
///
/// Row i is (b_i, -A_i) with b = A·t + e + powers_of_two(s), so a ciphertext
/// under s, bit-decomposed, selects rows whose (1, t)-phases sum to ⟨c, s⟩
/// plus a small error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationKey {
    pub matrix: ZqMatrix,
}

impl EvaluationKey {
    /// (len(s)·l, len(t) + 1).
    pub fn shape(&self) -> (usize, usize) {
        self.matrix.shape()
    }

    pub fn modulus(&self) -> u64 {
        self.matrix.modulus
    }
}

/// Generate a key that switches ciphertexts under `s` into ciphertexts under `(1, t)`.
pub fn gen_switch_key(s: &ZqVector, t: &ZqVector, sigma: f64) -> Result<EvaluationKey> {
    let mut rng = ChaCha20Rng::from_os_rng();
    gen_switch_key_with_rng(s, t, sigma, &mut rng)
}

/// Generate a key-switching key with provided RNG.
pub fn gen_switch_key_with_rng<R: rand::Rng>(
    s: &ZqVector,
    t: &ZqVector,
    sigma: f64,
    rng: &mut R,
) -> Result<EvaluationKey> {
    let (evk, _e) = gen_switch_key_and_error(s, t, sigma, rng)?;
    Ok(evk)
}

/// Key-switching key together with its error vector e.
///
/// For every c under s: ⟨c, s⟩ ≡ ⟨switch_key(evk, c), (1, t)⟩ - ⟨bit_decomp(c), e⟩.
pub(crate) fn gen_switch_key_and_error<R: rand::Rng>(
    s: &ZqVector,
    t: &ZqVector,
    sigma: f64,
    rng: &mut R,
) -> Result<(EvaluationKey, ZqVector)> {
    if s.modulus != t.modulus {
        return Err(BrakerskiError::ModulusMismatch);
    }
    let q = s.modulus;
    let s_p2 = powers_of_two(s);
    let rows = s_p2.len();

    let a = sample_uniform_matrix(rows, t.len(), q, rng);
    let e = sample_gaussian_vector(rows, q, sigma, rng);

    // b = A·t + e + powers_of_two(s)
    let b = a.mul_vec(t)?.add(&e)?.add(&s_p2)?;
    let matrix = ZqMatrix::from_key_parts(&b, &a)?;
    trace!(rows = matrix.rows, cols = matrix.cols, "switch key generated");

    Ok((EvaluationKey { matrix }, e))
}

/// Apply a key-switching key: evkᵗ · bit_decomp(c) mod q.
///
/// The key must have exactly len(c)·l rows.
pub fn switch_key(evk: &EvaluationKey, c: &ZqVector) -> Result<ZqVector> {
    if c.modulus != evk.modulus() {
        return Err(BrakerskiError::ModulusMismatch);
    }
    let decomposed_len = c.len() * bit_length(c.modulus);
    if evk.matrix.rows != decomposed_len {
        return Err(BrakerskiError::DimensionMismatch {
            expected: evk.matrix.rows,
            got: decomposed_len,
        });
    }
    evk.matrix.transpose_mul_vec(&bit_decomp(c))
}
