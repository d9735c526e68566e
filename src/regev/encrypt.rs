use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::{BrakerskiError, Result};
use crate::lattice::modular::{centered, mod_sub, round_div};
use crate::lattice::ZqVector;
use crate::regev::keygen::{PublicKey, SecretKey};
use crate::sampling::sample_binary_vector;

/// Encrypt a single bit with the public key.
///
/// c = Pᵗ·r + ⌊q/2⌋·(m, 0, ..., 0) with r ∈ {0,1}^N.
pub fn encrypt(pk: &PublicKey, bit: u64) -> Result<ZqVector> {
    let mut rng = ChaCha20Rng::from_os_rng();
    encrypt_with_rng(pk, bit, &mut rng)
}

/// Encrypt with provided RNG (for deterministic testing).
pub fn encrypt_with_rng<R: rand::Rng>(pk: &PublicKey, bit: u64, rng: &mut R) -> Result<ZqVector> {
    if bit > 1 {
        return Err(BrakerskiError::InvalidPlaintext(bit));
    }
    let params = &pk.params;
    let q = params.modulus;

    let r = sample_binary_vector(params.public_key_rows(), q, rng);
    let mut c = pk.matrix.transpose_mul_vec(&r)?;

    // Embed m at the MSB of the first component
    let m = ZqVector::unit(params.ciphertext_len(), q).scalar_mul(bit * params.half_modulus());
    c = c.add(&m)?;
    Ok(c)
}

/// Phase ⟨c, (1, s)⟩ mod q.
fn phase(sk: &SecretKey, c: &ZqVector) -> Result<u64> {
    let expected = sk.params.ciphertext_len();
    if c.len() != expected {
        return Err(BrakerskiError::DimensionMismatch {
            expected,
            got: c.len(),
        });
    }
    c.dot(&sk.extended())
}

/// Decrypt a ciphertext: ⌊2·⟨c, (1, s)⟩ / q⌉ mod 2.
///
/// Noise beyond q/4 is not detected; the returned bit is simply wrong.
pub fn decrypt(sk: &SecretKey, c: &ZqVector) -> Result<u8> {
    let q = sk.params.modulus;
    let x = phase(sk, c)?;
    let rounded = round_div(2 * x as u128, q as u128);
    Ok((rounded % 2) as u8)
}

/// Distance of the phase from the nearest valid encoding {0, q/2}.
///
/// Decryption is correct while this stays below q/4.
pub fn noise(sk: &SecretKey, c: &ZqVector) -> Result<u64> {
    let q = sk.params.modulus;
    let x = phase(sk, c)?;
    let to_zero = centered(x, q).unsigned_abs();
    let to_half = centered(mod_sub(x, sk.params.half_modulus(), q), q).unsigned_abs();
    Ok(to_zero.min(to_half))
}
