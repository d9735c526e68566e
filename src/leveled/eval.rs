use std::time::Instant;
use tracing::debug;

use crate::error::{BrakerskiError, Result};
use crate::lattice::modular::round_div;
use crate::lattice::{powers_of_two, tensor, tensor_mod, ZqVector};
use crate::leveled::keyswitch::{switch_key, EvaluationKey};

fn check_operands(c1: &ZqVector, c2: &ZqVector) -> Result<()> {
    if c1.len() != c2.len() {
        return Err(BrakerskiError::DimensionMismatch {
            expected: c1.len(),
            got: c2.len(),
        });
    }
    if c1.modulus != c2.modulus {
        return Err(BrakerskiError::ModulusMismatch);
    }
    Ok(())
}

/// Homomorphic addition (XOR of the encrypted bits), consuming `evk`.
///
/// The sum is tensored with a powers-of-two trivial encryption of 1,
/// (1, 0, ..., 0), so it lives in the same expanded key space as a product
/// and the same evaluation key serves both operations.
pub fn leveled_add(evk: &EvaluationKey, c1: &ZqVector, c2: &ZqVector) -> Result<ZqVector> {
    check_operands(c1, c2)?;
    let start = Instant::now();

    let addition = powers_of_two(&c1.add(c2)?);
    let trivial = powers_of_two(&ZqVector::unit(c1.len(), c1.modulus));
    let expanded = tensor_mod(&addition, &trivial);
    let result = switch_key(evk, &expanded)?;

    debug!("homomorphic add {:?}", start.elapsed());
    Ok(result)
}

/// Homomorphic multiplication (AND of the encrypted bits), consuming `evk`.
///
/// Every entry x of powers_of_two(c1) ⊗ powers_of_two(c2) is rescaled to
/// ⌊2x/q⌉, bringing the product of two q/2-scaled encodings back to scale
/// q/2, then key-switched down to dimension n + 1.
pub fn leveled_mul(evk: &EvaluationKey, c1: &ZqVector, c2: &ZqVector) -> Result<ZqVector> {
    check_operands(c1, c2)?;
    let start = Instant::now();
    let q = c1.modulus;

    let p1 = powers_of_two(c1);
    let p2 = powers_of_two(c2);
    let coeffs = tensor(&p1, &p2)
        .into_iter()
        .map(|x| (round_div(2 * x, q as u128) % q as u128) as u64)
        .collect();
    let rescaled = ZqVector { coeffs, modulus: q };
    let result = switch_key(evk, &rescaled)?;

    debug!("homomorphic mul {:?}", start.elapsed());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use crate::leveled::keygen::leveled_keygen_with_rng;
    use crate::params::presets::demo;
    use crate::regev::{decrypt, encrypt_with_rng};

    #[test]
    fn test_add_truth_table() {
        let params = demo().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(10);
        let (pk, evks, sk) = leveled_keygen_with_rng(&params, &mut rng).unwrap();
        let evk = &evks[0];

        for (m1, m2) in [(0u64, 0u64), (0, 1), (1, 0), (1, 1)] {
            let c1 = encrypt_with_rng(&pk, m1, &mut rng).unwrap();
            let c2 = encrypt_with_rng(&pk, m2, &mut rng).unwrap();
            let result = leveled_add(evk, &c1, &c2).unwrap();
            assert_eq!(result.len(), params.ciphertext_len());
            assert_eq!(decrypt(&sk, &result).unwrap() as u64, (m1 + m2) % 2, "{m1} + {m2}");
        }
    }

    #[test]
    fn test_mul_truth_table() {
        let params = demo().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let (pk, evks, sk) = leveled_keygen_with_rng(&params, &mut rng).unwrap();
        let evk = &evks[0];

        for (m1, m2) in [(0u64, 0u64), (0, 1), (1, 0), (1, 1)] {
            let c1 = encrypt_with_rng(&pk, m1, &mut rng).unwrap();
            let c2 = encrypt_with_rng(&pk, m2, &mut rng).unwrap();
            let result = leveled_mul(evk, &c1, &c2).unwrap();
            assert_eq!(result.len(), params.ciphertext_len());
            assert_eq!(decrypt(&sk, &result).unwrap() as u64, m1 * m2, "{m1} * {m2}");
        }
    }

    #[test]
    fn test_operand_length_mismatch() {
        let params = demo().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let (pk, evks, _sk) = leveled_keygen_with_rng(&params, &mut rng).unwrap();
        let c1 = encrypt_with_rng(&pk, 1, &mut rng).unwrap();
        let c2 = ZqVector::zero(5, params.modulus);
        assert_eq!(
            leveled_add(&evks[0], &c1, &c2).unwrap_err(),
            BrakerskiError::DimensionMismatch { expected: 4, got: 5 }
        );
        assert_eq!(
            leveled_mul(&evks[0], &c1, &c2).unwrap_err(),
            BrakerskiError::DimensionMismatch { expected: 4, got: 5 }
        );
    }

    #[test]
    fn test_evaluation_key_shape_mismatch() {
        // A plain switch key (n·l rows) cannot serve the tensor-expanded input.
        let params = demo().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let (pk, _evks, sk) = leveled_keygen_with_rng(&params, &mut rng).unwrap();
        let wrong = crate::leveled::keyswitch::gen_switch_key_with_rng(
            &sk.vector, &sk.vector, params.sigma, &mut rng,
        ).unwrap();
        let c = encrypt_with_rng(&pk, 0, &mut rng).unwrap();
        assert_eq!(
            leveled_mul(&wrong, &c, &c).unwrap_err(),
            BrakerskiError::DimensionMismatch { expected: 48, got: 65536 }
        );
    }
}
