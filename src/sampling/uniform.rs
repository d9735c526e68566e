use rand::Rng;
use crate::lattice::{ZqMatrix, ZqVector};

/// Draw one residue uniformly from [0, modulus).
#[inline]
fn sample_uniform_residue<R: Rng>(modulus: u64, mask: u64, rng: &mut R) -> u64 {
    // Rejection sampling to avoid bias
    loop {
        let val = rng.random::<u64>() & mask;
        if val < modulus {
            break val;
        }
    }
}

fn rejection_mask(modulus: u64) -> u64 {
    if modulus.is_power_of_two() {
        modulus - 1
    } else {
        (1u64 << (64 - modulus.leading_zeros())) - 1
    }
}

/// Sample a vector with entries uniform in [0, modulus).
pub fn sample_uniform_vector<R: Rng>(len: usize, modulus: u64, rng: &mut R) -> ZqVector {
    let mask = rejection_mask(modulus);
    let coeffs = (0..len)
        .map(|_| sample_uniform_residue(modulus, mask, rng))
        .collect();
    ZqVector { coeffs, modulus }
}

/// Sample a rows × cols matrix with entries uniform in [0, modulus).
pub fn sample_uniform_matrix<R: Rng>(rows: usize, cols: usize, modulus: u64, rng: &mut R) -> ZqMatrix {
    let mask = rejection_mask(modulus);
    let data = (0..rows * cols)
        .map(|_| sample_uniform_residue(modulus, mask, rng))
        .collect();
    ZqMatrix { rows, cols, data, modulus }
}

/// Sample a vector with entries in {0, 1}.
pub fn sample_binary_vector<R: Rng>(len: usize, modulus: u64, rng: &mut R) -> ZqVector {
    let coeffs = (0..len)
        .map(|_| rng.random::<u64>() & 1)
        .collect();
    ZqVector { coeffs, modulus }
}
