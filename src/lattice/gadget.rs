//! Gadget decomposition over Z_q with base 2.
//!
//! `bit_decomp` and `powers_of_two` are dual: for equal-length x, y,
//!
//! ⟨x, y⟩ ≡ ⟨bit_decomp(x), powers_of_two(y)⟩ (mod q).
//!
//! Both emit l = ⌈log2 q⌉ entries per input entry, least-significant first,
//! and concatenate across entries. Key switching and the tensor-expanded
//! evaluation keys rely on this exact layout.

use crate::lattice::modular::{bit_length, mod_add};
use crate::lattice::vector::ZqVector;

/// Binary expansion of every entry, LSB first.
///
/// Entries are read as residues in [0, q); the output has length `len(v)·l`.
pub fn bit_decomp(v: &ZqVector) -> ZqVector {
    let q = v.modulus;
    let l = bit_length(q);
    let mut coeffs = Vec::with_capacity(v.len() * l);
    for &x in &v.coeffs {
        let x = x % q;
        coeffs.extend((0..l).map(|i| (x >> i) & 1));
    }
    ZqVector { coeffs, modulus: q }
}

/// Inverse of [`bit_decomp`] on reduced inputs: Σ_i bits[i]·2^i per block of l.
pub fn bit_recompose(bits: &ZqVector) -> ZqVector {
    let q = bits.modulus;
    let l = bit_length(q);
    let coeffs = bits.coeffs
        .chunks(l)
        .map(|block| {
            block.iter().rev().fold(0u64, |acc, &b| mod_add(mod_add(acc, acc, q), b % q, q))
        })
        .collect();
    ZqVector { coeffs, modulus: q }
}

/// Scale every entry by 2^0, 2^1, ..., 2^(l-1) mod q.
pub fn powers_of_two(v: &ZqVector) -> ZqVector {
    let q = v.modulus;
    let l = bit_length(q);
    let mut coeffs = Vec::with_capacity(v.len() * l);
    for &x in &v.coeffs {
        let mut scaled = x % q;
        for _ in 0..l {
            coeffs.push(scaled);
            scaled = mod_add(scaled, scaled, q);
        }
    }
    ZqVector { coeffs, modulus: q }
}

/// Flattened outer product a ⊗ b, row-major: entry (i, j) lands at i·len(b) + j.
///
/// Entries are full integer products in u128, not reduced mod q; callers
/// either reduce or rescale them.
pub fn tensor(a: &ZqVector, b: &ZqVector) -> Vec<u128> {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for &x in &a.coeffs {
        out.extend(b.coeffs.iter().map(|&y| x as u128 * y as u128));
    }
    out
}

/// [`tensor`] reduced into Z_q.
pub fn tensor_mod(a: &ZqVector, b: &ZqVector) -> ZqVector {
    let q = a.modulus;
    let coeffs = tensor(a, b)
        .into_iter()
        .map(|x| (x % q as u128) as u64)
        .collect();
    ZqVector { coeffs, modulus: q }
}
