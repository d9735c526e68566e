use rayon::prelude::*;

use crate::error::{BrakerskiError, Result};
use crate::lattice::modular::mod_neg;
use crate::lattice::vector::ZqVector;

/// Dense row-major matrix over Z_q.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZqMatrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<u64>,
    pub modulus: u64,
}

impl ZqMatrix {
    pub fn zero(rows: usize, cols: usize, modulus: u64) -> Self {
        Self {
            rows,
            cols,
            data: vec![0u64; rows * cols],
            modulus,
        }
    }

    /// Build from row-major entries (reduced mod q).
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<u64>, modulus: u64) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(BrakerskiError::DimensionMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        let data = data.into_iter().map(|x| x % modulus).collect();
        Ok(Self { rows, cols, data, modulus })
    }

    /// Assemble an LWE key matrix [b | -A].
    ///
    /// Row i is (b_i, -A_i0, ..., -A_i(k-1)), so that P·(1, s) = b - A·s.
    pub fn from_key_parts(b: &ZqVector, a: &ZqMatrix) -> Result<Self> {
        if b.len() != a.rows {
            return Err(BrakerskiError::DimensionMismatch {
                expected: a.rows,
                got: b.len(),
            });
        }
        if b.modulus != a.modulus {
            return Err(BrakerskiError::ModulusMismatch);
        }
        let q = a.modulus;
        let cols = a.cols + 1;
        let mut data = Vec::with_capacity(a.rows * cols);
        for (i, &b_i) in b.coeffs.iter().enumerate() {
            data.push(b_i);
            data.extend(a.row(i).iter().map(|&x| mod_neg(x, q)));
        }
        Ok(Self { rows: a.rows, cols, data, modulus: q })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn get(&self, i: usize, j: usize) -> u64 {
        self.data[i * self.cols + j]
    }

    /// M·v mod q. Rows are independent and computed in parallel.
    pub fn mul_vec(&self, v: &ZqVector) -> Result<ZqVector> {
        if v.len() != self.cols {
            return Err(BrakerskiError::DimensionMismatch {
                expected: self.cols,
                got: v.len(),
            });
        }
        if v.modulus != self.modulus {
            return Err(BrakerskiError::ModulusMismatch);
        }
        let q = self.modulus as u128;
        let coeffs = if self.cols == 0 {
            vec![0u64; self.rows]
        } else {
            self.data
                .par_chunks(self.cols)
                .map(|row| {
                    row.iter()
                        .zip(v.coeffs.iter())
                        .fold(0u128, |acc, (&m, &x)| (acc + m as u128 * x as u128) % q)
                        as u64
                })
                .collect()
        };
        Ok(ZqVector { coeffs, modulus: self.modulus })
    }

    /// Mᵗ·v mod q.
    pub fn transpose_mul_vec(&self, v: &ZqVector) -> Result<ZqVector> {
        if v.len() != self.rows {
            return Err(BrakerskiError::DimensionMismatch {
                expected: self.rows,
                got: v.len(),
            });
        }
        if v.modulus != self.modulus {
            return Err(BrakerskiError::ModulusMismatch);
        }
        let q = self.modulus as u128;
        let mut acc = vec![0u128; self.cols];
        for (i, &x) in v.coeffs.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (a, &m) in acc.iter_mut().zip(self.row(i)) {
                *a = (*a + m as u128 * x as u128) % q;
            }
        }
        Ok(ZqVector {
            coeffs: acc.into_iter().map(|a| a as u64).collect(),
            modulus: self.modulus,
        })
    }
}
