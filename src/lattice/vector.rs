use crate::error::{BrakerskiError, Result};
use crate::lattice::modular::{centered, mod_add, mod_mul, mod_neg, mod_sub, reduce_signed};

/// Vector over Z_q.
#[derive(Clone, Debug)]
pub struct ZqVector {
    pub coeffs: Vec<u64>,
    pub modulus: u64,
}

impl ZqVector {
    /// Create the zero vector of length n in Z_q.
    pub fn zero(n: usize, modulus: u64) -> Self {
        Self {
            coeffs: vec![0u64; n],
            modulus,
        }
    }

    /// Create a vector from entries (reduced mod q).
    pub fn from_coeffs(coeffs: Vec<u64>, modulus: u64) -> Self {
        let mut v = Self { coeffs, modulus };
        v.reduce();
        v
    }

    /// Create a vector from signed entries, wrapping negatives to q - |x|.
    pub fn from_signed(values: &[i64], modulus: u64) -> Self {
        let coeffs = values.iter().map(|&x| reduce_signed(x, modulus)).collect();
        Self { coeffs, modulus }
    }

    /// The vector [1, 0, ..., 0] of length n.
    pub fn unit(n: usize, modulus: u64) -> Self {
        let mut v = Self::zero(n, modulus);
        if let Some(first) = v.coeffs.first_mut() {
            *first = 1 % modulus;
        }
        v
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Reduce all entries mod q.
    pub fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c %= self.modulus;
        }
    }

    fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(BrakerskiError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        if self.modulus != other.modulus {
            return Err(BrakerskiError::ModulusMismatch);
        }
        Ok(())
    }

    /// Entry-wise addition mod q.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let coeffs = self.coeffs.iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| mod_add(a, b, self.modulus))
            .collect();
        Ok(Self { coeffs, modulus: self.modulus })
    }

    /// Entry-wise subtraction mod q.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_compatible(other)?;
        let coeffs = self.coeffs.iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| mod_sub(a, b, self.modulus))
            .collect();
        Ok(Self { coeffs, modulus: self.modulus })
    }

    pub fn neg(&self) -> Self {
        let coeffs = self.coeffs.iter()
            .map(|&a| mod_neg(a, self.modulus))
            .collect();
        Self { coeffs, modulus: self.modulus }
    }

    /// Multiply by a scalar.
    pub fn scalar_mul(&self, scalar: u64) -> Self {
        let s = scalar % self.modulus;
        let coeffs = self.coeffs.iter()
            .map(|&c| mod_mul(c, s, self.modulus))
            .collect();
        Self { coeffs, modulus: self.modulus }
    }

    /// Inner product mod q.
    pub fn dot(&self, other: &Self) -> Result<u64> {
        self.check_compatible(other)?;
        let q = self.modulus as u128;
        let acc = self.coeffs.iter()
            .zip(other.coeffs.iter())
            .fold(0u128, |acc, (&a, &b)| (acc + a as u128 * b as u128) % q);
        Ok(acc as u64)
    }

    /// (1, v): the secret-key extension every ciphertext is decrypted against.
    pub fn prepend_one(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.len() + 1);
        coeffs.push(1 % self.modulus);
        coeffs.extend_from_slice(&self.coeffs);
        Self { coeffs, modulus: self.modulus }
    }

    /// Centered representation: map [0, q) -> (-q/2, q/2]
    pub fn centered_coeffs(&self) -> Vec<i64> {
        self.coeffs.iter().map(|&c| centered(c, self.modulus)).collect()
    }
}

impl PartialEq for ZqVector {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.coeffs == other.coeffs
    }
}

impl Eq for ZqVector {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = ZqVector::from_coeffs(vec![1, 2, 3, 4], 17);
        let b = ZqVector::from_coeffs(vec![5, 6, 7, 16], 17);
        let c = a.add(&b).unwrap();
        assert_eq!(c.coeffs, vec![6, 8, 10, 3]);
        assert_eq!(c.sub(&b).unwrap(), a);
    }

    #[test]
    fn test_neg() {
        let a = ZqVector::from_coeffs(vec![1, 0, 3, 16], 17);
        let zero = a.add(&a.neg()).unwrap();
        assert_eq!(zero, ZqVector::zero(4, 17));
    }

    #[test]
    fn test_dot() {
        let a = ZqVector::from_coeffs(vec![1, 2, 3, 4], 1 << 16);
        let b = ZqVector::from_coeffs(vec![5, 6, 7, 8], 1 << 16);
        assert_eq!(a.dot(&b).unwrap(), 70);

        let big = ZqVector::from_coeffs(vec![16, 16], 17);
        assert_eq!(big.dot(&big).unwrap(), 2);
    }

    #[test]
    fn test_length_mismatch() {
        let a = ZqVector::zero(3, 17);
        let b = ZqVector::zero(4, 17);
        assert_eq!(
            a.add(&b).unwrap_err(),
            BrakerskiError::DimensionMismatch { expected: 3, got: 4 }
        );
        assert_eq!(
            a.dot(&ZqVector::zero(3, 19)).unwrap_err(),
            BrakerskiError::ModulusMismatch
        );
    }

    #[test]
    fn test_prepend_one_and_unit() {
        let s = ZqVector::from_coeffs(vec![7, 8, 9], 17);
        assert_eq!(s.prepend_one().coeffs, vec![1, 7, 8, 9]);
        assert_eq!(ZqVector::unit(4, 17).coeffs, vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_signed_and_centered() {
        let v = ZqVector::from_signed(&[-1, 0, 5, -8], 17);
        assert_eq!(v.coeffs, vec![16, 0, 5, 9]);
        assert_eq!(v.centered_coeffs(), vec![-1, 0, 5, -8]);
    }
}
