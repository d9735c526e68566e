use rand::Rng;
use crate::lattice::modular::reduce_signed;
use crate::lattice::ZqVector;

/// Cumulative distribution table for the discrete Gaussian over Z,
/// centered at 0, truncated at ±⌈6σ⌉.
struct GaussianCdt {
    tail: i64,
    cdf: Vec<f64>,
    total: f64,
}

impl GaussianCdt {
    fn new(sigma: f64) -> Self {
        let tail = (6.0 * sigma).ceil() as i64;
        let table_size = (2 * tail + 1) as usize;
        let mut cdf = Vec::with_capacity(table_size);
        let mut cumulative = 0.0f64;
        let two_sigma_sq = 2.0 * sigma * sigma;

        for x in -tail..=tail {
            let prob = (-((x * x) as f64) / two_sigma_sq).exp();
            cumulative += prob;
            cdf.push(cumulative);
        }

        Self { tail, cdf, total: cumulative }
    }

    /// The scan is branchless: every CDF entry is visited and a conditional
    /// select on integer masks picks the result.
    fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        let u: f64 = rng.random::<f64>() * self.total;

        let mut result = self.tail;
        for i in (0..self.cdf.len()).rev() {
            let cmp = u < self.cdf[i];
            let mask = (cmp as i64).wrapping_neg();
            let candidate = -self.tail + i as i64;
            result = (candidate & mask) | (result & !mask);
        }

        result
    }
}

/// Sample a single value from the discrete Gaussian over Z with standard
/// deviation σ, centered at 0.
pub fn sample_discrete_gaussian<R: Rng>(sigma: f64, rng: &mut R) -> i64 {
    GaussianCdt::new(sigma).sample(rng)
}

/// Sample an LWE error vector: discrete Gaussian entries reduced into [0, q).
///
/// Negative samples wrap to q - |x|. The table is built once per call.
pub fn sample_gaussian_vector<R: Rng>(len: usize, modulus: u64, sigma: f64, rng: &mut R) -> ZqVector {
    let cdt = GaussianCdt::new(sigma);
    let coeffs = (0..len)
        .map(|_| reduce_signed(cdt.sample(rng), modulus))
        .collect();
    ZqVector { coeffs, modulus }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_gaussian_distribution() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let sigma = 2.0;
        let n = 10000;

        let samples: Vec<i64> = (0..n)
            .map(|_| sample_discrete_gaussian(sigma, &mut rng))
            .collect();

        let mean: f64 = samples.iter().map(|&x| x as f64).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.2, "mean = {mean}");

        let var: f64 = samples.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n as f64;
        let expected_var = sigma * sigma;
        assert!((var - expected_var).abs() < 0.8, "var = {var}, expected ≈ {expected_var}");

        for &s in &samples {
            assert!(s.abs() <= 12, "sample {s} exceeds tail bound");
        }
    }

    #[test]
    fn test_gaussian_vector() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let q = 1u64 << 16;
        let e = sample_gaussian_vector(1024, q, 2.0, &mut rng);
        assert_eq!(e.len(), 1024);
        assert_eq!(e.modulus, q);
        // Reduced into [0, q) but small once centered.
        for &c in &e.coeffs {
            assert!(c < q);
        }
        for c in e.centered_coeffs() {
            assert!(c.abs() <= 12);
        }
        assert!(e.coeffs.iter().any(|&c| c > q / 2), "expected some negative samples");
    }
}
