use std::sync::Arc;
use crate::error::Result;
use crate::params::{Params, ParamsBuilder};

/// Demonstration parameters: n=3, q=2^16, L=1, σ=2.
///
/// One addition or one multiplication per fresh ciphertext. Evaluation key:
/// 65536 × 4.
pub fn demo() -> Result<Arc<Params>> {
    ParamsBuilder::new()
        .dimension(3)
        .modulus(1 << 16)
        .levels(1)
        .sigma(2.0)
        .build()
}

/// Two-level parameters: n=3, q=2^32, L=2, σ=2.
///
/// The wider modulus leaves room for the noise of a second multiplication:
/// after one level the error is a few thousand, a second product scales it
/// by roughly 2·(n+1)·l, still far below q/4 = 2^30. Each evaluation key is
/// 524288 × 4.
pub fn two_level() -> Result<Arc<Params>> {
    ParamsBuilder::new()
        .dimension(3)
        .modulus(1 << 32)
        .levels(2)
        .sigma(2.0)
        .build()
}
