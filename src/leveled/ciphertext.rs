use std::sync::Arc;

use crate::error::{BrakerskiError, Result};
use crate::lattice::ZqVector;
use crate::leveled::eval::{leveled_add, leveled_mul};
use crate::leveled::keyswitch::EvaluationKey;

/// A ciphertext bound to the evaluation keys it may still consume.
///
/// Fresh handles start at level 0 with every key of the chain available.
/// Each operation consumes the key for the current level and yields a
/// handle one level further down, valid under the next secret key. The
/// chain itself is shared; only the position moves.
#[derive(Clone, Debug)]
pub struct LeveledCiphertext {
    inner: ZqVector,
    evaluation_keys: Arc<[EvaluationKey]>,
    remaining: usize,
}

impl LeveledCiphertext {
    /// Wrap a fresh ciphertext (valid under the first secret key of the chain).
    pub fn new(inner: ZqVector, evaluation_keys: Arc<[EvaluationKey]>) -> Self {
        let remaining = evaluation_keys.len();
        Self {
            inner,
            evaluation_keys,
            remaining,
        }
    }

    /// Index of the secret key this ciphertext is valid under.
    pub fn level(&self) -> usize {
        self.evaluation_keys.len() - self.remaining
    }

    /// Homomorphic operations still available to this handle.
    pub fn remaining_depth(&self) -> usize {
        self.remaining
    }

    /// Keys not yet consumed, in the order they will be used.
    pub fn remaining_keys(&self) -> &[EvaluationKey] {
        &self.evaluation_keys[self.level()..]
    }

    pub fn as_vector(&self) -> &ZqVector {
        &self.inner
    }

    pub fn into_vector(self) -> ZqVector {
        self.inner
    }

    fn next_key(&self) -> Result<&EvaluationKey> {
        self.remaining_keys()
            .first()
            .ok_or(BrakerskiError::DepthExhausted)
    }

    fn descend(&self, inner: ZqVector) -> Self {
        Self {
            inner,
            evaluation_keys: self.evaluation_keys.clone(),
            remaining: self.remaining - 1,
        }
    }

    /// Encrypted XOR. Consumes one level of `self`'s budget; `other`'s level
    /// is not checked.
    pub fn add(&self, other: &Self) -> Result<Self> {
        let evk = self.next_key()?;
        let inner = leveled_add(evk, &self.inner, &other.inner)?;
        Ok(self.descend(inner))
    }

    /// Encrypted AND. Consumes one level of `self`'s budget; `other`'s level
    /// is not checked.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let evk = self.next_key()?;
        let inner = leveled_mul(evk, &self.inner, &other.inner)?;
        Ok(self.descend(inner))
    }
}
