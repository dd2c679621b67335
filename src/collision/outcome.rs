use crate::common::{CollisionError, Stage};

/// Result of a bounded iterative solve.
///
/// Running out of iterations is not an error by itself; the caller picks the
/// policy (fall back to a conservative value, or escalate with
/// [`into_result`](Outcome::into_result)).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Converged(T),
    IterationLimitExceeded { iterations: usize },
}

impl<T> Outcome<T> {
    pub fn into_result(self, stage: Stage) -> Result<T, CollisionError> {
        match self {
            Outcome::Converged(value) => Ok(value),
            Outcome::IterationLimitExceeded { iterations } => {
                Err(CollisionError::IterationLimitExceeded { stage, iterations })
            }
        }
    }
}
