use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data_handling::Panel;
use crate::error::BaselineError;
use crate::stats::ClassPrior;

/// Source of randomness owned by one engine.
///
/// A fixed seed restarts the generator for every prediction call, so the
/// same query shape always yields the same draws. Without a seed the engine
/// keeps one entropy-seeded generator and advances it.
#[derive(Debug, Clone)]
pub enum RandomState {
    Seeded(u64),
    Entropy(StdRng),
}

impl RandomState {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomState::Seeded(seed),
            None => RandomState::Entropy(StdRng::from_entropy()),
        }
    }

    /// Run `f` with the generator for one prediction call.
    pub fn with_rng<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut StdRng) -> T,
    {
        match self {
            RandomState::Seeded(seed) => f(&mut StdRng::seed_from_u64(*seed)),
            RandomState::Entropy(rng) => f(rng),
        }
    }
}

/// Fail with `ShapeMismatch` unless there is one label per instance.
pub(crate) fn check_lengths<L>(x: &Panel, y: &[L]) -> Result<(), BaselineError> {
    if x.n_instances() != y.len() {
        return Err(BaselineError::ShapeMismatch {
            n_instances: x.n_instances(),
            n_labels: y.len(),
        });
    }
    Ok(())
}

/// Borrow the fitted prior or fail with `NotFitted`.
pub(crate) fn fitted<L>(prior: &Option<ClassPrior<L>>) -> Result<&ClassPrior<L>, BaselineError> {
    prior.as_ref().ok_or(BaselineError::NotFitted)
}
