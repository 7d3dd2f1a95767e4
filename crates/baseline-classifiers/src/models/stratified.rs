use ndarray::Array2;
use rand::distributions::WeightedIndex;
use rand::Rng;

use crate::data_handling::Panel;
use crate::error::BaselineError;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::utils::{check_lengths, fitted, RandomState};
use crate::stats::{one_hot_rows, ClassPrior};

/// Samples each row independently from the empirical class prior.
///
/// `predict_proba` returns one-hot rows, not the expected distribution.
#[derive(Debug, Clone)]
pub struct StratifiedEngine<L> {
    prior: Option<ClassPrior<L>>,
    sampler: Option<WeightedIndex<usize>>,
    random_state: RandomState,
}

impl<L> StratifiedEngine<L> {
    pub fn new(random_state: Option<u64>) -> Self {
        Self {
            prior: None,
            sampler: None,
            random_state: RandomState::new(random_state),
        }
    }
}

impl<L: Label> StratifiedEngine<L> {
    fn sample_indices(&mut self, n: usize) -> Result<Vec<usize>, BaselineError> {
        let sampler = self.sampler.as_ref().ok_or(BaselineError::NotFitted)?;
        Ok(self
            .random_state
            .with_rng(|rng| (0..n).map(|_| rng.sample(sampler)).collect()))
    }
}

impl<L: Label> BaselineEngine<L> for StratifiedEngine<L> {
    fn fit(&mut self, x: &Panel, y: &[L]) -> Result<(), BaselineError> {
        check_lengths(x, y)?;
        let prior = ClassPrior::from_labels(y)?;
        let sampler = WeightedIndex::new(prior.counts())
            .map_err(|e| BaselineError::InvalidClassWeights(e.to_string()))?;
        log::debug!(
            "[stratified] sampling from class counts {:?} over classes {:?}",
            prior.counts(),
            prior.classes()
        );
        self.prior = Some(prior);
        self.sampler = Some(sampler);
        Ok(())
    }

    fn predict(&mut self, x: &Panel) -> Result<Vec<L>, BaselineError> {
        let indices = self.sample_indices(x.n_instances())?;
        let classes = fitted(&self.prior)?.classes();
        Ok(indices.into_iter().map(|i| classes[i].clone()).collect())
    }

    fn predict_proba(&mut self, x: &Panel) -> Result<Array2<f64>, BaselineError> {
        let indices = self.sample_indices(x.n_instances())?;
        let n_classes = fitted(&self.prior)?.n_classes();
        Ok(one_hot_rows(n_classes, indices))
    }

    fn classes(&self) -> Option<&[L]> {
        self.prior.as_ref().map(|p| p.classes())
    }

    fn name(&self) -> &str {
        "stratified"
    }
}
