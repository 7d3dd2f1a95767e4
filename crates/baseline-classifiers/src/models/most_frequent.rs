use ndarray::Array2;

use crate::data_handling::Panel;
use crate::error::BaselineError;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::utils::{check_lengths, fitted};
use crate::stats::ClassPrior;

/// Always predicts the most frequent training label, with one-hot
/// probabilities.
#[derive(Debug, Clone)]
pub struct MostFrequentEngine<L> {
    prior: Option<ClassPrior<L>>,
}

impl<L> MostFrequentEngine<L> {
    pub fn new() -> Self {
        Self { prior: None }
    }
}

impl<L> Default for MostFrequentEngine<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> BaselineEngine<L> for MostFrequentEngine<L> {
    fn fit(&mut self, x: &Panel, y: &[L]) -> Result<(), BaselineError> {
        check_lengths(x, y)?;
        let prior = ClassPrior::from_labels(y)?;
        log::debug!(
            "[most_frequent] majority label {:?} over {} classes",
            prior.majority_label(),
            prior.n_classes()
        );
        self.prior = Some(prior);
        Ok(())
    }

    fn predict(&mut self, x: &Panel) -> Result<Vec<L>, BaselineError> {
        let prior = fitted(&self.prior)?;
        Ok(vec![prior.majority_label().clone(); x.n_instances()])
    }

    fn predict_proba(&mut self, x: &Panel) -> Result<Array2<f64>, BaselineError> {
        let prior = fitted(&self.prior)?;
        Ok(prior.one_hot(x.n_instances(), prior.majority_index()))
    }

    fn classes(&self) -> Option<&[L]> {
        self.prior.as_ref().map(|p| p.classes())
    }

    fn name(&self) -> &str {
        "most_frequent"
    }
}
