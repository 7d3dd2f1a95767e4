use ndarray::Array2;

use crate::data_handling::Panel;
use crate::error::BaselineError;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::utils::{check_lengths, fitted};
use crate::stats::ClassPrior;

/// Predicts the most frequent label; probabilities are the empirical class
/// prior for every row.
#[derive(Debug, Clone)]
pub struct PriorEngine<L> {
    prior: Option<ClassPrior<L>>,
}

impl<L> PriorEngine<L> {
    pub fn new() -> Self {
        Self { prior: None }
    }
}

impl<L> Default for PriorEngine<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> BaselineEngine<L> for PriorEngine<L> {
    fn fit(&mut self, x: &Panel, y: &[L]) -> Result<(), BaselineError> {
        check_lengths(x, y)?;
        let prior = ClassPrior::from_labels(y)?;
        log::debug!(
            "[prior] class prior {:?} over classes {:?}",
            prior.probabilities().to_vec(),
            prior.classes()
        );
        self.prior = Some(prior);
        Ok(())
    }

    fn predict(&mut self, x: &Panel) -> Result<Vec<L>, BaselineError> {
        let prior = fitted(&self.prior)?;
        Ok(vec![prior.majority_label().clone(); x.n_instances()])
    }

    fn predict_proba(&mut self, x: &Panel) -> Result<Array2<f64>, BaselineError> {
        Ok(fitted(&self.prior)?.tile(x.n_instances()))
    }

    fn classes(&self) -> Option<&[L]> {
        self.prior.as_ref().map(|p| p.classes())
    }

    fn name(&self) -> &str {
        "prior"
    }
}
