use ndarray::Array2;

use crate::data_handling::Panel;
use crate::error::BaselineError;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::utils::{check_lengths, fitted};
use crate::stats::ClassPrior;

/// Always predicts a user supplied label. The label has to occur in the
/// training labels so it owns a probability column.
#[derive(Debug, Clone)]
pub struct ConstantEngine<L> {
    constant: Option<L>,
    prior: Option<ClassPrior<L>>,
    constant_index: usize,
}

impl<L> ConstantEngine<L> {
    pub fn new(constant: Option<L>) -> Self {
        Self {
            constant,
            prior: None,
            constant_index: 0,
        }
    }
}

impl<L: Label> BaselineEngine<L> for ConstantEngine<L> {
    fn fit(&mut self, x: &Panel, y: &[L]) -> Result<(), BaselineError> {
        let constant = self.constant.as_ref().ok_or(BaselineError::MissingConstant)?;
        check_lengths(x, y)?;
        let prior = ClassPrior::from_labels(y)?;
        let constant_index = prior
            .index_of(constant)
            .ok_or_else(|| BaselineError::ConstantNotInTrainingLabels(format!("{:?}", constant)))?;
        log::debug!(
            "[constant] predicting {:?} (column {} of {})",
            constant,
            constant_index,
            prior.n_classes()
        );
        self.prior = Some(prior);
        self.constant_index = constant_index;
        Ok(())
    }

    fn predict(&mut self, x: &Panel) -> Result<Vec<L>, BaselineError> {
        let prior = fitted(&self.prior)?;
        Ok(vec![prior.classes()[self.constant_index].clone(); x.n_instances()])
    }

    fn predict_proba(&mut self, x: &Panel) -> Result<Array2<f64>, BaselineError> {
        let prior = fitted(&self.prior)?;
        Ok(prior.one_hot(x.n_instances(), self.constant_index))
    }

    fn classes(&self) -> Option<&[L]> {
        self.prior.as_ref().map(|p| p.classes())
    }

    fn name(&self) -> &str {
        "constant"
    }
}
