use ndarray::Array2;
use rand::distributions::Uniform;
use rand::Rng;

use crate::data_handling::Panel;
use crate::error::BaselineError;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::utils::{check_lengths, fitted, RandomState};
use crate::stats::{one_hot_rows, ClassPrior};

/// Samples each row uniformly over the classes seen at fit, ignoring their
/// frequencies.
#[derive(Debug, Clone)]
pub struct UniformEngine<L> {
    prior: Option<ClassPrior<L>>,
    sampler: Option<Uniform<usize>>,
    random_state: RandomState,
}

impl<L> UniformEngine<L> {
    pub fn new(random_state: Option<u64>) -> Self {
        Self {
            prior: None,
            sampler: None,
            random_state: RandomState::new(random_state),
        }
    }
}

impl<L: Label> UniformEngine<L> {
    fn sample_indices(&mut self, n: usize) -> Result<Vec<usize>, BaselineError> {
        let sampler = self.sampler.ok_or(BaselineError::NotFitted)?;
        Ok(self
            .random_state
            .with_rng(|rng| (0..n).map(|_| rng.sample(sampler)).collect()))
    }
}

impl<L: Label> BaselineEngine<L> for UniformEngine<L> {
    fn fit(&mut self, x: &Panel, y: &[L]) -> Result<(), BaselineError> {
        check_lengths(x, y)?;
        let prior = ClassPrior::from_labels(y)?;
        // from_labels guarantees at least one class
        let sampler = Uniform::from(0..prior.n_classes());
        log::debug!("[uniform] sampling uniformly over {:?}", prior.classes());
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
        "uniform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2 as Features;

    fn panel(n: usize) -> Panel {
        Panel::from(Features::<f64>::zeros((n, 1)))
    }

    #[test]
    fn ignores_label_frequencies() {
        let mut engine = UniformEngine::new(Some(5));
        let mut y = vec![0; 99];
        y.push(1);
        engine.fit(&panel(100), &y).unwrap();
        let labels = engine.predict(&panel(4000)).unwrap();
        let ones = labels.iter().filter(|&&l| l == 1).count() as f64 / 4000.0;
        assert!((ones - 0.5).abs() < 0.05, "observed frequency {}", ones);
    }

    #[test]
    fn proba_rows_are_one_hot() {
        let mut engine = UniformEngine::new(Some(1));
        engine.fit(&panel(3), &[1, 2, 3]).unwrap();
        let proba = engine.predict_proba(&panel(20)).unwrap();
        assert_eq!(proba.shape(), &[20, 3]);
        for row in proba.rows() {
            assert_eq!(row.sum(), 1.0);
            assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1);
        }
    }
}
