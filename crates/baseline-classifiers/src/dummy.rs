//! Feature-agnostic baseline classifier for panel data.
//!
//! `DummyClassifier` validates the structure of its input, swaps the values
//! for a zero placeholder of identical shape and hands the placeholder and
//! the labels to the engine of the configured strategy. Query values are
//! never read, so two panels of the same shape always get the same
//! (or, for sampling strategies, identically distributed) predictions.
use ndarray::Array2;

use crate::config::{DummyConfig, Strategy};
use crate::data_handling::{Panel, PanelShape};
use crate::error::BaselineError;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::factory::build_engine;
use crate::stats::accuracy;

struct Fitted<L: Label> {
    engine: Box<dyn BaselineEngine<L>>,
    shape: PanelShape,
}

/// Baseline classifier that ignores sequence values.
///
/// # Example
///
/// ```
/// use baseline_classifiers::{DummyClassifier, DummyConfig, Panel, Strategy};
/// use ndarray::Array2;
///
/// let x = Panel::from(Array2::<f64>::zeros((3, 10)));
/// let mut clf = DummyClassifier::new(DummyConfig::new(Strategy::Prior));
/// clf.fit(&x, &[0, 0, 1]).unwrap();
///
/// assert_eq!(clf.predict(&x).unwrap(), vec![0, 0, 0]);
/// let proba = clf.predict_proba(&x).unwrap();
/// assert!((proba[(0, 0)] - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub struct DummyClassifier<L: Label> {
    config: DummyConfig<L>,
    fitted: Option<Fitted<L>>,
}

impl<L: Label> DummyClassifier<L> {
    /// Create an unfitted classifier. The configuration is validated by `fit`.
    pub fn new(config: DummyConfig<L>) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    pub fn config(&self) -> &DummyConfig<L> {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Label space seen at fit, in ascending order.
    pub fn classes(&self) -> Option<&[L]> {
        self.fitted.as_ref().and_then(|f| f.engine.classes())
    }

    pub fn n_classes(&self) -> Option<usize> {
        self.classes().map(|c| c.len())
    }

    /// Fit the classifier on `(x, y)`.
    ///
    /// Only the structure of `x` is used. On error the classifier keeps
    /// whatever state it had before the call.
    ///
    /// # Errors
    ///
    /// * `InvalidStrategy` - the configured strategy name is not recognized
    /// * `MissingConstant` - constant strategy without a constant
    /// * `ShapeMismatch` - `x` and `y` have different lengths
    /// * `EmptyTrainingSet` - `y` is empty
    /// * `ConstantNotInTrainingLabels` - the constant never occurs in `y`
    pub fn fit(&mut self, x: &Panel, y: &[L]) -> Result<&mut Self, BaselineError> {
        let strategy = self.config.strategy()?;
        if strategy == Strategy::Constant && self.config.constant.is_none() {
            return Err(BaselineError::MissingConstant);
        }
        if x.n_instances() != y.len() {
            return Err(BaselineError::ShapeMismatch {
                n_instances: x.n_instances(),
                n_labels: y.len(),
            });
        }

        let shape = x.shape();
        let placeholder = x.zeros_like();
        let mut engine = build_engine(
            strategy,
            self.config.random_state,
            self.config.constant.clone(),
        );
        engine.fit(&placeholder, y)?;

        log::debug!(
            "Fitted {} baseline on {} instances ({} channels), classes: {:?}",
            engine.name(),
            shape.n_instances,
            shape.n_channels,
            engine.classes()
        );
        if strategy.is_stochastic() && engine.classes().map_or(false, |c| c.len() < 2) {
            log::warn!(
                "Only one class observed; the {} strategy will always predict it",
                strategy
            );
        }

        self.fitted = Some(Fitted { engine, shape });
        Ok(self)
    }

    /// Predict one label per instance of `x`.
    pub fn predict(&mut self, x: &Panel) -> Result<Vec<L>, BaselineError> {
        let fitted = self.check_query(x)?;
        let placeholder = x.zeros_like();
        fitted.engine.predict(&placeholder)
    }

    /// Predict one probability row per instance of `x`; columns follow
    /// `classes()`.
    pub fn predict_proba(&mut self, x: &Panel) -> Result<Array2<f64>, BaselineError> {
        let fitted = self.check_query(x)?;
        let placeholder = x.zeros_like();
        fitted.engine.predict_proba(&placeholder)
    }

    /// Fit on `(x, y)` and predict the training instances.
    pub fn fit_predict(&mut self, x: &Panel, y: &[L]) -> Result<Vec<L>, BaselineError> {
        self.fit(x, y)?.predict(x)
    }

    /// Mean accuracy of `predict(x)` against `y`.
    pub fn score(&mut self, x: &Panel, y: &[L]) -> Result<f64, BaselineError> {
        if x.n_instances() != y.len() {
            return Err(BaselineError::ShapeMismatch {
                n_instances: x.n_instances(),
                n_labels: y.len(),
            });
        }
        let predicted = self.predict(x)?;
        Ok(accuracy(&predicted, y))
    }

    /// One configuration per strategy, the constant one using `constant`.
    /// Handy for exercising every strategy in tests.
    pub fn test_params(constant: L) -> Vec<DummyConfig<L>> {
        Strategy::ALL
            .iter()
            .map(|&strategy| {
                let cfg = DummyConfig::new(strategy);
                if strategy == Strategy::Constant {
                    cfg.with_constant(constant.clone())
                } else {
                    cfg
                }
            })
            .collect()
    }

    fn check_query(&mut self, x: &Panel) -> Result<&mut Fitted<L>, BaselineError> {
        let fitted = self.fitted.as_mut().ok_or(BaselineError::NotFitted)?;
        if !x.is_empty() && x.n_channels() != fitted.shape.n_channels {
            return Err(BaselineError::ChannelMismatch {
                expected: fitted.shape.n_channels,
                found: x.n_channels(),
            });
        }
        Ok(fitted)
    }
}

impl<L: Label> Default for DummyClassifier<L> {
    fn default() -> Self {
        Self::new(DummyConfig::default())
    }
}

impl<L: Label> std::fmt::Debug for DummyClassifier<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DummyClassifier")
            .field("config", &self.config)
            .field("classes", &self.classes())
            .finish()
    }
}
