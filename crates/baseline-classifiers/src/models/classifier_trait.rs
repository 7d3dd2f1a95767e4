use std::fmt::Debug;

use ndarray::Array2;

use crate::data_handling::Panel;
use crate::error::BaselineError;

/// Requirements on class labels: sortable so the label space has a stable
/// order, cloneable so predictions can be handed out by value.
pub trait Label: Clone + Ord + Debug + 'static {}

impl<T> Label for T where T: Clone + Ord + Debug + 'static {}

/// Contract between the `DummyClassifier` adapter and the statistics engine
/// behind one strategy.
///
/// Engines receive a feature placeholder and only look at its instance
/// count. Labels are taken as given; outputs are returned unmodified to the
/// caller.
pub trait BaselineEngine<L: Label> {
    /// Compute the strategy summary from the training labels.
    fn fit(&mut self, x: &Panel, y: &[L]) -> Result<(), BaselineError>;

    /// One label per instance in `x`.
    fn predict(&mut self, x: &Panel) -> Result<Vec<L>, BaselineError>;

    /// One probability row per instance in `x`, columns aligned to `classes`.
    fn predict_proba(&mut self, x: &Panel) -> Result<Array2<f64>, BaselineError>;

    /// Label space observed at fit, `None` before fitting.
    fn classes(&self) -> Option<&[L]>;

    /// Human readable name for logging.
    fn name(&self) -> &str {
        "baseline"
    }
}
