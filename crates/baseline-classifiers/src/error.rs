use std::error::Error;
use std::fmt;

/// Failures raised by the baseline classifiers.
///
/// Every variant is returned synchronously from the offending call; a failed
/// `fit` leaves the classifier untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineError {
    /// Strategy name not in the recognized set.
    InvalidStrategy(String),
    /// `constant` strategy configured without a constant label.
    MissingConstant,
    /// The constant label never occurs in the training labels.
    ConstantNotInTrainingLabels(String),
    /// Number of instances and number of labels disagree.
    ShapeMismatch { n_instances: usize, n_labels: usize },
    /// Query panel has a different channel count than the training panel.
    ChannelMismatch { expected: usize, found: usize },
    /// No training labels were given.
    EmptyTrainingSet,
    /// Structurally inconsistent panel.
    InvalidPanel(String),
    /// Class counts cannot be turned into a sampling distribution.
    InvalidClassWeights(String),
    /// `predict`/`predict_proba`/`score` called before `fit`.
    NotFitted,
}

impl fmt::Display for BaselineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BaselineError::InvalidStrategy(s) => write!(
                f,
                "Unknown strategy: {}. Valid options are: most_frequent, prior, stratified, uniform, constant",
                s
            ),
            BaselineError::MissingConstant => write!(
                f,
                "The constant strategy requires a constant label to be set"
            ),
            BaselineError::ConstantNotInTrainingLabels(c) => write!(
                f,
                "The constant label {} is not present in the training labels",
                c
            ),
            BaselineError::ShapeMismatch { n_instances, n_labels } => write!(
                f,
                "Found {} instances but {} labels; X and y must have equal length",
                n_instances, n_labels
            ),
            BaselineError::ChannelMismatch { expected, found } => write!(
                f,
                "Classifier was fit on {} channels but received {}",
                expected, found
            ),
            BaselineError::EmptyTrainingSet => write!(f, "Cannot fit on an empty training set"),
            BaselineError::InvalidPanel(msg) => write!(f, "Invalid panel: {}", msg),
            BaselineError::InvalidClassWeights(msg) => {
                write!(f, "Cannot sample from the class counts: {}", msg)
            }
            BaselineError::NotFitted => write!(
                f,
                "This classifier has not been fitted yet; call fit before predicting"
            ),
        }
    }
}

impl Error for BaselineError {}
