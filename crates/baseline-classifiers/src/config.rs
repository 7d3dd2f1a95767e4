use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BaselineError;

/// Construction-time configuration of a `DummyClassifier`.
///
/// `strategy` is kept as the raw name and only resolved when the classifier
/// is fitted, so a bad name in a config file surfaces as
/// `BaselineError::InvalidStrategy` from `fit`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DummyConfig<L> {
    pub strategy: String,
    pub random_state: Option<u64>,
    pub constant: Option<L>,
}

impl<L> DummyConfig<L> {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy: strategy.as_str().to_string(),
            random_state: None,
            constant: None,
        }
    }

    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    pub fn with_constant(mut self, constant: L) -> Self {
        self.constant = Some(constant);
        self
    }

    /// Resolve the configured strategy name.
    pub fn strategy(&self) -> Result<Strategy, BaselineError> {
        self.strategy.parse()
    }
}

impl<L> Default for DummyConfig<L> {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

/// Rules for deriving predictions from the training labels.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Always the most frequent training label; one-hot probabilities.
    MostFrequent,
    /// Most frequent label; probabilities are the empirical class prior.
    #[default]
    Prior,
    /// One-hot rows sampled from the empirical class prior.
    Stratified,
    /// One-hot rows sampled uniformly over the observed classes.
    Uniform,
    /// A user supplied label.
    Constant,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::MostFrequent,
        Strategy::Prior,
        Strategy::Stratified,
        Strategy::Uniform,
        Strategy::Constant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::MostFrequent => "most_frequent",
            Strategy::Prior => "prior",
            Strategy::Stratified => "stratified",
            Strategy::Uniform => "uniform",
            Strategy::Constant => "constant",
        }
    }

    /// Whether predictions are drawn from the random generator.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Strategy::Stratified | Strategy::Uniform)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = BaselineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most_frequent" => Ok(Strategy::MostFrequent),
            "prior" => Ok(Strategy::Prior),
            "stratified" => Ok(Strategy::Stratified),
            "uniform" => Ok(Strategy::Uniform),
            "constant" => Ok(Strategy::Constant),
            _ => Err(BaselineError::InvalidStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_prior() {
        let cfg: DummyConfig<i32> = DummyConfig::default();
        assert_eq!(cfg.strategy, "prior");
        assert_eq!(cfg.random_state, None);
        assert_eq!(cfg.constant, None);
    }

    #[test]
    fn strategy_names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.as_str().parse::<Strategy>().unwrap(), s);
            assert_eq!(s.to_string(), s.as_str());
        }
    }

    #[test]
    fn strategy_parse_requires_exact_name() {
        for name in ["PRIOR", "Most_Frequent", " uniform", "stratified\n"] {
            assert_eq!(
                name.parse::<Strategy>().unwrap_err(),
                BaselineError::InvalidStrategy(name.to_string())
            );
        }
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "mode".parse::<Strategy>().unwrap_err();
        assert_eq!(err, BaselineError::InvalidStrategy("mode".to_string()));
    }
}
