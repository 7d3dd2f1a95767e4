use crate::config::Strategy;
use crate::models::classifier_trait::{BaselineEngine, Label};
use crate::models::constant::ConstantEngine;
use crate::models::most_frequent::MostFrequentEngine;
use crate::models::prior::PriorEngine;
use crate::models::stratified::StratifiedEngine;
use crate::models::uniform::UniformEngine;

/// Build a boxed, unfitted engine for `strategy`.
///
/// `random_state` is only used by the sampling strategies and `constant`
/// only by the constant strategy.
pub fn build_engine<L: Label>(
    strategy: Strategy,
    random_state: Option<u64>,
    constant: Option<L>,
) -> Box<dyn BaselineEngine<L>> {
    match strategy {
        Strategy::MostFrequent => Box::new(MostFrequentEngine::new()),
        Strategy::Prior => Box::new(PriorEngine::new()),
        Strategy::Stratified => Box::new(StratifiedEngine::new(random_state)),
        Strategy::Uniform => Box::new(UniformEngine::new(random_state)),
        Strategy::Constant => Box::new(ConstantEngine::new(constant)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_names_match_strategy() {
        for strategy in Strategy::ALL {
            let engine = build_engine::<i32>(strategy, Some(0), Some(1));
            assert_eq!(engine.name(), strategy.as_str());
            assert!(engine.classes().is_none());
        }
    }
}
