use anyhow::{anyhow, bail, Context, Result};
use ndarray::Array2;

use baseline_classifiers::io::read_panel_with_config;
use baseline_classifiers::stats::{accuracy, argmax_rows};
use baseline_classifiers::DummyClassifier;

use super::input::DummyRunConfig;

/// Predictions for the query file of one run.
#[derive(Debug)]
pub struct DummyRunResult {
    pub instance_ids: Vec<String>,
    pub predictions: Vec<String>,
    /// Present when probabilities were requested; columns follow `classes`.
    pub probabilities: Option<Array2<f64>>,
    pub classes: Vec<String>,
    /// Accuracy against the query labels, when the query file has them.
    pub accuracy: Option<f64>,
}

/// Fit the dummy classifier on the training file and predict the test file.
pub fn run_dummy(config: &DummyRunConfig) -> Result<DummyRunResult> {
    let train = read_panel_with_config(&config.train_data, &config.reader)
        .with_context(|| format!("Failed to load training data: {}", config.train_data))?;
    let test = read_panel_with_config(&config.test_data, &config.reader)
        .with_context(|| format!("Failed to load test data: {}", config.test_data))?;

    let y_train = train.y.ok_or_else(|| {
        anyhow!(
            "Training data {} has no label column {:?}",
            config.train_data,
            config.reader.label_column
        )
    })?;

    log::info!(
        "Fitting '{}' baseline on {} instances, predicting {} instances",
        config.model.strategy,
        train.x.n_instances(),
        test.x.n_instances()
    );

    let mut clf = DummyClassifier::new(config.model.clone());
    clf.fit(&train.x, &y_train)?;

    let classes: Vec<String> = clf.classes().map(|c| c.to_vec()).unwrap_or_default();

    // Labels, probabilities and accuracy all come from a single draw.
    let (predictions, probabilities) = if config.predict_proba {
        let proba = clf.predict_proba(&test.x)?;
        let labels: Vec<String> = argmax_rows(&proba)
            .into_iter()
            .map(|idx| classes[idx].clone())
            .collect();
        (labels, Some(proba))
    } else {
        (clf.predict(&test.x)?, None)
    };

    let accuracy = match &test.y {
        Some(y_test) => {
            if y_test.len() != predictions.len() {
                bail!(
                    "Test data {} has {} labels for {} predictions",
                    config.test_data,
                    y_test.len(),
                    predictions.len()
                );
            }
            let acc = accuracy(&predictions, y_test);
            log::info!("Accuracy on {}: {:.4}", config.test_data, acc);
            Some(acc)
        }
        None => None,
    };

    Ok(DummyRunResult {
        instance_ids: test.instance_ids,
        predictions,
        probabilities,
        classes,
        accuracy,
    })
}
