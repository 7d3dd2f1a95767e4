use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use baseline_classifiers::io::PanelReaderConfig;
use baseline_classifiers::DummyConfig;

use crate::util::validate_tsv_or_csv_file;

/// Everything needed for one fit/predict run of the dummy classifier.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DummyRunConfig {
    pub model: DummyConfig<String>,
    pub train_data: String,
    pub test_data: String,
    /// TSV/CSV destination; stdout when unset.
    pub output_file: Option<String>,
    pub predict_proba: bool,
    pub reader: PanelReaderConfig,
}

impl Default for DummyRunConfig {
    fn default() -> Self {
        DummyRunConfig {
            model: DummyConfig::default(),
            train_data: String::new(),
            test_data: String::new(),
            output_file: None,
            predict_proba: false,
            reader: PanelReaderConfig::default(),
        }
    }
}

/// Load a run configuration from a JSON file.
pub fn load_dummy_config<P: AsRef<Path>>(path: P) -> Result<DummyRunConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DummyRunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl DummyRunConfig {
    /// Build the run configuration from an optional JSON file and the
    /// command line overrides in `matches`.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = DummyRunConfig::default();

        if let Some(config_path) = config_path {
            let config_json = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let partial: serde_json::Value = serde_json::from_str(&config_json)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

            // The model section is never replaced by defaults.
            if let Some(model) = partial.get("model") {
                config.model = serde_json::from_value(model.clone()).with_context(|| {
                    format!("Invalid 'model' section in config file: {:?}", config_path)
                })?;
            }

            macro_rules! load_or_default {
                ($field:ident) => {
                    if let Some(val) = partial.get(stringify!($field)) {
                        if let Ok(parsed) = serde_json::from_value(val.clone()) {
                            config.$field = parsed;
                        } else {
                            log::warn!(
                                "Config Invalid value for '{}', using default: {:?}",
                                stringify!($field),
                                config.$field
                            );
                        }
                    } else {
                        log::debug!(
                            "Config Missing field '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                };
            }

            load_or_default!(train_data);
            load_or_default!(test_data);
            load_or_default!(output_file);
            load_or_default!(predict_proba);
            load_or_default!(reader);
        }

        // Apply CLI overrides
        if let Some(train_data) = matches.get_one::<String>("train_data") {
            config.train_data = train_data.clone();
        }
        if let Some(test_data) = matches.get_one::<String>("test_data") {
            config.test_data = test_data.clone();
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = Some(output_file.clone());
        }
        if let Some(strategy) = matches.get_one::<String>("strategy") {
            config.model.strategy = strategy.clone();
        }
        if let Some(seed) = matches.get_one::<u64>("random_state") {
            config.model.random_state = Some(*seed);
        }
        if let Some(constant) = matches.get_one::<String>("constant") {
            config.model.constant = Some(constant.clone());
        }
        if matches.get_flag("proba") {
            config.predict_proba = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that both input files look usable.
    pub fn validate(&self) -> Result<()> {
        validate_tsv_or_csv_file(&self.train_data).context("Invalid training data")?;
        validate_tsv_or_csv_file(&self.test_data).context("Invalid test data")?;
        Ok(())
    }
}
