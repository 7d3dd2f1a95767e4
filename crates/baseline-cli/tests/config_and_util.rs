//! Integration tests for run configuration parsing and util helpers.

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use baseline_classifiers::stats::{accuracy, argmax_rows};
use baseline_cli::classifiers::dummy::input::{load_dummy_config, DummyRunConfig};
use baseline_cli::classifiers::dummy::run::run_dummy;
use baseline_cli::util::validate_tsv_or_csv_file;

fn dummy_command() -> Command {
    Command::new("dummy")
        .arg(Arg::new("config").value_parser(clap::value_parser!(PathBuf)))
        .arg(Arg::new("train_data").long("train"))
        .arg(Arg::new("test_data").long("test"))
        .arg(Arg::new("output_file").long("output"))
        .arg(Arg::new("strategy").long("strategy"))
        .arg(
            Arg::new("random_state")
                .long("random-state")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(Arg::new("constant").long("constant"))
        .arg(Arg::new("proba").long("proba").action(ArgAction::SetTrue))
}

fn touch(dir: &tempfile::TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    std::fs::File::create(&path).unwrap();
    path.to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// validate_tsv_or_csv_file
// ---------------------------------------------------------------------------

#[test]
fn validate_tsv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    assert!(validate_tsv_or_csv_file(&touch(&dir, "data.tsv")).is_ok());
}

#[test]
fn validate_wrong_extension_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(validate_tsv_or_csv_file(&touch(&dir, "data.txt")).is_err());
}

#[test]
fn validate_nonexistent_file_errors() {
    assert!(validate_tsv_or_csv_file("/nonexistent/path/data.csv").is_err());
}

// ---------------------------------------------------------------------------
// DummyRunConfig
// ---------------------------------------------------------------------------

#[test]
fn run_config_defaults() {
    let cfg = DummyRunConfig::default();
    assert_eq!(cfg.model.strategy, "prior");
    assert!(!cfg.predict_proba);
    assert!(cfg.output_file.is_none());
    assert_eq!(cfg.reader.label_column.as_deref(), Some("label"));
}

#[test]
fn run_config_round_trips_json() {
    let cfg = DummyRunConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: DummyRunConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.model, cfg.model);
    assert_eq!(back.reader, cfg.reader);
}

#[test]
fn load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, r#"{"model": {"strategy": "uniform", "random_state": 4}}"#).unwrap();
    let cfg = load_dummy_config(&path).unwrap();
    assert_eq!(cfg.model.strategy, "uniform");
    assert_eq!(cfg.model.random_state, Some(4));
    assert!(cfg.train_data.is_empty());
}

#[test]
fn cli_flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let train = touch(&dir, "train.csv");
    let test = touch(&dir, "test.tsv");
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{"model": {{"strategy": "uniform"}}, "train_data": "{}", "test_data": "{}"}}"#,
            train, test
        ),
    )
    .unwrap();

    let matches = dummy_command()
        .try_get_matches_from([
            "dummy",
            config_path.to_str().unwrap(),
            "--strategy",
            "constant",
            "--constant",
            "a",
            "--random-state",
            "9",
            "--proba",
        ])
        .unwrap();
    let cfg = DummyRunConfig::from_arguments(matches.get_one::<PathBuf>("config"), &matches).unwrap();
    assert_eq!(cfg.model.strategy, "constant");
    assert_eq!(cfg.model.constant.as_deref(), Some("a"));
    assert_eq!(cfg.model.random_state, Some(9));
    assert!(cfg.predict_proba);
    assert_eq!(cfg.train_data, train);
}

#[test]
fn invalid_model_section_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let train = touch(&dir, "train.csv");
    let test = touch(&dir, "test.csv");
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{"model": {{"strategy": "stratified", "random_state": "seven"}}, "train_data": "{}", "test_data": "{}"}}"#,
            train, test
        ),
    )
    .unwrap();

    let matches = dummy_command()
        .try_get_matches_from(["dummy", config_path.to_str().unwrap()])
        .unwrap();
    let err = DummyRunConfig::from_arguments(matches.get_one::<PathBuf>("config"), &matches).unwrap_err();
    assert!(format!("{:#}", err).contains("'model'"), "{:#}", err);
}

#[test]
fn invalid_optional_field_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let train = touch(&dir, "train.csv");
    let test = touch(&dir, "test.csv");
    let config_path = dir.path().join("run.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{"predict_proba": "yes", "train_data": "{}", "test_data": "{}"}}"#,
            train, test
        ),
    )
    .unwrap();

    let matches = dummy_command()
        .try_get_matches_from(["dummy", config_path.to_str().unwrap()])
        .unwrap();
    let cfg = DummyRunConfig::from_arguments(matches.get_one::<PathBuf>("config"), &matches).unwrap();
    assert!(!cfg.predict_proba);
}

#[test]
fn from_arguments_requires_existing_inputs() {
    let matches = dummy_command()
        .try_get_matches_from(["dummy", "--train", "missing.csv", "--test", "missing.csv"])
        .unwrap();
    assert!(DummyRunConfig::from_arguments(None, &matches).is_err());
}

// ---------------------------------------------------------------------------
// run_dummy
// ---------------------------------------------------------------------------

fn alternating_panel(dir: &tempfile::TempDir, name: &str, n: usize) -> (String, Vec<String>) {
    let labels: Vec<String> = (0..n).map(|i| if i % 2 == 0 { "a" } else { "b" }.to_string()).collect();
    let mut content = String::from("instance,label,t0,t1\n");
    for (i, label) in labels.iter().enumerate() {
        content.push_str(&format!("s{},{},{},1.0\n", i, label, i));
    }
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (path.to_str().unwrap().to_string(), labels)
}

fn unseeded_run(dir: &tempfile::TempDir, strategy: &str, proba: bool) -> DummyRunConfig {
    let (train, _) = alternating_panel(dir, "train.csv", 400);
    let (test, _) = alternating_panel(dir, "test.csv", 400);
    let mut cfg = DummyRunConfig::default();
    cfg.model.strategy = strategy.to_string();
    cfg.model.random_state = None;
    cfg.train_data = train;
    cfg.test_data = test;
    cfg.predict_proba = proba;
    cfg
}

#[test]
fn unseeded_accuracy_describes_returned_predictions() {
    let dir = tempfile::tempdir().unwrap();
    for strategy in ["uniform", "stratified"] {
        let cfg = unseeded_run(&dir, strategy, false);
        let (_, y_test) = alternating_panel(&dir, "test.csv", 400);
        let result = run_dummy(&cfg).unwrap();
        assert_eq!(result.predictions.len(), 400);
        assert_eq!(result.accuracy, Some(accuracy(&result.predictions, &y_test)));
    }
}

#[test]
fn unseeded_probabilities_match_returned_predictions() {
    let dir = tempfile::tempdir().unwrap();
    for strategy in ["uniform", "stratified"] {
        let cfg = unseeded_run(&dir, strategy, true);
        let (_, y_test) = alternating_panel(&dir, "test.csv", 400);
        let result = run_dummy(&cfg).unwrap();
        let proba = result.probabilities.as_ref().unwrap();
        let from_proba: Vec<String> = argmax_rows(proba)
            .into_iter()
            .map(|idx| result.classes[idx].clone())
            .collect();
        assert_eq!(result.predictions, from_proba);
        assert_eq!(result.accuracy, Some(accuracy(&result.predictions, &y_test)));
    }
}
