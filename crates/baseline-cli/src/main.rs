use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use baseline_classifiers::Strategy;
use baseline_cli::classifiers::dummy::input::DummyRunConfig;
use baseline_cli::classifiers::dummy::output::write_predictions;
use baseline_cli::classifiers::dummy::run::run_dummy;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("BASELINE_LOG", "error,baseline=info"))
        .init();

    let matches = Command::new("baseline")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Feature-agnostic baseline classifiers for sequence data")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dummy")
                .about("Fit a dummy classifier on labeled sequences and predict a query set")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON run configuration. Prints a template when omitted together with --train.")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("train_data")
                        .short('t')
                        .long("train")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Labeled training panel (.csv or .tsv). Overrides the config file.")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("test_data")
                        .short('q')
                        .long("test")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Query panel (.csv or .tsv). Overrides the config file.")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Where to write predictions. Defaults to stdout.")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("strategy")
                        .short('s')
                        .long("strategy")
                        .help("Prediction strategy: most_frequent, prior, stratified, uniform or constant.")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("random_state")
                        .long("random-state")
                        .help("Seed for the stratified and uniform strategies.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("constant")
                        .long("constant")
                        .help("Label predicted by the constant strategy.")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("proba")
                        .long("proba")
                        .help("Write class probabilities instead of labels.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("strategies").about("List the available prediction strategies"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("dummy", sub_m)) => handle_dummy(sub_m),
        Some(("strategies", _)) => {
            for strategy in Strategy::ALL {
                println!("{}", strategy);
            }
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_dummy(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");

    if config_path.is_none() && matches.get_one::<String>("train_data").is_none() {
        let template = serde_json::to_string_pretty(&DummyRunConfig::default())?;
        println!("{}", template);
        eprintln!("[Baseline::Dummy] No config or training data given; printed a template configuration.");
        return Ok(());
    }

    if let Some(path) = config_path {
        log::info!("[Baseline::Dummy] Using config: {:?}", path);
    }

    let params = match DummyRunConfig::from_arguments(config_path, matches) {
        Ok(params) => params,
        Err(e) => {
            log::error!("Invalid configuration: {:#}", e);
            std::process::exit(1)
        }
    };

    match run_dummy(&params) {
        Ok(result) => {
            let output = params.output_file.as_ref().map(PathBuf::from);
            write_predictions(&result, output.as_deref())?;
            if let Some(acc) = result.accuracy {
                eprintln!("[Baseline::Dummy] Accuracy: {:.4}", acc);
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Dummy classification failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
