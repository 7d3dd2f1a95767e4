use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use baseline_classifiers::io::panel_csv::delimiter_for;

use super::run::DummyRunResult;

/// Write predictions as delimited text to `output`, or to stdout.
///
/// Columns are `instance` and `prediction`, or `instance` followed by one
/// `proba_<label>` column per class when probabilities were computed.
pub fn write_predictions(result: &DummyRunResult, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_records(result, file, delimiter_for(path))?;
            log::info!("Wrote {} predictions to {}", result.predictions.len(), path.display());
            Ok(())
        }
        None => write_records(result, std::io::stdout().lock(), b'\t'),
    }
}

fn write_records<W: Write>(result: &DummyRunResult, sink: W, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(sink);

    match &result.probabilities {
        Some(proba) => {
            let mut header = vec!["instance".to_string()];
            header.extend(result.classes.iter().map(|c| format!("proba_{}", c)));
            writer.write_record(&header)?;
            for (id, row) in result.instance_ids.iter().zip(proba.rows()) {
                let mut record = vec![id.clone()];
                record.extend(row.iter().map(|p| p.to_string()));
                writer.write_record(&record)?;
            }
        }
        None => {
            writer.write_record(["instance", "prediction"])?;
            for (id, label) in result.instance_ids.iter().zip(&result.predictions) {
                writer.write_record([id.as_str(), label.as_str()])?;
            }
        }
    }

    writer.flush().context("Failed to flush predictions")?;
    Ok(())
}
