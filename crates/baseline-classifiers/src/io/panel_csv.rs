//! Delimited-text reader for sequence panels.
//!
//! One row holds one channel of one instance: optional metadata columns
//! (label, instance id, channel name) followed by the series values, one
//! timepoint per column. Trailing empty cells end a series, so rows may carry
//! series of different lengths; a value after an empty cell is an error.
use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::StringRecord;

use crate::data_handling::{NestedPanel, Panel};

/// Parsed panel file.
#[derive(Debug)]
pub struct PanelData {
    pub x: Panel,
    /// One label per instance, when the file carries a label column.
    pub y: Option<Vec<String>>,
    pub instance_ids: Vec<String>,
}

/// Column layout of a panel file.
///
/// Configured columns that are absent from the header are ignored, so the
/// same configuration reads labeled training files and unlabeled query files.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PanelReaderConfig {
    pub label_column: Option<String>,
    pub instance_column: Option<String>,
    pub channel_column: Option<String>,
}

impl Default for PanelReaderConfig {
    fn default() -> Self {
        Self {
            label_column: Some("label".to_string()),
            instance_column: Some("instance".to_string()),
            channel_column: Some("channel".to_string()),
        }
    }
}

#[derive(Debug)]
struct InstanceRows {
    id: String,
    label: Option<String>,
    channels: Vec<Vec<f64>>,
}

/// Read a panel file with the default column layout.
pub fn read_panel<P: AsRef<Path>>(path: P) -> Result<PanelData> {
    read_panel_with_config(path, &PanelReaderConfig::default())
}

/// Read a panel file; `.tsv` files are tab separated, anything else comma
/// separated.
pub fn read_panel_with_config<P: AsRef<Path>>(
    path: P,
    config: &PanelReaderConfig,
) -> Result<PanelData> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open panel file: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read panel header row")?
        .clone();

    let label_idx = optional_column(&headers, config.label_column.as_deref());
    let instance_idx = optional_column(&headers, config.instance_column.as_deref());
    let channel_idx = optional_column(&headers, config.channel_column.as_deref());
    let meta: Vec<usize> = [label_idx, instance_idx, channel_idx]
        .into_iter()
        .flatten()
        .collect();

    let mut instances: Vec<InstanceRows> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row_no = row_idx + 1;
        let record = result.with_context(|| format!("Failed to read row {}", row_no))?;

        let id = match instance_idx {
            Some(idx) => record
                .get(idx)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| anyhow!("Missing instance id at row {}", row_no))?,
            None => row_idx.to_string(),
        };

        let label = match label_idx {
            Some(idx) => Some(
                record
                    .get(idx)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| anyhow!("Missing label at row {}", row_no))?,
            ),
            None => None,
        };

        let series = parse_series(&record, &meta)
            .with_context(|| format!("Invalid series value at row {}", row_no))?;

        let slot = match index_by_id.get(&id) {
            Some(&slot) => slot,
            None => {
                index_by_id.insert(id.clone(), instances.len());
                instances.push(InstanceRows {
                    id: id.clone(),
                    label: label.clone(),
                    channels: Vec::new(),
                });
                instances.len() - 1
            }
        };

        let inst = &mut instances[slot];
        if inst.label != label {
            bail!(
                "Conflicting labels for instance '{}' at row {}: {:?} vs {:?}",
                id,
                row_no,
                inst.label,
                label
            );
        }
        inst.channels.push(series);
    }

    let instance_ids = instances.iter().map(|inst| inst.id.clone()).collect();
    let y = match label_idx {
        Some(_) => Some(
            instances
                .iter()
                .map(|inst| inst.label.clone().unwrap_or_default())
                .collect(),
        ),
        None => None,
    };
    let nested = NestedPanel::new(instances.into_iter().map(|inst| inst.channels).collect())
        .with_context(|| format!("Inconsistent channels in {}", path.display()))?;

    log::debug!(
        "Read {} instances ({} channels) from {}",
        nested.len(),
        nested.n_channels(),
        path.display()
    );

    Ok(PanelData {
        x: Panel::Nested(nested),
        y,
        instance_ids,
    })
}

/// Tab for `.tsv`, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("tsv") => b'\t',
        _ => b',',
    }
}

fn optional_column(headers: &StringRecord, name: Option<&str>) -> Option<usize> {
    let name = name?;
    headers.iter().position(|h| h.trim() == name)
}

fn parse_series(record: &StringRecord, meta: &[usize]) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut gap_at: Option<usize> = None;
    for (idx, field) in record.iter().enumerate() {
        if meta.contains(&idx) {
            continue;
        }
        let field = field.trim();
        if field.is_empty() {
            gap_at.get_or_insert(idx + 1);
            continue;
        }
        if let Some(gap) = gap_at {
            bail!(
                "value '{}' in column {} follows an empty cell in column {}",
                field,
                idx + 1,
                gap
            );
        }
        let value = field
            .parse::<f64>()
            .with_context(|| format!("'{}' in column {} is not a number", field, idx + 1))?;
        values.push(value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn delimiter_from_extension() {
        assert_eq!(delimiter_for(&PathBuf::from("a.TSV")), b'\t');
        assert_eq!(delimiter_for(&PathBuf::from("a.csv")), b',');
        assert_eq!(delimiter_for(&PathBuf::from("a")), b',');
    }

    #[test]
    fn series_stops_at_trailing_empty_cells() {
        let record = StringRecord::from(vec!["x", "1.0", "2.5", "", " "]);
        let series = parse_series(&record, &[0]).unwrap();
        assert_eq!(series, vec![1.0, 2.5]);
    }

    #[test]
    fn series_rejects_value_after_gap() {
        let record = StringRecord::from(vec!["x", "1.0", "2.5", "", "7"]);
        let err = parse_series(&record, &[0]).unwrap_err();
        assert!(err.to_string().contains("column 5"), "{}", err);
    }

    #[test]
    fn series_rejects_text() {
        let record = StringRecord::from(vec!["1.0", "abc"]);
        assert!(parse_series(&record, &[]).is_err());
    }
}
