use crate::classifier::Label;
use crate::domain::{Job, Talent};
use crate::error::{io_at, MatchError, MfResult};
use crate::features::{FeatureExtractorManager, FeatureRow};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// One labeled example from the raw data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPair {
    pub talent: Value,
    pub job: Value,
    pub label: Label,
}

/// Feature rows plus labels, with the column order of the pipeline that
/// produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    pub names: Vec<String>,
    pub rows: Vec<FeatureRow>,
    pub labels: Vec<Label>,
}

impl FeatureTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn positive_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }
}

fn read_json<P: AsRef<Path>>(path: P) -> MfResult<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| io_at(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Reads a JSON array of `{talent, job, label}` records. Records that do not
/// have that shape are skipped with a warning.
pub fn load_labeled_pairs<P: AsRef<Path>>(path: P) -> MfResult<Vec<LabeledPair>> {
    let path = path.as_ref();
    let Value::Array(entries) = read_json(path)? else {
        return Err(MatchError::Validation(format!(
            "'{}' must contain a JSON array of labeled pairs",
            path.display()
        )));
    };

    let total = entries.len();
    let mut pairs = Vec::with_capacity(total);
    let mut skipped = 0;
    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<LabeledPair>(entry) {
            Ok(pair) => pairs.push(pair),
            Err(e) => {
                skipped += 1;
                debug!("[Record {}] skipped: {}", idx, e);
            }
        }
    }

    if skipped > 0 {
        warn!(
            "Skipped {} of {} records in '{}' without talent/job/label",
            skipped,
            total,
            path.display()
        );
    }
    debug!("Read {} labeled pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Reads raw talent or job records: a JSON array, or a single object.
pub fn load_records<P: AsRef<Path>>(path: P) -> MfResult<Vec<Value>> {
    match read_json(path)? {
        Value::Array(records) => Ok(records),
        single => Ok(vec![single]),
    }
}

/// Normalizes every pair and runs the pipeline on it.
pub fn build_feature_table(pairs: &[LabeledPair], extractors: &FeatureExtractorManager) -> FeatureTable {
    let rows: Vec<FeatureRow> = pairs
        .par_iter()
        .map(|pair| {
            extractors.extract_features(&Talent::from_raw(&pair.talent), &Job::from_raw(&pair.job))
        })
        .collect();

    FeatureTable {
        names: extractors
            .feature_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        rows,
        labels: pairs.iter().map(|p| p.label).collect(),
    }
}

/// Writes the table as CSV: one column per feature, then `label`.
pub fn write_feature_csv<W: Write>(table: &FeatureTable, writer: W) -> MfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = table.names.iter().map(String::as_str).collect();
    header.push("label");
    wtr.write_record(&header)?;

    for (row, label) in table.rows.iter().zip(&table.labels) {
        let mut record: Vec<String> = table
            .names
            .iter()
            .map(|name| row.get(name).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        record.push(label.to_string());
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_feature_csv_file<P: AsRef<Path>>(table: &FeatureTable, path: P) -> MfResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_feature_csv(table, File::create(path)?)
}
