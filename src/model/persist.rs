use super::MatchingModel;
use crate::classifier::{Classifier, RandomForest};
use crate::error::{io_at, MatchError, MfResult};
use crate::features::{ExtractorKind, FeatureExtractorManager};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_MODEL_PATH: &str = "models/matching_model.json";

const FORMAT_VERSION: u32 = 1;

/// On-disk form of a trained model. The extractor list is stored next to
/// the classifier so prediction always runs the pipeline it was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedModel {
    pub format_version: u32,
    pub extractors: Vec<ExtractorKind>,
    pub classifier: RandomForest,
}

impl SavedModel {
    pub fn from_model(model: &MatchingModel<RandomForest>) -> MfResult<Self> {
        Ok(Self {
            format_version: FORMAT_VERSION,
            extractors: model.extractors().kinds()?,
            classifier: model.classifier().clone(),
        })
    }

    pub fn into_model(self) -> MfResult<MatchingModel<RandomForest>> {
        if self.format_version != FORMAT_VERSION {
            return Err(MatchError::Validation(format!(
                "Unsupported model format version {} (expected {})",
                self.format_version, FORMAT_VERSION
            )));
        }
        if !self.classifier.is_fitted() {
            return Err(MatchError::NotTrained);
        }
        let extractors = FeatureExtractorManager::from_kinds(&self.extractors)?;
        Ok(MatchingModel::new(self.classifier, extractors))
    }
}

pub fn save_model<P: AsRef<Path>>(model: &MatchingModel<RandomForest>, path: P) -> MfResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let saved = SavedModel::from_model(model)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &saved)?;
    writer.flush()?;

    info!(
        "Saved model ({} trees, extractors: {:?}) to {}",
        saved.classifier.tree_count(),
        saved.extractors,
        path.display()
    );
    Ok(())
}

pub fn load_model<P: AsRef<Path>>(path: P) -> MfResult<MatchingModel<RandomForest>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        warn!("No model at {}. Has it been trained yet?", path.display());
        io_at(path, e)
    })?;
    let saved: SavedModel = serde_json::from_reader(BufReader::new(file))?;
    let model = saved.into_model()?;
    info!("Loaded model from {}", path.display());
    Ok(model)
}
