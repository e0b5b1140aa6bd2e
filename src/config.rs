use crate::error::{MatchError, MfResult};
use crate::features::ExtractorKind;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub forest: ForestParams,
    #[command(flatten)]
    pub training: TrainingParams,
    #[command(flatten)]
    pub pipeline: PipelineParams,
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestParams {
    #[arg(long, default_value_t = 100)]
    pub n_trees: usize,
    // 0 = grow until leaves are pure
    #[arg(long, default_value_t = 12)]
    pub max_depth: usize,
    #[arg(long, default_value_t = 2)]
    pub min_samples_split: usize,
    // 0 = sqrt(feature count)
    #[arg(long, default_value_t = 0)]
    pub max_features: usize,
    #[arg(long, default_value_t = 42)]
    pub forest_seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 12,
            min_samples_split: 2,
            max_features: 0,
            forest_seed: 42,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingParams {
    // 0 or 1 skips cross-validation
    #[arg(long, default_value_t = 10)]
    pub cv_folds: usize,
    #[arg(long, default_value_t = 7)]
    pub shuffle_seed: u64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            cv_folds: 10,
            shuffle_seed: 7,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    #[arg(long, default_value = "seniority,degree,salary,job_roles")]
    pub extractors: String,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            extractors: "seniority,degree,salary,job_roles".to_string(),
        }
    }
}

impl PipelineParams {
    pub fn extractor_kinds(&self) -> MfResult<Vec<ExtractorKind>> {
        let kinds = ExtractorKind::parse_list(&self.extractors).map_err(MatchError::Config)?;
        if kinds.is_empty() {
            return Err(MatchError::Config(
                "At least one feature extractor is required".to_string(),
            ));
        }
        Ok(kinds)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MatchError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields with CLI values, but only those typed on the command
    /// line. Defaults filled in by clap never override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(forest.n_trees);
        update_if_present!(forest.max_depth);
        update_if_present!(forest.min_samples_split);
        update_if_present!(forest.max_features);
        update_if_present!(forest.forest_seed);

        update_if_present!(training.cv_folds);
        update_if_present!(training.shuffle_seed);

        update_if_present!(pipeline.extractors);
    }
}
