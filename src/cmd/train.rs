use crate::reports;
use clap::Args;
use matchforge::config::Config;
use matchforge::dataset::{load_labeled_pairs, write_feature_csv_file};
use matchforge::error::{MatchError, MfResult};
use matchforge::model::{save_model, training};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON array of {talent, job, label} records
    #[arg(short, long, default_value = "data/data.json")]
    pub data: String,

    /// Also write the extracted feature table here
    #[arg(long)]
    pub features_csv: Option<String>,
}

pub fn run(args: TrainArgs, config: Config, model_path: &str) -> MfResult<()> {
    info!("📂 Loading labeled pairs: {}", args.data);
    let pairs = load_labeled_pairs(&args.data)?;
    if pairs.is_empty() {
        return Err(MatchError::Validation(format!(
            "No labeled pairs found in '{}'",
            args.data
        )));
    }

    let report = training::train(&pairs, &config)?;

    if let Some(path) = &args.features_csv {
        write_feature_csv_file(&report.table, path)?;
        info!("💾 Wrote feature table to {}", path);
    }

    reports::print_training_summary(&report.table, report.cross_validation.as_ref());
    save_model(&report.model, model_path)?;
    println!("Model: {}", model_path);
    Ok(())
}
