use crate::reports;
use clap::Args;
use matchforge::config::Config;
use matchforge::dataset::{build_feature_table, load_labeled_pairs, write_feature_csv_file};
use matchforge::error::MfResult;
use matchforge::features::FeatureExtractorManager;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct FeaturesArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "data/data.json")]
    pub data: String,

    #[arg(short, long, default_value = "data/features.csv")]
    pub out: String,

    /// Rows shown in the preview table
    #[arg(long, default_value_t = 10)]
    pub preview: usize,
}

pub fn run(args: FeaturesArgs, config: Config) -> MfResult<()> {
    let extractors = FeatureExtractorManager::from_kinds(&config.pipeline.extractor_kinds()?)?;
    info!("🧩 Extractors: {}", extractors.names().join(", "));

    let pairs = load_labeled_pairs(&args.data)?;
    let table = build_feature_table(&pairs, &extractors);
    write_feature_csv_file(&table, &args.out)?;

    reports::print_feature_preview(&table, args.preview);
    println!("Rows: {}", table.len());
    println!("Output: {}", args.out);
    Ok(())
}
