use crate::reports;
use clap::Args;
use matchforge::dataset::load_records;
use matchforge::error::MfResult;
use matchforge::ranking::rank_by_positive_confidence;
use matchforge::search::Search;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BulkArgs {
    /// JSON array of talent records
    #[arg(short, long)]
    pub talents: String,

    /// JSON array of job records
    #[arg(short, long)]
    pub jobs: String,

    /// Rank by confidence in a match instead of confidence in the predicted label
    #[arg(long, default_value_t = false)]
    pub positive: bool,

    /// Only show the first N results
    #[arg(long)]
    pub top: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BulkArgs, model_path: &str) -> MfResult<()> {
    let search = Search::load(model_path)?;
    let talents = load_records(&args.talents)?;
    let jobs = load_records(&args.jobs)?;
    info!(
        "🔎 Matching {} talents against {} jobs ({} pairs)",
        talents.len(),
        jobs.len(),
        talents.len() * jobs.len()
    );

    let mut results = search.match_bulk(&talents, &jobs)?;
    if args.positive {
        results = rank_by_positive_confidence(results);
    }
    if let Some(n) = args.top {
        results.truncate(n);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        reports::print_match_results(&results, Some(args.positive));
        println!("Results: {}", results.len());
    }
    Ok(())
}
