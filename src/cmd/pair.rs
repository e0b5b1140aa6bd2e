use crate::reports;
use clap::Args;
use matchforge::dataset::load_records;
use matchforge::domain::{Job, Talent};
use matchforge::error::{MatchError, MfResult};
use matchforge::search::Search;
use serde_json::Value;

#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// JSON file with one talent record
    #[arg(short, long)]
    pub talent: String,

    /// JSON file with one job record
    #[arg(short, long)]
    pub job: String,

    /// Print the result as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn single_record(path: &str) -> MfResult<Value> {
    let mut records = load_records(path)?;
    if records.len() != 1 {
        return Err(MatchError::Validation(format!(
            "'{}' must contain exactly one record, found {}",
            path,
            records.len()
        )));
    }
    Ok(records.remove(0))
}

pub fn run(args: MatchArgs, model_path: &str) -> MfResult<()> {
    let search = Search::load(model_path)?;
    let talent = single_record(&args.talent)?;
    let job = single_record(&args.job)?;

    let result = search.match_pair(&talent, &job)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let features = search
            .model()
            .features(&Talent::from_raw(&talent), &Job::from_raw(&job));
        reports::print_feature_row(&features);
        reports::print_match_results(std::slice::from_ref(&result), None);
        println!("Label: {}", result.label);
        println!("Score: {:.4}", result.score);
    }
    Ok(())
}
