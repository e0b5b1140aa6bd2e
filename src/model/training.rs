use super::MatchingModel;
use crate::classifier::{Classifier, Label, RandomForest};
use crate::config::{Config, ForestParams};
use crate::dataset::{build_feature_table, FeatureTable, LabeledPair};
use crate::error::{MatchError, MfResult};
use crate::features::{FeatureExtractorManager, FeatureRow};
use rayon::prelude::*;
use std::time::Instant;
use tracing::info;

/// k-fold accuracy of a forest configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidation {
    pub fold_accuracy: Vec<f64>,
    pub mean: f64,
    pub std_dev: f64,
}

pub struct TrainingReport {
    pub model: MatchingModel<RandomForest>,
    pub table: FeatureTable,
    pub cross_validation: Option<CrossValidation>,
}

/// Fraction of rows whose predicted label equals the expected one.
pub fn accuracy<C: Classifier>(classifier: &C, rows: &[FeatureRow], labels: &[Label]) -> MfResult<f64> {
    if rows.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for (row, &expected) in rows.iter().zip(labels) {
        if classifier.predict(row)? == expected {
            correct += 1;
        }
    }
    Ok(correct as f64 / rows.len() as f64)
}

/// Shuffles the rows once, splits them into `folds` folds and scores a forest
/// trained on the remaining folds against each one.
pub fn cross_validate(
    rows: &[FeatureRow],
    labels: &[Label],
    params: ForestParams,
    folds: usize,
    shuffle_seed: u64,
) -> MfResult<CrossValidation> {
    if folds < 2 {
        return Err(MatchError::Config(format!(
            "Cross-validation needs at least 2 folds, got {}",
            folds
        )));
    }
    if rows.len() != labels.len() {
        return Err(MatchError::Validation(format!(
            "{} feature rows but {} labels",
            rows.len(),
            labels.len()
        )));
    }
    if rows.len() < folds {
        return Err(MatchError::Validation(format!(
            "{} rows are not enough for {} folds",
            rows.len(),
            folds
        )));
    }

    let mut order: Vec<usize> = (0..rows.len()).collect();
    fastrand::Rng::with_seed(shuffle_seed).shuffle(&mut order);

    let fold_accuracy = (0..folds)
        .into_par_iter()
        .map(|fold| {
            let mut train_rows = Vec::new();
            let mut train_labels = Vec::new();
            let mut test_rows = Vec::new();
            let mut test_labels = Vec::new();
            for (pos, &idx) in order.iter().enumerate() {
                if pos % folds == fold {
                    test_rows.push(rows[idx].clone());
                    test_labels.push(labels[idx]);
                } else {
                    train_rows.push(rows[idx].clone());
                    train_labels.push(labels[idx]);
                }
            }

            let mut forest = RandomForest::new(params);
            forest.fit(&train_rows, &train_labels)?;
            accuracy(&forest, &test_rows, &test_labels)
        })
        .collect::<MfResult<Vec<f64>>>()?;

    let mean = fold_accuracy.iter().sum::<f64>() / folds as f64;
    let variance = fold_accuracy
        .iter()
        .map(|a| (a - mean).powi(2))
        .sum::<f64>()
        / folds as f64;

    Ok(CrossValidation {
        fold_accuracy,
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Extracts features for every labeled pair, optionally cross-validates, and
/// fits the final model on all rows.
pub fn train(pairs: &[LabeledPair], config: &Config) -> MfResult<TrainingReport> {
    info!("Start model training on {} labeled pairs", pairs.len());
    let start = Instant::now();

    let extractors = FeatureExtractorManager::from_kinds(&config.pipeline.extractor_kinds()?)?;
    let table = build_feature_table(pairs, &extractors);

    let cross_validation = if config.training.cv_folds >= 2 {
        let cv = cross_validate(
            &table.rows,
            &table.labels,
            config.forest,
            config.training.cv_folds,
            config.training.shuffle_seed,
        )?;
        info!(
            "Model quality based on validation: {:.2}% accuracy with a standard deviation of {:.2}%",
            cv.mean * 100.0,
            cv.std_dev * 100.0
        );
        Some(cv)
    } else {
        None
    };

    let mut forest = RandomForest::new(config.forest);
    forest.fit(&table.rows, &table.labels)?;

    info!(
        "Finished model training, took ~{:.1}s",
        start.elapsed().as_secs_f32()
    );

    Ok(TrainingReport {
        model: MatchingModel::new(forest, extractors),
        table,
        cross_validation,
    })
}
