use super::{ExtractorKind, FeatureExtractor, FeatureRow};
use crate::domain::{Job, Talent};
use crate::error::{MatchError, MfResult};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Ordered registry of feature extractors.
///
/// Registration happens up front; extraction only needs `&self`, so a
/// configured manager can be shared across threads.
pub struct FeatureExtractorManager {
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl Default for FeatureExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FeatureExtractorManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureExtractorManager")
            .field("extractors", &self.names())
            .finish()
    }
}

impl FeatureExtractorManager {
    /// Manager with the default extractor set.
    pub fn new() -> Self {
        Self {
            extractors: ExtractorKind::DEFAULTS.iter().map(|kind| kind.build()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn from_kinds(kinds: &[ExtractorKind]) -> MfResult<Self> {
        let mut manager = Self::empty();
        for kind in kinds {
            manager.register(kind.build())?;
        }
        Ok(manager)
    }

    /// Appends an extractor. Fails if it shares a feature name with one that
    /// is already registered.
    pub fn register(&mut self, extractor: Box<dyn FeatureExtractor>) -> MfResult<()> {
        let taken = self.feature_names();
        if let Some(dup) = extractor
            .feature_names()
            .iter()
            .find(|name| taken.contains(*name))
        {
            return Err(MatchError::Config(format!(
                "Extractor '{}' emits '{}', which is already registered",
                extractor.name(),
                dup
            )));
        }
        debug!("Registered feature extractor '{}'", extractor.name());
        self.extractors.push(extractor);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.extractors.clear();
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Built-in kinds of the registered extractors, in registration order.
    pub fn kinds(&self) -> MfResult<Vec<ExtractorKind>> {
        self.extractors
            .iter()
            .map(|e| {
                ExtractorKind::from_str(e.name()).map_err(|_| {
                    MatchError::Config(format!(
                        "Extractor '{}' is not a built-in extractor",
                        e.name()
                    ))
                })
            })
            .collect()
    }

    /// All feature names, in registration order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.extractors
            .iter()
            .flat_map(|e| e.feature_names().iter().copied())
            .collect()
    }

    /// Runs every registered extractor and merges the outputs into one row.
    pub fn extract_features(&self, talent: &Talent, job: &Job) -> FeatureRow {
        let mut row = FeatureRow::new();
        for extractor in &self.extractors {
            let collisions = row.merge(extractor.extract(talent, job));
            debug_assert!(
                collisions.is_empty(),
                "extractor '{}' overwrote {:?}",
                extractor.name(),
                collisions
            );
        }
        row
    }
}
