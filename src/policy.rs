//! The similarity policy: routing, thresholding, and verdict shaping.
//!
//! [`SimilarityPolicy`] is the decision engine. Per call it selects an
//! algorithm (by configured mode or by input length), folds case if
//! configured, obtains a distance or a score, applies the matching
//! threshold, and returns a [`Verdict`]. Every call is a pure function of
//! the inputs and the configuration fixed at construction; a single policy
//! instance can serve any number of threads concurrently.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{SelectionMode, SimilarityConfig};
use crate::error::SimilarityError;
use crate::fingerprint::{FingerprintComparator, Fingerprinter};
use crate::score;
use crate::simhash::SimHasher;

/// The quantity a verdict was decided on.
///
/// `Distance` comes from the fingerprint route (smaller is more similar,
/// bounded by the fingerprint width). `Similarity` comes from the scoring
/// route (larger is more similar, in [0.0, 1.0]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "metric", content = "value", rename_all = "lowercase")]
pub enum Measure {
    Distance(u32),
    Similarity(f64),
}

/// Outcome of one comparison.
///
/// `target` and `input` echo the compared strings only when the policy was
/// configured with `echo_inputs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub similar: bool,
    #[serde(flatten)]
    pub measure: Measure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Fingerprint,
    Scoring,
}

/// Length-routed similarity decision engine.
///
/// Holds an immutable [`SimilarityConfig`] and a fingerprint generator
/// behind the [`Fingerprinter`] seam. All methods take `&self` and share no
/// mutable state.
#[derive(Debug, Clone)]
pub struct SimilarityPolicy<H = SimHasher> {
    config: SimilarityConfig,
    comparator: FingerprintComparator<H>,
}

impl SimilarityPolicy<SimHasher> {
    /// Build a policy over the default SimHash generator.
    ///
    /// The configuration is validated here, once; calls never re-validate.
    pub fn new(config: SimilarityConfig) -> Result<Self, SimilarityError> {
        Self::with_fingerprinter(config, SimHasher::default())
    }
}

impl Default for SimilarityPolicy<SimHasher> {
    fn default() -> Self {
        // Defaults are valid by construction, so no validation round-trip.
        Self {
            config: SimilarityConfig::default(),
            comparator: FingerprintComparator::default(),
        }
    }
}

impl<H: Fingerprinter> SimilarityPolicy<H> {
    /// Build a policy over a caller-supplied fingerprint generator.
    pub fn with_fingerprinter(
        config: SimilarityConfig,
        hasher: H,
    ) -> Result<Self, SimilarityError> {
        config.validate()?;
        Ok(Self {
            config,
            comparator: FingerprintComparator::new(hasher),
        })
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Are the two texts similar under the configured thresholds?
    pub fn is_similar(&self, target: &str, input: &str) -> Result<bool, SimilarityError> {
        Ok(self.compare(target, input)?.similar)
    }

    /// Compare two texts and return the full verdict.
    pub fn compare(&self, target: &str, input: &str) -> Result<Verdict, SimilarityError> {
        let (similar, measure) = match self.route(target, input) {
            Route::Fingerprint => self.compare_fingerprints(target, input)?,
            Route::Scoring => self.compare_scores(target, input),
        };
        Ok(Verdict {
            similar,
            measure,
            target: self.config.echo_inputs.then(|| target.to_string()),
            input: self.config.echo_inputs.then(|| input.to_string()),
        })
    }

    fn route(&self, target: &str, input: &str) -> Route {
        match self.config.selection {
            SelectionMode::Fingerprint => Route::Fingerprint,
            SelectionMode::Scoring => Route::Scoring,
            SelectionMode::ByLength => {
                // Either string reaching the boundary routes the pair long.
                let longest = target.chars().count().max(input.chars().count());
                let route = if longest >= self.config.long_text_len {
                    Route::Fingerprint
                } else {
                    Route::Scoring
                };
                debug!(
                    longest,
                    boundary = self.config.long_text_len,
                    ?route,
                    "selected comparison route by length"
                );
                route
            }
        }
    }

    fn compare_fingerprints(
        &self,
        target: &str,
        input: &str,
    ) -> Result<(bool, Measure), SimilarityError> {
        // Each side is folded independently; folding must never alias one
        // input to the other.
        let (target_fp, input_fp) = if self.config.case_sensitive {
            (self.comparator.hash(target)?, self.comparator.hash(input)?)
        } else {
            (
                self.comparator.hash(&target.to_lowercase())?,
                self.comparator.hash(&input.to_lowercase())?,
            )
        };
        let distance = target_fp.distance(&input_fp);
        debug!(distance, max_distance = self.config.max_distance, "fingerprint route");
        Ok((distance <= self.config.max_distance, Measure::Distance(distance)))
    }

    fn compare_scores(&self, target: &str, input: &str) -> (bool, Measure) {
        let similarity = score::jaro_winkler(target, input, self.config.case_sensitive);
        debug!(similarity, min_similarity = self.config.min_similarity, "scoring route");
        (
            similarity >= self.config.min_similarity,
            Measure::Similarity(similarity),
        )
    }
}
