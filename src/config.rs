//! Configuration for the similarity policy.
//!
//! [`SimilarityConfig`] is created once per policy instance and never mutated
//! afterwards. Defaults are applied unconditionally: `Default` yields the
//! fully-defaulted record, and serde deserialization fills every missing
//! field, so a partial config can never silently disable defaulting.

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::fingerprint::FINGERPRINT_WIDTH;

/// How the policy picks a comparison algorithm for a pair of strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Route by input length: fingerprint comparison when either string has
    /// at least `long_text_len` characters, alignment scoring otherwise.
    #[default]
    ByLength,
    /// Always compare bit fingerprints, regardless of length.
    Fingerprint,
    /// Always score with the character-alignment metric, regardless of length.
    Scoring,
}

/// Thresholds and switches for similarity verdicts.
///
/// Lengths are measured in characters, not bytes. `max_distance` applies to
/// the fingerprint route (a *smaller* Hamming distance means more similar);
/// `min_similarity` applies to the scoring route (a *larger* score means
/// more similar).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Compare case-sensitively. Off by default: both strings are folded to
    /// lowercase, each one independently, before hashing or scoring.
    #[serde(default)]
    pub case_sensitive: bool,
    /// Character count at which a string counts as "long text". A string of
    /// exactly this length routes to the fingerprint path.
    #[serde(default = "SimilarityConfig::default_long_text_len")]
    pub long_text_len: usize,
    /// Maximum Hamming distance still accepted as similar on the
    /// fingerprint route.
    #[serde(default = "SimilarityConfig::default_max_distance")]
    pub max_distance: u32,
    /// Minimum alignment score accepted as similar on the scoring route.
    #[serde(default = "SimilarityConfig::default_min_similarity")]
    pub min_similarity: f64,
    /// Algorithm selection strategy.
    #[serde(default)]
    pub selection: SelectionMode,
    /// Echo the compared strings back in each [`Verdict`](crate::Verdict).
    #[serde(default)]
    pub echo_inputs: bool,
}

impl SimilarityConfig {
    pub(crate) fn default_long_text_len() -> usize {
        300
    }

    pub(crate) fn default_max_distance() -> u32 {
        3
    }

    pub(crate) fn default_min_similarity() -> f64 {
        0.7
    }

    /// Create a configuration with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the long-text boundary in characters.
    pub fn with_long_text_len(mut self, long_text_len: usize) -> Self {
        self.long_text_len = long_text_len;
        self
    }

    /// Set the maximum passing Hamming distance.
    pub fn with_max_distance(mut self, max_distance: u32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the minimum passing alignment score.
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Set the algorithm selection strategy.
    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    /// Echo compared strings in verdicts.
    pub fn with_echo_inputs(mut self, echo_inputs: bool) -> Self {
        self.echo_inputs = echo_inputs;
        self
    }

    /// Validate threshold ranges.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.long_text_len == 0 {
            return Err(SimilarityError::InvalidConfig(
                "long_text_len must be at least 1".into(),
            ));
        }
        if !self.min_similarity.is_finite() || !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(SimilarityError::InvalidConfig(format!(
                "min_similarity must be within [0.0, 1.0], got {}",
                self.min_similarity
            )));
        }
        if self.max_distance as usize > FINGERPRINT_WIDTH {
            return Err(SimilarityError::InvalidConfig(format!(
                "max_distance cannot exceed the fingerprint width of {FINGERPRINT_WIDTH}"
            )));
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            long_text_len: Self::default_long_text_len(),
            max_distance: Self::default_max_distance(),
            min_similarity: Self::default_min_similarity(),
            selection: SelectionMode::ByLength,
            echo_inputs: false,
        }
    }
}
