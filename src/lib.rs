//! Near-duplicate text detection with one policy and two algorithms.
//!
//! `neardup` decides whether two strings are similar enough to count as
//! duplicates. Long text is compared through locality-sensitive bit
//! fingerprints and Hamming distance; short text through Jaro-Winkler
//! alignment scoring. One configurable policy routes between the two and
//! applies the matching threshold.
//!
//! ## Contract
//!
//! - Every call is a pure function of `(target, input, config)`. No I/O, no
//!   clocks, no global state; a policy instance is safe to share across
//!   threads without locks.
//! - Configuration is fixed at construction and validated once. Defaults
//!   apply whether or not a field was supplied.
//! - Malformed inputs are errors, never sentinel values: a fingerprint of
//!   the wrong width, a length-mismatched comparison, or an empty candidate
//!   batch each fail with a specific [`SimilarityError`].
//!
//! ## Example
//!
//! ```
//! use neardup::{SimilarityConfig, SimilarityPolicy};
//!
//! let policy = SimilarityPolicy::new(SimilarityConfig::default())?;
//!
//! // Short strings take the alignment-scoring route.
//! assert!(policy.is_similar("helloworld", "HelloWorld")?);
//! assert!(!policy.is_similar("helloworld", "goodbye")?);
//!
//! // Long strings take the fingerprint route.
//! let page = "an article about near-duplicate detection ".repeat(12);
//! let unrelated = "a recipe for slow-cooked seasonal vegetable stew ".repeat(12);
//! assert!(policy.is_similar(&page, &page)?);
//! assert!(!policy.is_similar(&page, &unrelated)?);
//! # Ok::<(), neardup::SimilarityError>(())
//! ```

mod config;
mod error;
mod fingerprint;
mod policy;
mod score;
mod simhash;

pub use crate::config::{SelectionMode, SimilarityConfig};
pub use crate::error::SimilarityError;
pub use crate::fingerprint::{
    hamming, hamming_all, Fingerprint, FingerprintComparator, Fingerprinter, FINGERPRINT_WIDTH,
};
pub use crate::policy::{Measure, SimilarityPolicy, Verdict};
pub use crate::score::jaro_winkler;
pub use crate::simhash::SimHasher;

/// Compare two texts with an all-default policy.
///
/// Convenience for one-off checks; build a [`SimilarityPolicy`] once when
/// comparing many pairs.
pub fn is_similar(target: &str, input: &str) -> Result<bool, SimilarityError> {
    SimilarityPolicy::default().is_similar(target, input)
}
