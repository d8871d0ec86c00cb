//! Bit-string fingerprints and Hamming distance.
//!
//! A fingerprint is a fixed-width string of binary digits produced by a
//! [`Fingerprinter`]. The generator is a black box to this module; the only
//! contract is "same input, same output, always [`FINGERPRINT_WIDTH`]
//! digits". Everything here validates that contract instead of trusting it.
//!
//! Malformed comparisons are errors, never sentinel values: comparing
//! bit-strings of different lengths or an empty candidate batch fails with
//! [`SimilarityError`] rather than returning `-1` or an incomplete mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::simhash::SimHasher;

/// Width of every fingerprint, in binary digits.
pub const FINGERPRINT_WIDTH: usize = 32;

/// Produces a fixed-width binary-digit fingerprint for a text.
///
/// Implementations must be deterministic: equal inputs yield equal outputs
/// across calls, processes, and machines. Output is validated by the caller,
/// so an implementation that breaks the width contract surfaces as
/// [`SimilarityError::BadFingerprintWidth`], not as a wrong verdict.
pub trait Fingerprinter: Send + Sync {
    fn fingerprint(&self, text: &str) -> String;
}

/// A validated fingerprint: exactly [`FINGERPRINT_WIDTH`] '0'/'1' characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Validate a raw bit-string into a fingerprint.
    pub fn parse(bits: impl Into<String>) -> Result<Self, SimilarityError> {
        let bits = bits.into();
        let len = bits.chars().count();
        if len != FINGERPRINT_WIDTH {
            return Err(SimilarityError::BadFingerprintWidth {
                expected: FINGERPRINT_WIDTH,
                actual: len,
            });
        }
        if let Some((position, found)) = bits.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1'))
        {
            return Err(SimilarityError::BadFingerprintDigit { found, position });
        }
        Ok(Self(bits))
    }

    /// The underlying binary-digit string.
    pub fn as_bits(&self) -> &str {
        &self.0
    }

    /// Hamming distance to another fingerprint.
    ///
    /// Infallible: both sides are validated to the same width. Value-equal
    /// fingerprints short-circuit to 0.
    pub fn distance(&self, other: &Self) -> u32 {
        if self.0 == other.0 {
            return 0;
        }
        self.0
            .bytes()
            .zip(other.0.bytes())
            .filter(|(a, b)| a != b)
            .count() as u32
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = SimilarityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}

/// Hamming distance between two raw bit-strings of equal length.
///
/// Equal values short-circuit to 0. Unequal lengths are rejected; there is
/// no meaningful position-wise distance between them.
pub fn hamming(a: &str, b: &str) -> Result<u32, SimilarityError> {
    if a == b {
        return Ok(0);
    }
    let (left, right) = (a.chars().count(), b.chars().count());
    if left != right {
        return Err(SimilarityError::LengthMismatch { left, right });
    }
    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count() as u32)
}

/// Hamming distance from one reference to an ordered sequence of candidates.
///
/// Returns one `(candidate, distance)` pair per candidate, in input order.
/// Duplicate candidates each keep their own entry; results are positional,
/// not keyed. An empty candidate sequence is an error.
pub fn hamming_all<S: AsRef<str>>(
    reference: &str,
    candidates: &[S],
) -> Result<Vec<(String, u32)>, SimilarityError> {
    if candidates.is_empty() {
        return Err(SimilarityError::NoCandidates);
    }
    let mut out = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let distance = hamming(reference, candidate)?;
        out.push((candidate.to_string(), distance));
    }
    Ok(out)
}

/// Hashes texts through a [`Fingerprinter`] and compares the results.
#[derive(Debug, Clone, Default)]
pub struct FingerprintComparator<H = SimHasher> {
    hasher: H,
}

impl<H: Fingerprinter> FingerprintComparator<H> {
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Fingerprint a text and validate the generator's output.
    pub fn hash(&self, text: &str) -> Result<Fingerprint, SimilarityError> {
        Fingerprint::parse(self.hasher.fingerprint(text))
    }

    /// Pairwise distance between two raw bit-strings.
    pub fn distance(&self, a: &str, b: &str) -> Result<u32, SimilarityError> {
        hamming(a, b)
    }

    /// Distance from a reference to each candidate, in order.
    pub fn distance_all<S: AsRef<str>>(
        &self,
        reference: &str,
        candidates: &[S],
    ) -> Result<Vec<(String, u32)>, SimilarityError> {
        hamming_all(reference, candidates)
    }
}
