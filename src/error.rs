use thiserror::Error;

/// Errors surfaced by fingerprinting, comparison, and policy construction.
///
/// Every failure is reported synchronously to the caller; nothing is
/// downgraded to a warning or a sentinel value. All operations here are
/// deterministic, so retrying with the same inputs cannot change the outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A fingerprinter broke its fixed-width contract.
    #[error("fingerprint must be {expected} binary digits, got {actual}")]
    BadFingerprintWidth { expected: usize, actual: usize },

    /// A fingerprint contains something other than '0' or '1'.
    #[error("fingerprint has non-binary digit {found:?} at position {position}")]
    BadFingerprintDigit { found: char, position: usize },

    /// Two bit-strings of different lengths cannot be compared position-wise.
    #[error("cannot compare bit-strings of lengths {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The batch distance form was handed an empty candidate sequence.
    #[error("no candidate fingerprints to compare against")]
    NoCandidates,
}
