//! Default fingerprint generator: character-shingle SimHash.
//!
//! Maps a text to a 32-bit locality-sensitive fingerprint so that similar
//! texts land at a small Hamming distance. The pipeline is a pure function
//! of `(text, shingle_len, seed)`: overlapping character shingles are hashed
//! with seeded xxh3, each hash votes on the 32 bit positions, and positions
//! with a positive tally are set in the output.
//!
//! Invariant: for the same text and the same generator parameters, the
//! output is bit identical on any machine. No I/O, no clocks, no locale
//! dependence.

use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::fingerprint::{Fingerprinter, FINGERPRINT_WIDTH};

const DEFAULT_SHINGLE_LEN: usize = 2;
const DEFAULT_SEED: u64 = 0xFEED_FACE_CAFE_BEEF;

/// Character-shingle SimHash generator.
///
/// Shingles are overlapping windows over the character stream, so the
/// generator needs no tokenizer and behaves the same for scripts without
/// word boundaries. Repeated shingles vote once per occurrence, which is
/// what weights frequent fragments.
#[derive(Debug, Clone)]
pub struct SimHasher {
    shingle_len: usize,
    seed: u64,
}

impl SimHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shingle width in characters. Must be at least 1; values of
    /// 2 or 3 work well for prose.
    pub fn with_shingle_len(mut self, shingle_len: usize) -> Self {
        self.shingle_len = shingle_len.max(1);
        self
    }

    /// Set the hash seed. Fingerprints from different seeds are not
    /// comparable with each other.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SimHasher {
    fn default() -> Self {
        Self {
            shingle_len: DEFAULT_SHINGLE_LEN,
            seed: DEFAULT_SEED,
        }
    }
}

impl Fingerprinter for SimHasher {
    fn fingerprint(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut votes = [0i32; FINGERPRINT_WIDTH];
        let mut shingle = String::new();

        let tally = |piece: &str, votes: &mut [i32; FINGERPRINT_WIDTH]| {
            let hash = xxh3_64_with_seed(piece.as_bytes(), self.seed) as u32;
            for (bit, vote) in votes.iter_mut().enumerate() {
                if (hash >> bit) & 1 == 1 {
                    *vote += 1;
                } else {
                    *vote -= 1;
                }
            }
        };

        if chars.len() < self.shingle_len {
            // Shorter than one shingle: hash the whole text as a single
            // feature. The empty string casts no votes and maps to all zeros.
            if !chars.is_empty() {
                tally(text, &mut votes);
            }
        } else {
            for window in chars.windows(self.shingle_len) {
                shingle.clear();
                shingle.extend(window.iter());
                tally(&shingle, &mut votes);
            }
        }

        let mut out = 0u32;
        for (bit, vote) in votes.iter().enumerate() {
            if *vote > 0 {
                out |= 1 << bit;
            }
        }
        format!("{out:032b}")
    }
}
