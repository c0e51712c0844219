//! Identity fingerprints for works
//!
//! A fingerprint is the SHA-256 of the first author and the title, each
//! lowercased and stripped of punctuation, hex-encoded to 64 characters.
//! No other field contributes, so records that differ only in later authors,
//! venue, date, etc. share a fingerprint.
//!
//! The default [`FingerprintScheme::Concatenated`] feeds author and title into
//! the digest back to back. That keeps stored hashes stable but is not
//! injective: ("AB", "CD") and ("A", "BCD") collide. [`FingerprintScheme::Delimited`]
//! separates them with a unit-separator byte and produces different hashes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::text::{TextNormalizer, UnicodeTextNormalizer};

/// Separator fed between author and title under [`FingerprintScheme::Delimited`]
const UNIT_SEPARATOR: [u8; 1] = [0x1f];

/// How author and title are combined before hashing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintScheme {
    /// Author then title with nothing between them
    #[default]
    Concatenated,
    /// Author, 0x1F, title
    Delimited,
}

/// Derives fingerprints with a given scheme and text normalizer
#[derive(Clone, Debug, Default)]
pub struct Fingerprinter<T = UnicodeTextNormalizer> {
    text: T,
    scheme: FingerprintScheme,
}

impl<T: TextNormalizer> Fingerprinter<T> {
    pub fn new(text: T, scheme: FingerprintScheme) -> Self {
        Self { text, scheme }
    }

    pub fn scheme(&self) -> FingerprintScheme {
        self.scheme
    }

    /// Lowercase then strip punctuation
    fn canonical(&self, s: &str) -> String {
        self.text.strip_punctuation(&lowercase_per_char(s))
    }

    /// Compute the hex digest for a first author and title
    pub fn fingerprint(&self, first_author: &str, title: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical(first_author).as_bytes());
        if self.scheme == FingerprintScheme::Delimited {
            hasher.update(UNIT_SEPARATOR);
        }
        hasher.update(self.canonical(title).as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Lowercase one char at a time with the simple case mapping.
///
/// Unlike `str::to_lowercase` there is no context: a word-final `Σ` becomes
/// `σ`, not `ς`. `İ` becomes a plain `i`, and any other char whose lowercase
/// expands to several chars is kept as is. Stored hashes depend on this.
fn lowercase_per_char(s: &str) -> String {
    s.chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ if c == '\u{130}' => 'i',
                _ => c,
            }
        })
        .collect()
}

/// Fingerprint with the default normalizer and the concatenated scheme
pub fn fingerprint(first_author: &str, title: &str) -> String {
    Fingerprinter::<UnicodeTextNormalizer>::default().fingerprint(first_author, title)
}
