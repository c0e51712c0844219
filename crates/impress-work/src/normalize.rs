//! Normalization pipeline: clean, sort, validate, fingerprint
//!
//! Every text field is cleaned, keywords are sorted, the title and authors
//! are validated, and only then is the identity fingerprint derived. A work
//! that fails validation is left without a hash.

use crate::config::WorkConfig;
use crate::error::Result;
use crate::fingerprint::Fingerprinter;
use crate::text::{TextNormalizer, UnicodeTextNormalizer};
use crate::validation::validate;
use crate::Work;

/// Orchestrates canonicalization, validation and fingerprinting of works
#[derive(Clone, Debug)]
pub struct Normalizer<T = UnicodeTextNormalizer> {
    text: T,
    fingerprinter: Fingerprinter<T>,
    drop_blank_authors: bool,
}

impl Default for Normalizer<UnicodeTextNormalizer> {
    fn default() -> Self {
        Self::from_config(&WorkConfig::default())
    }
}

impl Normalizer<UnicodeTextNormalizer> {
    /// Build a normalizer with the default text classes
    pub fn from_config(config: &WorkConfig) -> Self {
        Self::with_text(UnicodeTextNormalizer, config)
    }
}

impl<T: TextNormalizer + Clone> Normalizer<T> {
    /// Build a normalizer around a custom text normalizer
    pub fn with_text(text: T, config: &WorkConfig) -> Self {
        Self {
            fingerprinter: Fingerprinter::new(text.clone(), config.fingerprint.scheme),
            text,
            drop_blank_authors: config.normalize.drop_blank_authors,
        }
    }
}

impl<T: TextNormalizer> Normalizer<T> {
    pub fn fingerprinter(&self) -> &Fingerprinter<T> {
        &self.fingerprinter
    }

    /// Normalize a work in place and populate its hash.
    ///
    /// Fails with `MissingField` when the cleaned title or author list is
    /// empty; the hash is cleared in that case.
    pub fn normalize(&self, work: &mut Work) -> Result<()> {
        let text = &self.text;

        for field in [
            &mut work.work_type,
            &mut work.doi,
            &mut work.arxiv,
            &mut work.isbn,
            &mut work.title,
            &mut work.version,
            &mut work.venue,
            &mut work.page,
        ] {
            *field = text.clean(field);
        }

        clean_list(text, &mut work.authors);
        if self.drop_blank_authors {
            work.authors.retain(|a| !a.is_empty());
        }
        // Blank keywords are kept; accumulating keywords is up to the caller
        clean_list(text, &mut work.keywords);

        // Byte-wise order: "Algorithms" < "cache" < "graph"
        work.keywords.sort();

        if let Err(err) = validate(&work.title, &work.authors) {
            work.hash.clear();
            return Err(err);
        }

        work.hash = self.fingerprinter.fingerprint(&work.authors[0], &work.title);
        tracing::trace!(hash = %work.hash, title = %work.title, "normalized work");

        Ok(())
    }

    /// Fingerprint raw values the way `normalize` would: clean, then hash
    pub fn fingerprint(&self, first_author: &str, title: &str) -> String {
        self.fingerprinter
            .fingerprint(&self.text.clean(first_author), &self.text.clean(title))
    }

    /// Normalize a batch, keeping the works that pass and the errors of those
    /// that fail (with their input index)
    pub fn normalize_all(&self, works: Vec<Work>) -> (Vec<Work>, Vec<(usize, crate::WorkError)>) {
        let mut normalized = Vec::with_capacity(works.len());
        let mut failures = Vec::new();

        for (index, mut work) in works.into_iter().enumerate() {
            match self.normalize(&mut work) {
                Ok(()) => normalized.push(work),
                Err(err) => failures.push((index, err)),
            }
        }

        tracing::debug!(
            normalized = normalized.len(),
            failed = failures.len(),
            "normalized batch"
        );
        (normalized, failures)
    }
}

fn clean_list<T: TextNormalizer>(text: &T, values: &mut [String]) {
    for value in values.iter_mut() {
        *value = text.clean(value);
    }
}

/// Normalize with the default configuration
pub fn normalize(work: &mut Work) -> Result<()> {
    Normalizer::<UnicodeTextNormalizer>::default().normalize(work)
}
