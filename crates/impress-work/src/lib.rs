//! impress-work: canonical Work records for the impress suite
//!
//! Turns heterogeneous, possibly duplicate bibliographic records into
//! comparable, identity-bearing works:
//! - Text canonicalization (whitespace cleanup, punctuation stripping)
//! - Required-field validation (title and authors)
//! - Identity fingerprints from first author + title
//! - Normalization pipeline tying the above together
//! - Coalescing of works that share a fingerprint
//! - Wire shapes for the search and format services
//!
//! # Example
//! ```
//! use impress_work::Work;
//!
//! let mut work = Work::new("  Attention Is All You Need ", vec!["A. Vaswani".to_string()]);
//! work.normalize().unwrap();
//! assert_eq!(work.title, "Attention Is All You Need");
//! assert_eq!(work.hash.len(), 64);
//! ```

pub mod coalesce;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod normalize;
pub mod text;
pub mod validation;
pub mod wire;
pub mod work;

pub use coalesce::{coalesce, coalesce_by_hash, MergeableField, IDENTITY_FIELDS, MERGEABLE_FIELDS};
pub use config::{FingerprintConfig, NormalizeConfig, WorkConfig};
pub use error::{ConfigError, RequiredField, Result, WorkError};
pub use fingerprint::{fingerprint, FingerprintScheme, Fingerprinter};
pub use normalize::{normalize, Normalizer};
pub use text::{clean, strip_punctuation, TextNormalizer, UnicodeTextNormalizer};
pub use validation::{validate, validate_work};
pub use wire::{FormatRequest, FormatResponse, SearchRequest, SearchResponse, WORK_FIELD_RULES};
pub use work::Work;
