//! Work domain model

use serde::Deserialize;

/// A bibliographic work (article, book, preprint, etc.)
///
/// Empty strings and zero dates mean "unknown". `id` belongs to the storage
/// layer and is never set or read here. `hash` is only meaningful after a
/// successful [`Work::normalize`].
///
/// Serialization walks [`crate::wire::WORK_FIELD_RULES`]; deserialization
/// accepts any subset of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Work {
    pub id: String,
    pub hash: String,

    #[serde(rename = "type")]
    pub work_type: String,

    // Alternate identifiers, informative only
    pub doi: String,
    pub arxiv: String,
    pub isbn: String,

    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub authors: Vec<String>,

    pub version: String,
    pub venue: String,
    pub page: String,

    pub year: i32,
    pub month: i32,
    pub day: i32,

    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub keywords: Vec<String>,
}

impl Work {
    /// Create a work with its identity-defining fields
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            title: title.into(),
            authors,
            ..Default::default()
        }
    }

    /// Builder method to set the work type
    pub fn with_type(mut self, work_type: impl Into<String>) -> Self {
        self.work_type = work_type.into();
        self
    }

    /// Builder method to set the DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = doi.into();
        self
    }

    /// Builder method to set the arXiv ID
    pub fn with_arxiv(mut self, arxiv: impl Into<String>) -> Self {
        self.arxiv = arxiv.into();
        self
    }

    /// Builder method to set the venue
    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    /// Builder method to set the publication date (zero for unknown parts)
    pub fn with_date(mut self, year: i32, month: i32, day: i32) -> Self {
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }

    /// Builder method to set keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// First author, if any
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Whether this work carries an identity fingerprint
    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }

    /// Normalize in place with the default normalizer and populate `hash`
    pub fn normalize(&mut self) -> crate::Result<()> {
        crate::normalize::normalize(self)
    }

    /// Fill empty descriptive fields from `other`, leaving identity fields alone
    pub fn coalesce(&mut self, other: &Work) {
        crate::coalesce::coalesce(self, other);
    }
}
