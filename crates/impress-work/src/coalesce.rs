//! Field-level merging of duplicate works
//!
//! Coalescing fills a primary work's empty descriptive fields from a
//! secondary work. The set of fields it may touch is the declarative
//! [`MERGEABLE_FIELDS`] table; [`IDENTITY_FIELDS`] are never written.

use std::collections::HashMap;

use crate::Work;

/// Fields coalescing never writes. Title and first author define the
/// fingerprint; keywords accumulate at a higher layer.
pub const IDENTITY_FIELDS: &[&str] = &["id", "hash", "title", "authors", "keywords"];

/// A field that may be filled from a secondary work
pub struct MergeableField {
    /// Wire name of the field
    pub name: &'static str,
    /// Copy the value from `secondary` when `primary` has none.
    /// Returns whether a value was written.
    pub fill: fn(primary: &mut Work, secondary: &Work) -> bool,
}

macro_rules! fill_if_empty {
    ($field:ident) => {
        |primary: &mut Work, secondary: &Work| {
            if primary.$field.is_empty() && !secondary.$field.is_empty() {
                primary.$field = secondary.$field.clone();
                true
            } else {
                false
            }
        }
    };
}

macro_rules! fill_if_zero {
    ($field:ident) => {
        |primary: &mut Work, secondary: &Work| {
            if primary.$field == 0 && secondary.$field != 0 {
                primary.$field = secondary.$field;
                true
            } else {
                false
            }
        }
    };
}

/// Descriptive fields filled by [`coalesce`], in merge order
pub const MERGEABLE_FIELDS: &[MergeableField] = &[
    MergeableField { name: "type", fill: fill_if_empty!(work_type) },
    MergeableField { name: "doi", fill: fill_if_empty!(doi) },
    MergeableField { name: "arxiv", fill: fill_if_empty!(arxiv) },
    MergeableField { name: "isbn", fill: fill_if_empty!(isbn) },
    MergeableField { name: "version", fill: fill_if_empty!(version) },
    MergeableField { name: "venue", fill: fill_if_empty!(venue) },
    MergeableField { name: "page", fill: fill_if_empty!(page) },
    MergeableField { name: "day", fill: fill_if_zero!(day) },
    MergeableField { name: "month", fill: fill_if_zero!(month) },
    MergeableField { name: "year", fill: fill_if_zero!(year) },
];

/// Merge `secondary` into `primary` wherever `primary` is empty or zero.
///
/// Never fails. Returns the names of the fields that received a value.
pub fn coalesce(primary: &mut Work, secondary: &Work) -> Vec<&'static str> {
    let filled: Vec<&'static str> = MERGEABLE_FIELDS
        .iter()
        .filter_map(|field| (field.fill)(primary, secondary).then_some(field.name))
        .collect();

    if !filled.is_empty() {
        tracing::trace!(hash = %primary.hash, fields = ?filled, "coalesced work");
    }
    filled
}

/// Collapse works that share a hash into one record per hash.
///
/// The first work seen for a hash is the primary and later ones are coalesced
/// into it. Output keeps the order in which each hash first appeared. Works
/// without a hash are passed through untouched.
pub fn coalesce_by_hash(works: Vec<Work>) -> Vec<Work> {
    let input_len = works.len();
    let mut merged: Vec<Work> = Vec::with_capacity(input_len);
    let mut index_by_hash: HashMap<String, usize> = HashMap::new();

    for work in works {
        if !work.has_hash() {
            merged.push(work);
            continue;
        }

        match index_by_hash.get(&work.hash) {
            Some(&index) => {
                coalesce(&mut merged[index], &work);
            }
            None => {
                index_by_hash.insert(work.hash.clone(), merged.len());
                merged.push(work);
            }
        }
    }

    tracing::debug!(input = input_len, output = merged.len(), "coalesced by hash");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(title: &str, author: &str) -> Work {
        Work::new(title, vec![author.to_string()])
    }

    #[test]
    fn test_fills_only_empty_fields() {
        let mut primary = work("T1", "A").with_date(2020, 0, 0);
        let secondary = work("T2", "B").with_venue("NeurIPS").with_date(1999, 12, 4);

        let filled = coalesce(&mut primary, &secondary);

        assert_eq!(primary.venue, "NeurIPS");
        assert_eq!(primary.year, 2020);
        assert_eq!(primary.month, 12);
        assert_eq!(primary.day, 4);
        assert_eq!(filled, vec!["venue", "day", "month"]);
    }

    #[test]
    fn test_identity_fields_untouched() {
        let mut primary = Work::default();
        let mut secondary = work("T2", "B").with_keywords(vec!["k".to_string()]);
        secondary.id = "id-2".into();
        secondary.hash = "h2".into();

        coalesce(&mut primary, &secondary);

        assert!(primary.id.is_empty());
        assert!(primary.hash.is_empty());
        assert!(primary.title.is_empty());
        assert!(primary.authors.is_empty());
        assert!(primary.keywords.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let mut primary = Work::default();
        assert!(coalesce(&mut primary, &Work::default()).is_empty());
        assert_eq!(primary, Work::default());
    }

    #[test]
    fn test_table_and_identity_set_are_disjoint() {
        for field in MERGEABLE_FIELDS {
            assert!(!IDENTITY_FIELDS.contains(&field.name), "{}", field.name);
        }
        assert_eq!(MERGEABLE_FIELDS.len() + IDENTITY_FIELDS.len(), 15);
    }

    #[test]
    fn test_coalesce_by_hash() {
        let mut a = work("T", "A").with_venue("ICML");
        a.hash = "h1".into();
        let mut b = work("T", "A").with_doi("10.1/b");
        b.hash = "h1".into();
        let c = work("Unhashed", "C");
        let mut d = work("U", "D");
        d.hash = "h2".into();

        let merged = coalesce_by_hash(vec![a, c, b, d]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].venue, "ICML");
        assert_eq!(merged[0].doi, "10.1/b");
        assert_eq!(merged[1].title, "Unhashed");
        assert_eq!(merged[2].hash, "h2");
    }
}
