//! Required-field validation for works
//!
//! Runs on cleaned values, before any fingerprint is derived.

use crate::error::{RequiredField, Result, WorkError};
use crate::Work;

/// Check the minimal contract for a usable work: a title and at least one author.
///
/// The title is checked first, so a work missing both reports `no title`.
pub fn validate(title: &str, authors: &[String]) -> Result<()> {
    if title.is_empty() {
        return Err(WorkError::MissingField(RequiredField::Title));
    }

    if authors.is_empty() {
        return Err(WorkError::MissingField(RequiredField::Authors));
    }

    Ok(())
}

/// Validate a work's current (assumed cleaned) title and authors
pub fn validate_work(work: &Work) -> Result<()> {
    validate(&work.title, &work.authors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid() {
        assert!(validate("Title", &authors(&["A"])).is_ok());
    }

    #[test]
    fn test_missing_title() {
        assert_eq!(
            validate("", &authors(&["A"])),
            Err(WorkError::MissingField(RequiredField::Title))
        );
    }

    #[test]
    fn test_missing_authors() {
        assert_eq!(
            validate("Title", &[]),
            Err(WorkError::MissingField(RequiredField::Authors))
        );
    }

    #[test]
    fn test_title_reported_before_authors() {
        assert_eq!(
            validate("", &[]),
            Err(WorkError::MissingField(RequiredField::Title))
        );
    }

    #[test]
    fn test_validate_work() {
        let work = Work::new("T", authors(&["A"]));
        assert!(validate_work(&work).is_ok());
        assert!(validate_work(&Work::default()).is_err());
    }
}
