//! Country resolution seam.
//!
//! Turning free text into a real country name (fuzzy lookup, disambiguation)
//! is left to a [`CountryResolver`]. The ledger only needs the final string to
//! be non-empty and free of the field delimiter.

use crate::error::FieldError;
use crate::fields::capwords;
use crate::format::DELIMITER;

pub trait CountryResolver {
    fn resolve(&self, query: &str) -> Result<String, FieldError>;
}

/// Single-character entries that can never be a country.
const FORBIDDEN: &[&str] = &[
    "/", "\\", "\"", "'", "*", ";", "-", "?", "[", "]", "(", ")", "~", "!", "$", "{", "}", "<",
    ">", "#", "@", "&", "|",
];

/// Accepts the query as the country name after basic sanity checks.
///
/// `"Korea, Republic of"` becomes `"Korea - Republic Of"` so the delimiter
/// never reaches the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SanitizingResolver;

impl CountryResolver for SanitizingResolver {
    fn resolve(&self, query: &str) -> Result<String, FieldError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FieldError::BadCountry("entry is empty".into()));
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::BadCountry("entry is a number not a country".into()));
        }
        if FORBIDDEN.contains(&trimmed) {
            return Err(FieldError::BadCountry("invalid entry".into()));
        }

        let rewritten = trimmed.replace(", ", " - ");
        if rewritten.contains(DELIMITER) {
            return Err(FieldError::Delimiter { field: "country" });
        }
        Ok(capwords(&rewritten))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_names() {
        assert_eq!(SanitizingResolver.resolve(" france ").unwrap(), "France");
        assert_eq!(
            SanitizingResolver.resolve("united kingdom").unwrap(),
            "United Kingdom"
        );
    }

    #[test]
    fn rewrites_comma_space() {
        assert_eq!(
            SanitizingResolver.resolve("Korea, Republic of").unwrap(),
            "Korea - Republic Of"
        );
        assert_eq!(
            SanitizingResolver.resolve("Korea,Republic"),
            Err(FieldError::Delimiter { field: "country" })
        );
    }

    #[test]
    fn rejects_junk() {
        for bad in ["", "  ", "1234", "?", "@"] {
            assert!(SanitizingResolver.resolve(bad).is_err(), "{bad:?}");
        }
    }
}
