//! Parse-and-validate for values entered at capture or mutation time.
//!
//! These are stricter than the on-disk checks in [`crate::format`]: they are
//! the only way a new [`Record`](crate::model::Record) field value enters the
//! ledger.

use crate::error::FieldError;
use crate::format::DELIMITER;
use crate::model::{Code, Cost};

pub const MAX_PRODUCT_LEN: usize = 140;

pub fn parse_code(input: &str) -> Result<Code, FieldError> {
    input.parse()
}

/// Validates a product name and title-cases it.
pub fn parse_product(input: &str) -> Result<String, FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::EmptyProduct);
    }
    if input.chars().count() > MAX_PRODUCT_LEN {
        return Err(FieldError::ProductTooLong {
            max: MAX_PRODUCT_LEN,
        });
    }
    if input.contains(DELIMITER) {
        return Err(FieldError::Delimiter { field: "product" });
    }
    Ok(capwords(input))
}

pub fn parse_cost(input: &str) -> Result<Cost, FieldError> {
    input.trim().parse()
}

/// Quantities (and restock amounts) are plain digit strings.
pub fn parse_quantity(input: &str) -> Result<u64, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::BadQuantity(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| FieldError::BadQuantity(trimmed.to_string()))
}

/// Splits on whitespace, capitalises each word and joins with single spaces.
pub fn capwords(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capwords_normalises_case_and_spacing() {
        assert_eq!(capwords("running  SHOE"), "Running Shoe");
        assert_eq!(capwords("  air max 90 "), "Air Max 90");
    }

    #[test]
    fn product_is_title_cased() {
        assert_eq!(parse_product("trail runner").unwrap(), "Trail Runner");
    }

    #[test]
    fn product_rejects_blank_long_and_delimited() {
        assert_eq!(parse_product(" "), Err(FieldError::EmptyProduct));
        assert_eq!(
            parse_product(&"x".repeat(MAX_PRODUCT_LEN + 1)),
            Err(FieldError::ProductTooLong {
                max: MAX_PRODUCT_LEN
            })
        );
        assert!(parse_product(&"x".repeat(MAX_PRODUCT_LEN)).is_ok());
        assert_eq!(
            parse_product("Shoe, Red"),
            Err(FieldError::Delimiter { field: "product" })
        );
    }

    #[test]
    fn quantity_must_be_digits() {
        assert_eq!(parse_quantity("12").unwrap(), 12);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);
        for bad in ["", "-1", "1.5", "ten", "99999999999999999999999"] {
            assert!(parse_quantity(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn cost_input_allows_decimals() {
        assert_eq!(parse_cost("19.99").unwrap().to_string(), "19.99");
        assert!(parse_cost("-3").is_err());
    }
}
