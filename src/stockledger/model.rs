//! Core data types: [`Record`] and its typed fields [`Code`] and [`Cost`].

use crate::error::FieldError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Suffix appended (once) to a product name when its price is reduced.
pub const DISCOUNT_MARKER: &str = " (ON SALE)";

const CODE_PREFIX: &str = "SKU";
const CODE_DIGITS: usize = 5;

/// Fractional costs keep at most this many digits after the point so the
/// fixed-point scale always fits a `u64` power of ten.
const MAX_SCALE: u32 = 18;

/// A product code: `SKU` followed by exactly five decimal digits, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(String);

impl Code {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Code {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let valid = upper.len() == CODE_PREFIX.len() + CODE_DIGITS
            && upper.starts_with(CODE_PREFIX)
            && upper[CODE_PREFIX.len()..]
                .bytes()
                .all(|b| b.is_ascii_digit());
        if valid {
            Ok(Code(upper))
        } else {
            Err(FieldError::BadCode(s.trim().to_string()))
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative unit cost that remembers whether it was written as an
/// integer or with a fractional part.
///
/// Fractional costs are exact fixed-point: `minor` holds every digit with the
/// point removed and `scale` is the number of digits after the point, so
/// `19.90` is `{ minor: 1990, scale: 2 }` and prints back as `19.90`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cost {
    Whole(u64),
    Fractional { minor: u64, scale: u32 },
}

impl Cost {
    fn fixed(&self) -> (u128, u32) {
        match *self {
            Cost::Whole(n) => (n as u128, 0),
            Cost::Fractional { minor, scale } => (minor as u128, scale),
        }
    }

    /// Compares numeric value, ignoring representation (`20` equals `20.0`).
    pub fn cmp_value(&self, other: &Cost) -> Ordering {
        let (a, sa) = self.fixed();
        let (b, sb) = other.fixed();
        let scale = sa.max(sb);
        let a = a * 10u128.pow(scale - sa);
        let b = b * 10u128.pow(scale - sb);
        a.cmp(&b)
    }

    /// `cost × quantity`, keeping the cost's digits after the point.
    pub fn times(&self, quantity: u64) -> StockValue {
        let (minor, scale) = self.fixed();
        StockValue {
            minor: minor * quantity as u128,
            scale,
        }
    }
}

impl FromStr for Cost {
    type Err = FieldError;

    /// Accepts `digits` or `digits.digits`; signs, exponents and special
    /// float names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || FieldError::BadCost(s.to_string());
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        match s.split_once('.') {
            None if all_digits(s) => s.parse().map(Cost::Whole).map_err(|_| bad()),
            Some((int, frac)) if all_digits(int) && all_digits(frac) => {
                let scale = u32::try_from(frac.len()).map_err(|_| bad())?;
                if scale > MAX_SCALE {
                    return Err(bad());
                }
                let minor = format!("{}{}", int, frac).parse().map_err(|_| bad())?;
                Ok(Cost::Fractional { minor, scale })
            }
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Cost::Whole(n) => write!(f, "{}", n),
            Cost::Fractional { minor, scale } => {
                let unit = 10u64.pow(scale);
                write!(
                    f,
                    "{}.{:0width$}",
                    minor / unit,
                    minor % unit,
                    width = scale as usize
                )
            }
        }
    }
}

/// Exact `cost × quantity`. Both factors are `u64`, so the product always
/// fits the `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StockValue {
    minor: u128,
    scale: u32,
}

impl fmt::Display for StockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.minor);
        }
        let unit = 10u128.pow(self.scale);
        write!(
            f,
            "{}.{:0width$}",
            self.minor / unit,
            self.minor % unit,
            width = self.scale as usize
        )
    }
}

/// One stock line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub country: String,
    pub code: Code,
    pub product: String,
    pub cost: Cost,
    pub quantity: u64,
}

impl Record {
    pub fn total_value(&self) -> StockValue {
        self.cost.times(self.quantity)
    }

    pub fn is_discounted(&self) -> bool {
        self.product.ends_with(DISCOUNT_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_upper_cased() {
        let code: Code = "sku00012".parse().unwrap();
        assert_eq!(code.as_str(), "SKU00012");
    }

    #[test]
    fn code_rejects_wrong_shapes() {
        for bad in ["", "SKU1234", "SKU123456", "ABC12345", "SKU1234a", "SKU-1234"] {
            assert!(bad.parse::<Code>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn cost_keeps_representation() {
        assert_eq!("20".parse::<Cost>().unwrap(), Cost::Whole(20));
        assert_eq!("20.0".parse::<Cost>().unwrap().to_string(), "20.0");
        assert_eq!("19.90".parse::<Cost>().unwrap().to_string(), "19.90");
        assert_eq!("0.05".parse::<Cost>().unwrap().to_string(), "0.05");
    }

    #[test]
    fn cost_rejects_non_plain_numbers() {
        for bad in ["", "-5", "+5", "1e3", "inf", "NaN", ".5", "5.", "1.2.3", " 5"] {
            assert!(bad.parse::<Cost>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn cost_compares_across_representations() {
        let whole: Cost = "20".parse().unwrap();
        let frac: Cost = "20.0".parse().unwrap();
        let lower: Cost = "19.99".parse().unwrap();
        assert_eq!(whole.cmp_value(&frac), Ordering::Equal);
        assert_eq!(lower.cmp_value(&whole), Ordering::Less);
        assert_eq!(whole.cmp_value(&lower), Ordering::Greater);
    }

    #[test]
    fn total_value_is_exact() {
        let cost: Cost = "10.50".parse().unwrap();
        assert_eq!(cost.times(3).to_string(), "31.50");
        assert_eq!(Cost::Whole(7).times(6).to_string(), "42");
        assert_eq!(cost.times(0).to_string(), "0.00");
    }

    #[test]
    fn total_value_does_not_clamp_past_u64() {
        assert_eq!(
            Cost::Whole(u64::MAX).times(2).to_string(),
            "36893488147419103230"
        );
        assert_eq!(
            Cost::Whole(u64::MAX).times(u64::MAX).to_string(),
            "340282366920938463426481119284349108225"
        );
        let cost: Cost = "10000000000.50".parse().unwrap();
        assert_eq!(
            cost.times(3_000_000_000).to_string(),
            "30000000001500000000.00"
        );
    }
}
