//! # Format Validator
//!
//! Inspects the raw lines of an inventory file before any of them is trusted.
//! The check never fails: it always produces a [`FormatReport`] and the caller
//! decides whether to load or reject the file.
//!
//! Every data line is checked on its own, so a bad header does not hide the
//! defects of the lines below it. Line numbers in the report are 1-based file
//! lines; the header is line 1.
//!
//! Per line:
//! - the line must split into exactly [`FIELD_COUNT`] fields on [`DELIMITER`]
//! - no field may be empty
//! - the cost column must be `digits` or `digits.digits`; the quantity column
//!   must be `digits` (an empty numeric field counts as both empty and not a
//!   number)
//! - numbers must fit a `u64`: a quantity or whole cost above
//!   18446744073709551615, or a decimal cost whose digits exceed it, is
//!   reported as not a number even though it is all digits
//! - a non-empty code column must look like `SKU#####`

use crate::model::{Code, Cost};
use std::fmt;

pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";
pub const DELIMITER: char = ',';
pub const FIELD_COUNT: usize = 5;

const CODE_POSITION: usize = 2;
const COST_POSITION: usize = 4;
const QUANTITY_POSITION: usize = 5;

/// Everything wrong with one data line. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineDefect {
    pub line: usize,
    /// Set when the line did not split into [`FIELD_COUNT`] fields.
    pub field_count: Option<usize>,
    pub empty_fields: Vec<usize>,
    pub not_number: Vec<usize>,
    pub bad_code: bool,
}

impl LineDefect {
    fn is_clean(&self) -> bool {
        self.field_count.is_none()
            && self.empty_fields.is_empty()
            && self.not_number.is_empty()
            && !self.bad_code
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    source: String,
    empty_file: bool,
    header_mismatch: bool,
    defects: Vec<LineDefect>,
}

impl FormatReport {
    pub fn is_valid(&self) -> bool {
        !self.empty_file && !self.header_mismatch && self.defects.is_empty()
    }

    pub fn is_empty_file(&self) -> bool {
        self.empty_file
    }

    pub fn header_mismatch(&self) -> bool {
        self.header_mismatch
    }

    /// Offending lines in file order.
    pub fn defects(&self) -> &[LineDefect] {
        &self.defects
    }
}

/// Checks the raw lines of the file named `source` (used only in the report).
pub fn check<L: AsRef<str>>(source: &str, lines: &[L]) -> FormatReport {
    let mut report = FormatReport {
        source: source.to_string(),
        empty_file: lines.is_empty(),
        header_mismatch: false,
        defects: Vec::new(),
    };

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if idx == 0 {
            report.header_mismatch = line != HEADER;
            continue;
        }
        let defect = check_line(idx + 1, line);
        if !defect.is_clean() {
            report.defects.push(defect);
        }
    }

    report
}

fn check_line(line_number: usize, line: &str) -> LineDefect {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let mut defect = LineDefect {
        line: line_number,
        field_count: (fields.len() != FIELD_COUNT).then_some(fields.len()),
        ..LineDefect::default()
    };

    for (idx, field) in fields.iter().enumerate() {
        let position = idx + 1;
        if field.is_empty() {
            defect.empty_fields.push(position);
        }
        match position {
            CODE_POSITION if !field.is_empty() => {
                defect.bad_code = field.parse::<Code>().is_err();
            }
            COST_POSITION if field.parse::<Cost>().is_err() => {
                defect.not_number.push(position);
            }
            QUANTITY_POSITION if !is_quantity(field) => {
                defect.not_number.push(position);
            }
            _ => {}
        }
    }

    defect
}

fn is_quantity(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()) && field.parse::<u64>().is_ok()
}

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the human-readable report. A valid report renders as an empty
/// string.
impl fmt::Display for FormatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return Ok(());
        }

        write!(f, "Errors in the file {}:", self.source)?;

        if self.empty_file {
            return write!(f, "\n\nThis file is empty.");
        }

        if self.header_mismatch {
            write!(
                f,
                "\n\nLine 1 should be equal to: '{}'.\nAny product information on line 1 will be ignored by the program.",
                HEADER
            )?;
        }

        for defect in &self.defects {
            write!(f, "\n\nLine: {}", defect.line)?;
            if let Some(found) = defect.field_count {
                write!(
                    f,
                    "\n\tWrong number of fields: expected {}, found {}",
                    FIELD_COUNT, found
                )?;
            }
            if !defect.empty_fields.is_empty() {
                write!(f, "\n\tEmpty fields: {}", join_positions(&defect.empty_fields))?;
            }
            if !defect.not_number.is_empty() {
                write!(
                    f,
                    "\n\tValue is not a number: {}",
                    join_positions(&defect.not_number)
                )?;
            }
            if defect.bad_code {
                write!(
                    f,
                    "\n\tProduct code is not in the format SKU#####: {}",
                    CODE_POSITION
                )?;
            }
        }

        Ok(())
    }
}
