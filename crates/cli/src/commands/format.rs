//! Format an amount for display.
//!
//! # Usage
//!
//! ```bash
//! # Default dollars
//! vitrine format 1234.5
//!
//! # ISO currency code
//! vitrine format 1234.5 --code EUR
//!
//! # Store currency record (JSON)
//! vitrine format 1234.5 --currency currency.json
//! ```

use std::io::Write;

use vitrine_core::{CurrencyDisplay, CurrencyFormat, NumericValue, format_price};

use crate::error::CliError;

/// Where the currency for formatting comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencySource {
    None,
    Code(String),
    File(String),
}

/// Format `amount` and write the result to `out`.
///
/// # Errors
///
/// Returns an error if `amount` is not a number, if the currency file cannot
/// be read or parsed, or if writing fails.
pub fn run(amount: &str, source: &CurrencySource, out: &mut impl Write) -> Result<(), CliError> {
    let value = NumericValue::from(amount)
        .to_number()
        .ok_or_else(|| CliError::InvalidAmount(amount.to_owned()))?;

    let formatted = match source {
        CurrencySource::None => format_price(value, CurrencyDisplay::Default),
        CurrencySource::Code(code) => format_price(value, CurrencyDisplay::Code(code)),
        CurrencySource::File(path) => {
            // Full currency records flatten their format fields, so either
            // shape parses here.
            let format: CurrencyFormat = super::read_json(path)?;
            format_price(value, CurrencyDisplay::Format(&format))
        }
    };

    writeln!(out, "{formatted}")?;
    Ok(())
}
