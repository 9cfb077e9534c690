//! Pricing
//!
//! Conversions between the decimal amounts the catalog backend and the admin forms speak and
//! the minor-unit [`Money`] values used everywhere else.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Serializer;
use thiserror::Error;

/// Errors that can occur while reading a price.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    /// No amount was given.
    #[error("price is required")]
    Missing,

    /// The amount is not a number.
    #[error("invalid price: {0}")]
    Invalid(String),

    /// Prices cannot be negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),

    /// The amount does not fit in the currency's minor units.
    #[error("price out of range: {0}")]
    OutOfRange(Decimal),
}

/// Parse a price typed into a form, e.g. `"49.90"`, `"49,90"` or `"10"`.
///
/// # Errors
///
/// - [`PriceError::Missing`]: the input is blank.
/// - [`PriceError::Invalid`]: the input is not a decimal number.
/// - [`PriceError::Negative`]: the amount is below zero.
/// - [`PriceError::OutOfRange`]: the amount does not fit in minor units.
pub fn parse_price(s: &str, currency: &'static Currency) -> Result<Money<'static, Currency>, PriceError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(PriceError::Missing);
    }

    let amount = trimmed
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_err| PriceError::Invalid(trimmed.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceError::Negative(amount));
    }

    money_from_decimal(amount, currency)
}

/// Convert a decimal amount into [`Money`], rounding to the currency's minor unit.
///
/// # Errors
///
/// Returns [`PriceError::OutOfRange`] if the amount does not fit in `i64` minor units.
pub fn money_from_decimal(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PriceError> {
    let scale = Decimal::from(10_i64.pow(currency.exponent));

    let minor_units = amount
        .checked_mul(scale)
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or(PriceError::OutOfRange(amount))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Decimal amount of a [`Money`] value in major units.
pub fn money_to_decimal(money: &Money<'_, Currency>) -> Decimal {
    Decimal::new(money.to_minor_units(), money.currency().exponent)
}

/// Format a price the way the storefront shows it, e.g. `"R$ 10.00"`.
pub fn format_price(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let amount = money_to_decimal(money);

    format!(
        "{} {:.prec$}",
        currency.symbol,
        amount,
        prec = currency.exponent as usize
    )
}

/// Serialize [`Money`] as a plain decimal number, matching the backend's JSON shape.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize_money<S>(money: &Money<'_, Currency>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::float::serialize(&money_to_decimal(money), serializer)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{BRL, JPY};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_accepts_dot_and_comma_separators() -> TestResult {
        assert_eq!(parse_price("49.90", BRL)?, Money::from_minor(49_90, BRL));
        assert_eq!(parse_price("49,90", BRL)?, Money::from_minor(49_90, BRL));
        assert_eq!(parse_price(" 10 ", BRL)?, Money::from_minor(10_00, BRL));

        Ok(())
    }

    #[test]
    fn parse_price_rounds_to_minor_units() -> TestResult {
        assert_eq!(parse_price("0.125", BRL)?, Money::from_minor(12, BRL));
        assert_eq!(parse_price("0.135", BRL)?, Money::from_minor(14, BRL));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_blank_input() {
        assert_eq!(parse_price("   ", BRL), Err(PriceError::Missing));
    }

    #[test]
    fn parse_price_rejects_non_numeric_input() {
        assert_eq!(
            parse_price("dez reais", BRL),
            Err(PriceError::Invalid("dez reais".to_string()))
        );
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        assert!(matches!(
            parse_price("-1.00", BRL),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn parse_price_accepts_zero() -> TestResult {
        assert_eq!(parse_price("0", BRL)?, Money::from_minor(0, BRL));

        Ok(())
    }

    #[test]
    fn money_from_decimal_uses_currency_exponent() -> TestResult {
        assert_eq!(money_from_decimal(Decimal::new(1500, 0), JPY)?, Money::from_minor(1500, JPY));
        assert_eq!(money_from_decimal(Decimal::new(15, 0), BRL)?, Money::from_minor(15_00, BRL));

        Ok(())
    }

    #[test]
    fn money_from_decimal_rejects_overflow() {
        let huge = Decimal::MAX;

        assert_eq!(money_from_decimal(huge, BRL), Err(PriceError::OutOfRange(huge)));
    }

    #[test]
    fn format_price_uses_symbol_and_two_decimals() {
        assert_eq!(format_price(&Money::from_minor(10_00, BRL)), "R$ 10.00");
        assert_eq!(format_price(&Money::from_minor(49_90, BRL)), "R$ 49.90");
        assert_eq!(format_price(&Money::from_minor(5, BRL)), "R$ 0.05");
    }

    #[test]
    fn money_to_decimal_round_trips_minor_units() {
        assert_eq!(money_to_decimal(&Money::from_minor(12_345, BRL)), Decimal::new(12_345, 2));
    }
}
