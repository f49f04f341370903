//! Positional numerals in bases 2 through 16.
//!
//! Digits are `0-9` followed by `a-f` (case-insensitive) for the values
//! 10 through 15.
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{Error, Result};

/// The smallest supported base.
pub const MIN_BASE: u32 = 2;
/// The largest supported base.
pub const MAX_BASE: u32 = 16;

/// Decodes a numeral written in the given base into an unsigned integer.
///
/// Digits are accumulated left to right (`acc = acc * base + digit`), so
/// numerals of any length decode exactly.
pub fn decode(numeral: &str, base: u32) -> Result<BigUint> {
    check_base(base)?;
    if numeral.is_empty() {
        return Err(Error::EmptyNumeral);
    }

    let mut acc = BigUint::zero();
    for digit in numeral.chars() {
        let value = digit
            .to_digit(MAX_BASE)
            .filter(|&value| value < base)
            .ok_or(Error::InvalidDigit { digit, base })?;
        acc *= base;
        acc += value;
    }

    Ok(acc)
}

/// Renders an unsigned integer as a numeral in the given base, using
/// lowercase digits.
pub fn encode(value: &BigUint, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

/// Parses a base given in decimal notation, e.g. `"16"`.
pub fn parse_base(base: &str) -> Result<u32> {
    let parsed = base
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidBase(base.to_owned()))?;
    check_base(parsed)?;
    Ok(parsed)
}

fn check_base(base: u32) -> Result<()> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base.to_string()));
    }
    Ok(())
}
