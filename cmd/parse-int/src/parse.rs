//! Integer and boolean parsers returning family error codes.

use ferror::{error_family, error_group, FResult};

error_family! {
    /// Command-line shape errors.
    pub enum ArgsError { InvalidArgs }
}

error_family! {
    /// Failures of [`parse_int`].
    pub enum ParseIntError { InvalidChar, ArithmeticOverflow }
}

error_family! {
    /// Failures of [`parse_bool`].
    pub enum ParseBoolError { InvalidChars }
}

error_group!(
    /// Every error this program can surface, in lookup order.
    pub fn err_to_string = [ArgsError, ParseIntError, ParseBoolError];
);

/// Parse a non-negative decimal `i32`. Only ASCII digits are accepted;
/// the empty string parses as 0.
pub fn parse_int(s: &str) -> FResult<i32> {
    let mut n: i32 = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            return Err(ParseIntError::InvalidChar.into());
        }
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(i32::from(b - b'0')))
            .ok_or(ParseIntError::ArithmeticOverflow)?;
    }
    Ok(n)
}

/// Parse exactly `true` or `false`.
pub fn parse_bool(s: &str) -> FResult<bool> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseBoolError::InvalidChars.into()),
    }
}
