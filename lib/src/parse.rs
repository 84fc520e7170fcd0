//! Decimal text to integers.
//!
//! Parsers take raw bytes, scan left to right, and reject on the first bad
//! byte. No whitespace trimming, no `+` sign, leading zeros accepted.
//! Overflow is detected before each multiply-add through the inverse bound
//! `value > (limit - digit) / 10`, so the accumulator never wraps.

use crate::decfmt_debug;
use crate::error::{ParseError, ParseResult};

#[cold]
fn reject(err: ParseError, text: &[u8]) -> ParseError {
    decfmt_debug!(
        "decfmt: rejected {:?} ({} bytes): {}",
        core::str::from_utf8(text).unwrap_or("<invalid utf-8>"),
        text.len(),
        err.as_str()
    );
    err
}

/// Accumulate `digits` into a magnitude no greater than `limit`.
#[inline]
fn accumulate(digits: &[u8], limit: u64) -> ParseResult<u64> {
    let mut value: u64 = 0;
    for &byte in digits {
        let digit = match byte {
            b'0'..=b'9' => u64::from(byte - b'0'),
            _ => return Err(ParseError::InvalidCharacter),
        };
        if value > (limit - digit) / 10 {
            return Err(ParseError::Overflow);
        }
        value = value * 10 + digit;
    }
    Ok(value)
}

/// Parse an unsigned decimal string.
pub fn parse_u64(text: &[u8]) -> ParseResult<u64> {
    if text.is_empty() {
        return Err(reject(ParseError::EmptyInput, text));
    }
    accumulate(text, u64::MAX).map_err(|err| reject(err, text))
}

/// Parse a signed decimal string with an optional leading `-`.
///
/// The negative range holds one more value than the positive range, so a
/// negative magnitude may reach `i64::MAX + 1` (`i64::MIN`). Scanning does not
/// stop at that boundary: any further digit is an overflow and any further
/// non-digit an invalid character.
pub fn parse_i64(text: &[u8]) -> ParseResult<i64> {
    let (negative, digits) = match text {
        [] => return Err(reject(ParseError::EmptyInput, text)),
        [b'-'] => return Err(reject(ParseError::InvalidString, text)),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, text),
    };

    let limit = if negative {
        (i64::MAX as u64) + 1
    } else {
        i64::MAX as u64
    };
    let magnitude = accumulate(digits, limit).map_err(|err| reject(err, text))?;

    if negative {
        // `magnitude as i64` wraps 2^63 to i64::MIN, which negates to itself.
        Ok((magnitude as i64).wrapping_neg())
    } else {
        Ok(magnitude as i64)
    }
}

/// Parse a boolean.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(text: &[u8]) -> ParseResult<bool> {
    match text {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Ok(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Ok(false),
        [] => Err(reject(ParseError::EmptyInput, text)),
        _ => Err(reject(ParseError::InvalidBool, text)),
    }
}
