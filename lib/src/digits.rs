//! Digit-pair table, digit counting, and buffer sizing constants.
//!
//! The table lets the formatters emit two digits per division by 100. Entry
//! `i` lives at bytes `2 * i` and `2 * i + 1` and holds the zero-padded text
//! of `i`, so `DIGIT_PAIRS[14..16] == *b"07"`.

/// Longest decimal text of a `u16` (`"65535"`).
pub const U16_MAX_DIGITS: usize = 5;

/// Longest decimal text of a `u64` (`"18446744073709551615"`).
pub const U64_MAX_DIGITS: usize = 20;

/// Longest decimal text of an `i64` (`"-9223372036854775808"`).
pub const I64_MAX_LEN: usize = 20;

/// Stack buffer size that fits any 64-bit integer with room to spare.
pub const FAST_BUF_LEN: usize = 24;

/// Conservative stack buffer size for callers that append suffixes.
pub const SAFE_BUF_LEN: usize = 32;

#[rustfmt::skip]
pub static DIGIT_PAIRS: [u8; 200] = *b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";

/// Copy the two-digit text of `pair` (which must be `< 100`) into
/// `dst[at - 1]` and `dst[at]`.
#[inline(always)]
pub(crate) fn write_pair(dst: &mut [u8], at: usize, pair: usize) {
    let i = pair * 2;
    dst[at] = DIGIT_PAIRS[i + 1];
    dst[at - 1] = DIGIT_PAIRS[i];
}

/// Number of decimal digits in `value`; zero has one digit.
///
/// Values below 10^12 resolve through a fixed tree of threshold comparisons.
/// Larger values strip twelve digits and recurse at most once.
pub const fn digit_count(value: u64) -> u32 {
    if value < 10 {
        return 1;
    }
    if value < 100 {
        return 2;
    }
    if value < 1_000 {
        return 3;
    }
    if value < 1_000_000_000_000 {
        if value < 100_000_000 {
            if value < 1_000_000 {
                if value < 10_000 {
                    return 4;
                }
                return 5 + (value >= 100_000) as u32;
            }
            return 7 + (value >= 10_000_000) as u32;
        }
        if value < 10_000_000_000 {
            return 9 + (value >= 1_000_000_000) as u32;
        }
        return 11 + (value >= 100_000_000_000) as u32;
    }
    12 + digit_count(value / 1_000_000_000_000)
}
