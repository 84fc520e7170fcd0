//! Integer to decimal text, into caller-provided buffers.
//!
//! Every function writes into a `&mut [u8]` and returns the number of bytes
//! written. No heap, no `core::fmt`, no terminator byte.
//!
//! # Capacity
//!
//! A value needs exactly as many bytes as its text: `digit_count(v)` for
//! unsigned values, one more for a negative sign. When the buffer is shorter
//! the call writes nothing except the sentinel `dst[0] = 0` (if `dst` is not
//! empty) and returns 0. Output is therefore either complete or absent, never
//! truncated.
//!
//! ```ignore
//! let mut buf = [0u8; 24];
//! let n = format_i64(&mut buf, -1234);
//! assert_eq!(&buf[..n], b"-1234");
//! ```

use crate::decfmt_debug;
use crate::digits::{digit_count, write_pair};

/// Write the sentinel and report the shortfall.
#[cold]
fn capacity_exceeded(dst: &mut [u8], needed: usize) {
    if let Some(first) = dst.first_mut() {
        *first = 0;
    }
    decfmt_debug!(
        "decfmt: {} bytes needed, buffer holds {}",
        needed,
        dst.len()
    );
}

/// Fill `dst` with the digits of `value`, right to left.
///
/// `dst.len()` must equal the digit count of `value`.
#[inline]
fn write_digits(dst: &mut [u8], mut value: u64) {
    let mut next = dst.len() - 1;

    while value >= 100 {
        let pair = (value % 100) as usize;
        value /= 100;
        write_pair(dst, next, pair);
        next -= 2;
    }

    if value < 10 {
        dst[next] = b'0' + value as u8;
    } else {
        write_pair(dst, next, value as usize);
    }
}

/// Format a `u64` as decimal into `dst`.
///
/// Returns the digit count, or 0 with `dst[0] == 0` when `dst` is shorter
/// than [`digit_count`]`(value)`.
pub fn format_u64(dst: &mut [u8], value: u64) -> usize {
    let len = digit_count(value) as usize;
    if len > dst.len() {
        capacity_exceeded(dst, len);
        return 0;
    }

    write_digits(&mut dst[..len], value);
    len
}

/// Format a `u32` as decimal into `dst`.
///
/// Convenience wrapper around [`format_u64`].
#[inline]
pub fn format_u32(dst: &mut [u8], value: u32) -> usize {
    format_u64(dst, u64::from(value))
}

/// Format an `i64` as decimal into `dst`.
///
/// Negative values are prefixed with `'-'` and need one byte more than their
/// magnitude. The sign is only written once the whole text is known to fit.
pub fn format_i64(dst: &mut [u8], value: i64) -> usize {
    if value >= 0 {
        return format_u64(dst, value as u64);
    }

    let magnitude = if value == i64::MIN {
        (i64::MAX as u64) + 1
    } else {
        (-value) as u64
    };

    let len = 1 + digit_count(magnitude) as usize;
    if len > dst.len() {
        capacity_exceeded(dst, len);
        return 0;
    }

    dst[0] = b'-';
    format_u64(&mut dst[1..], magnitude) + 1
}

/// Format a `u16` as decimal into `dst`.
///
/// An empty buffer always yields 0 without writing anything.
pub fn format_u16(dst: &mut [u8], value: u16) -> usize {
    if dst.is_empty() {
        capacity_exceeded(dst, 1);
        return 0;
    }
    if value == 0 {
        dst[0] = b'0';
        return 1;
    }

    let mut len = 1;
    let mut rest = value;
    while rest >= 10 {
        rest /= 10;
        len += 1;
    }

    if len > dst.len() {
        capacity_exceeded(dst, len);
        return 0;
    }

    write_digits(&mut dst[..len], u64::from(value));
    len
}
