//! Typed stack buffer for formatting.
//!
//! [`NumBuf`] owns a correctly-sized array so callers don't juggle buffer
//! lengths or check sentinel bytes themselves:
//!
//! ```ignore
//! let mut buf = FastBuf::new();
//! assert_eq!(buf.format_i64(-17), Some(&b"-17"[..]));
//! assert_eq!(buf.as_str(), "-17");
//! ```

use crate::digits::{FAST_BUF_LEN, SAFE_BUF_LEN};
use crate::format::{format_i64, format_u16, format_u32, format_u64};

/// Stack-allocated formatting buffer.
///
/// `N` should be sized for the largest formatted output expected:
/// - Decimal `u64::MAX` needs 20 bytes
/// - Decimal `i64::MIN` needs 20 bytes ('-' + 19 digits)
/// - Decimal `u32::MAX` needs 10 bytes
/// - Decimal `u16::MAX` needs 5 bytes
#[derive(Clone, Copy, Debug)]
pub struct NumBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

/// Fits any 64-bit integer.
pub type FastBuf = NumBuf<FAST_BUF_LEN>;

/// Fits any 64-bit integer plus a suffix.
pub type SafeBuf = NumBuf<SAFE_BUF_LEN>;

macro_rules! numbuf_formatters {
    ($($ty:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Format a `" $ty "` as decimal; `None` if it does not fit in `N` bytes."]
                #[inline]
                pub fn [<format_ $ty>](&mut self, value: $ty) -> Option<&[u8]> {
                    self.len = [<format_ $ty>](&mut self.buf, value);
                    if self.len == 0 {
                        None
                    } else {
                        Some(&self.buf[..self.len])
                    }
                }
            )*
        }
    };
}

impl<const N: usize> NumBuf<N> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    numbuf_formatters!(u64, u32, i64, u16);

    /// Bytes produced by the last successful format; empty after a failure.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Text produced by the last successful format; empty after a failure.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and '-' are ever written below `len`.
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for NumBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}
