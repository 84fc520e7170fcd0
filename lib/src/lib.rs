//! Allocation-free conversion between 64-bit integers and decimal text.
//!
//! Formatters write into caller buffers and report the byte count (0 plus a
//! sentinel byte on insufficient capacity). Parsers read raw bytes and return
//! a typed [`ParseError`] on empty, malformed or out-of-range input.

#![no_std]
#![forbid(unsafe_code)]

pub mod digits;
pub mod error;
pub mod format;
pub mod log;
pub mod numbuf;
pub mod parse;

pub use digits::{
    DIGIT_PAIRS, FAST_BUF_LEN, I64_MAX_LEN, SAFE_BUF_LEN, U16_MAX_DIGITS, U64_MAX_DIGITS,
    digit_count,
};
pub use error::{ParseError, ParseResult};
pub use format::{format_i64, format_u16, format_u32, format_u64};
pub use log::{
    LogBackend, LogLevel, log_clear_backend, log_get_level, log_register_backend, log_set_level,
};
pub use numbuf::{FastBuf, NumBuf, SafeBuf};
pub use parse::{parse_bool, parse_i64, parse_u64};
