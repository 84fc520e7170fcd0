use decfmt_lib::{
    FastBuf, I64_MAX_LEN, NumBuf, ParseError, U16_MAX_DIGITS, U64_MAX_DIGITS, digit_count,
    format_i64, format_u16, format_u64, parse_i64, parse_u64,
};

#[test]
fn test_digit_count_extremes() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(u64::MAX), 20);
}

#[test]
fn test_parse_u64_extremes() {
    assert_eq!(parse_u64(b"18446744073709551615"), Ok(u64::MAX));
    assert_eq!(parse_u64(b"18446744073709551616"), Err(ParseError::Overflow));
}

#[test]
fn test_parse_i64_extremes() {
    assert_eq!(parse_i64(b"-9223372036854775808"), Ok(i64::MIN));
    assert_eq!(parse_i64(b"-9223372036854775809"), Err(ParseError::Overflow));
    assert_eq!(parse_i64(b"9223372036854775808"), Err(ParseError::Overflow));
}

#[test]
fn test_parse_malformed() {
    assert_eq!(parse_u64(b""), Err(ParseError::EmptyInput));
    assert_eq!(parse_i64(b""), Err(ParseError::EmptyInput));
    assert_eq!(parse_i64(b"-"), Err(ParseError::InvalidString));
    assert_eq!(parse_u64(b"12a"), Err(ParseError::InvalidCharacter));
}

#[test]
fn test_parse_arbitrary_bytes_never_panics() {
    let mut input = [0u8; 24];
    for seed in 0u8..=255 {
        for (i, byte) in input.iter_mut().enumerate() {
            *byte = seed.wrapping_mul(31).wrapping_add(i as u8 * 7);
        }
        for len in 0..=input.len() {
            let _ = parse_u64(&input[..len]);
            let _ = parse_i64(&input[..len]);
        }
    }
}

#[test]
fn test_format_i64_min() {
    let mut buf = [0u8; I64_MAX_LEN];
    assert_eq!(format_i64(&mut buf, i64::MIN), I64_MAX_LEN);
    assert_eq!(&buf, b"-9223372036854775808");
}

#[test]
fn test_format_u16_extremes() {
    let mut buf = [0u8; U16_MAX_DIGITS];
    let n = format_u16(&mut buf, 0);
    assert_eq!(&buf[..n], b"0");
    let n = format_u16(&mut buf, 65_535);
    assert_eq!(&buf[..n], b"65535");
}

#[test]
fn test_format_u64_max_exact_buffer() {
    let mut buf = [0u8; U64_MAX_DIGITS];
    assert_eq!(format_u64(&mut buf, u64::MAX), U64_MAX_DIGITS);
    assert_eq!(&buf, b"18446744073709551615");
}

#[test]
fn test_numbuf_sized_for_extremes() {
    let mut buf = FastBuf::new();
    assert_eq!(buf.format_i64(i64::MIN).map(<[u8]>::len), Some(I64_MAX_LEN));
    assert_eq!(buf.format_u64(u64::MAX).map(<[u8]>::len), Some(U64_MAX_DIGITS));

    let mut tight = NumBuf::<{ U64_MAX_DIGITS - 1 }>::new();
    assert_eq!(tight.format_u64(u64::MAX), None);
    assert_eq!(tight.format_i64(i64::MIN), None);
    assert_eq!(tight.format_i64(i64::MAX).map(<[u8]>::len), Some(19));
}
