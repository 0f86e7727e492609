//! Hexadecimal immediates and their 16-bit halves.
//!
//! Immediates are always read as hex text, with or without a `0x` prefix, so
//! `li $t1, 10` loads sixteen. There is no base detection.

/// Largest value that fits the single-instruction `addiu` form.
pub const IMM16_LIMIT: i128 = 0x1_0000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImmError {
    #[error("missing immediate")]
    Empty,
    #[error("not a hexadecimal integer: {0:?}")]
    Invalid(String),
    #[error("does not fit in 32 bits: {0:?}")]
    OutOfRange(String),
}

/// Parse `[+-][0x]hexdigits`. Positive values must fit in 32 bits; negative
/// ones have no lower bound and saturate at `i128::MIN`.
pub fn parse_hex(text: &str) -> Result<i128, ImmError> {
    let t = text.trim();
    if t.is_empty() {
        return Err(ImmError::Empty);
    }
    let (neg, unsigned) = match t.as_bytes()[0] {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);
    // from_str_radix would otherwise accept a second sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ImmError::Invalid(t.to_string()));
    }
    if neg {
        return Ok(u128::from_str_radix(digits, 16)
            .ok()
            .and_then(|mag| i128::try_from(mag).ok())
            .map_or(i128::MIN, |mag| -mag));
    }
    match u32::from_str_radix(digits, 16) {
        Ok(val) => Ok(val as i128),
        Err(_) => Err(ImmError::OutOfRange(t.to_string())),
    }
}

/// Upper 16 bits of the 32-bit pattern of `val`, as `0x`-prefixed hex.
pub fn num_upper(val: i128) -> String {
    format!("0x{:X}", (val as u32) >> 16)
}

/// Lower 16 bits of the 32-bit pattern of `val`, as `0x`-prefixed hex.
pub fn num_lower(val: i128) -> String {
    format!("0x{:X}", (val as u32) & 0xFFFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_hex_with_and_without_prefix() {
        assert_eq!(parse_hex("0x10").unwrap(), 0x10);
        assert_eq!(parse_hex("0X3bf20").unwrap(), 0x3BF20);
        assert_eq!(parse_hex("10").unwrap(), 0x10);
        assert_eq!(parse_hex("  ff ").unwrap(), 0xFF);
        assert_eq!(parse_hex("-0x1").unwrap(), -1);
        assert_eq!(parse_hex("0xFFFFFFFF").unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn negative_values_have_no_lower_bound() {
        assert_eq!(parse_hex("-0x80000001").unwrap(), -0x8000_0001);
        assert_eq!(parse_hex("-0xFFFFFFFFFFFFFFFF").unwrap(), -0xFFFF_FFFF_FFFF_FFFF);
        let huge = format!("-0x{}", "F".repeat(40));
        assert_eq!(parse_hex(&huge).unwrap(), i128::MIN);
        assert!(parse_hex(&huge).unwrap() < IMM16_LIMIT);
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert_eq!(parse_hex(""), Err(ImmError::Empty));
        assert_eq!(parse_hex("zz"), Err(ImmError::Invalid("zz".into())));
        assert_eq!(parse_hex("0x"), Err(ImmError::Invalid("0x".into())));
        assert_eq!(parse_hex("--5"), Err(ImmError::Invalid("--5".into())));
        assert_eq!(parse_hex("$t1"), Err(ImmError::Invalid("$t1".into())));
        assert_eq!(parse_hex("0x100000000"), Err(ImmError::OutOfRange("0x100000000".into())));
        assert!(matches!(parse_hex("0x1234567890abcdef0"), Err(ImmError::OutOfRange(_))));
    }

    #[test]
    fn halves_split_on_16_bits() {
        assert_eq!(num_upper(0x3BF20), "0x3");
        assert_eq!(num_lower(0x3BF20), "0xBF20");
        assert_eq!(num_upper(0x1_0000), "0x1");
        assert_eq!(num_lower(0x1_0000), "0x0");
        assert_eq!(num_upper(0xDEAD_BEEF), "0xDEAD");
        assert_eq!(num_lower(0xDEAD_BEEF), "0xBEEF");
    }
}
