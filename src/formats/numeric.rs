//! Shared numeric token parsing and formatting.
//!
//! All column codecs funnel their number handling through here so that every
//! format shares one precision contract: values are written in scientific
//! notation with [`SIGNIFICANT_DECIMALS`] decimals, which keeps seven
//! significant figures — the precision these formats have historically used.
//! Decoding an encoded value therefore reproduces the original within that
//! precision, even though byte-for-byte round trips of a source file are not
//! guaranteed.

use super::error::CodecError;

/// Decimals after the leading digit in encoded scientific notation.
pub const SIGNIFICANT_DECIMALS: usize = 6;

/// Field width of an encoded value, matching the historical `%14e` layout.
pub const COLUMN_WIDTH: usize = 14;

/// Parse one whitespace-delimited token as a floating-point value.
///
/// Accepts the plain and scientific notations found in these files. The
/// `nan`/`inf` spellings `f64::from_str` would accept are rejected — none of
/// the supported layouts encodes non-finite values, so a decoded measurement
/// is always finite. On failure the returned error carries the 1-based row
/// number and the exact token text.
pub fn parse_value(token: &str, row: usize) -> Result<f64, CodecError> {
    let value = token.parse::<f64>().map_err(|e| CodecError::MalformedRow {
        row,
        token: token.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_finite() {
        return Err(CodecError::MalformedRow {
            row,
            token: token.to_string(),
            reason: "non-finite value".to_string(),
        });
    }
    Ok(value)
}

/// Format a value in fixed scientific notation, e.g. `  7.412700e-02`.
///
/// The mantissa carries [`SIGNIFICANT_DECIMALS`] decimals, the exponent a
/// sign and at least two digits, and the result is right-aligned to
/// [`COLUMN_WIDTH`] characters.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        // NaN/Inf are never produced by decode; render them verbatim so an
        // encode of such a document remains inspectable.
        return format!("{:>width$}", value, width = COLUMN_WIDTH);
    }

    let raw = format!("{:.*e}", SIGNIFICANT_DECIMALS, value);
    let formatted = match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    };

    format!("{formatted:>width$}", width = COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_matches_historical_layout() {
        assert_eq!(format_value(0.0741270), "  7.412700e-02");
        assert_eq!(format_value(26046.5), "  2.604650e+04");
        assert_eq!(format_value(-32.1129), " -3.211290e+01");
        assert_eq!(format_value(0.0), "  0.000000e+00");
    }

    #[test]
    fn test_format_pads_exponent_to_two_digits() {
        assert_eq!(format_value(1.0), "  1.000000e+00");
        assert_eq!(format_value(1e5), "  1.000000e+05");
        assert_eq!(format_value(1e-5), "  1.000000e-05");
    }

    #[test]
    fn test_large_exponents_widen_the_field() {
        let s = format_value(1e123);
        assert_eq!(s.trim(), "1.000000e+123");
    }

    #[test]
    fn test_parse_accepts_scientific_and_plain_notation() {
        assert_eq!(parse_value("7.412700e-02", 1).unwrap(), 0.07412700);
        assert_eq!(parse_value("26046.5", 1).unwrap(), 26046.5);
        assert_eq!(parse_value("-1", 1).unwrap(), -1.0);
    }

    #[test]
    fn test_parse_rejects_non_finite_spellings() {
        for token in ["nan", "NaN", "inf", "-inf", "infinity"] {
            match parse_value(token, 3) {
                Err(CodecError::MalformedRow { row, reason, .. }) => {
                    assert_eq!(row, 3);
                    assert_eq!(reason, "non-finite value");
                }
                other => panic!("'{token}' accepted: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_reports_row_and_token() {
        let err = parse_value("abc", 17).unwrap_err();
        match err {
            CodecError::MalformedRow { row, token, .. } => {
                assert_eq!(row, 17);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_value_roundtrip_within_precision() {
        for &v in &[0.0741270, 26046.5, 32.1129, -1.5e-7, 9.999999e9] {
            let back = parse_value(format_value(v).trim(), 1).unwrap();
            assert!((back - v).abs() <= v.abs() * 1e-6, "{v} -> {back}");
        }
    }
}
