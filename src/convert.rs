// value coercions shared by the table accessors. none of these fail: every
// input maps to some value.

pub const TRUE_VALUE: &str = "1";
pub const FALSE_VALUE: &str = "0";

/// A present value is true unless it is exactly `"0"`. The empty string
/// (a bare flag) is true.
pub fn is_true(value: &str) -> bool {
    value != FALSE_VALUE
}

pub fn bool_value(b: bool) -> &'static str {
    if b { TRUE_VALUE } else { FALSE_VALUE }
}

/// Parses the longest leading base-10 integer in `value`.
///
/// Leading ASCII whitespace is skipped, then an optional `+`/`-`, then as
/// many digits as follow. Anything after the digits is ignored, so `"11abc"`
/// is 11. When no digit follows, the result is 0. Out-of-range values
/// saturate at `i64::MAX` / `i64::MIN`.
pub fn leading_int(value: &str) -> i64 {
    let bytes = value.trim_start_matches(|c: char| c.is_ascii_whitespace()).as_bytes();

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut acc: i64 = 0;
    for b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        let d = (b - b'0') as i64;
        // accumulate negatively so i64::MIN is reachable
        acc = match acc.checked_mul(10).and_then(|a| a.checked_sub(d)) {
            Some(a) => a,
            None => {
                return if negative { i64::MIN } else { i64::MAX };
            }
        };
    }

    if negative {
        acc
    } else {
        acc.checked_neg().unwrap_or(i64::MAX)
    }
}
