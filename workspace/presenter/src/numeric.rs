//! Number text as the page shows it.
//!
//! `shortest_text` prints the shortest digits that read back to the same
//! value, switching to exponent form below `1e-6` and from `1e21` on.
//! `fixed_text` prints a fixed count of decimals with exact ties rounded
//! away from zero.

/// Fractional digits in the exact decimal expansion of the smallest `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which both forms switch to exponent notation.
const EXPONENT_FROM: f64 = 1e21;

/// Shortest round-trip text of `value`; `-0` prints as `0`.
pub fn shortest_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, e_sign, e.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// `value` with exactly `decimals` fractional digits.
///
/// Rounding looks at the exact binary value: anything at or above the
/// midpoint rounds away from zero. Non-finite values and magnitudes from
/// `1e21` on fall back to [`shortest_text`].
pub fn fixed_text(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_FROM {
        return shortest_text(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            int_len += 1;
        }
    }

    let (int_digits, frac_digits) = kept.split_at(int_len);
    let mut out = String::with_capacity(kept.len() + 2);
    // -0.0 is not below zero and prints unsigned
    if value < 0.0 {
        out.push('-');
    }
    out.extend(int_digits.iter().map(|d| *d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|d| *d as char));
    }
    out
}
