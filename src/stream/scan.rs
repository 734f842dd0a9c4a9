//! Zero-allocation integer scanning over raw bytes.
//!
//! Used by the file- and reader-backed chunk sources, where input
//! arrives as mapped or buffered bytes rather than `&str`. The noise
//! policy matches the text parser: byte runs that do not parse as
//! integers are skipped, never reported.

/// Fast i64 parsing with no allocation and no error formatting.
///
/// Accepts an optional leading minus. Returns None for an empty slice,
/// any non-digit byte after the sign, or a value outside i64 range, so
/// oversized tokens drop as noise exactly like `str::parse::<i64>`.
#[inline(always)]
pub fn parse_i64_fast(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    if digits.is_empty() {
        return None;
    }

    // Accumulate as a negative magnitude; i64::MIN has no positive twin.
    let mut n: i64 = 0;
    for &b in digits {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        n = n.checked_mul(10)?.checked_sub(d as i64)?;
    }

    if negative {
        Some(n)
    } else {
        n.checked_neg()
    }
}

/// Append every integer found in `data` to `out`.
///
/// Tokens are maximal runs of digit and minus bytes; anything else is a
/// separator. Runs that fail to parse (such as `--` or `1-2`) are skipped.
pub fn scan_integers(data: &[u8], out: &mut Vec<i64>) {
    let mut pos = 0;
    while pos < data.len() {
        while pos < data.len() && !is_token_byte(data[pos]) {
            pos += 1;
        }
        let start = pos;
        while pos < data.len() && is_token_byte(data[pos]) {
            pos += 1;
        }
        if pos > start {
            if let Some(v) = parse_i64_fast(&data[start..pos]) {
                out.push(v);
            }
        }
    }
}

#[inline(always)]
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-'
}
