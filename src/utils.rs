use std::borrow::Cow;

use encoding_rs::WINDOWS_1252;

/// Parse a human size such as `10MiB`, `5MB`, `512k` or `102400`.
///
/// Returns `None` for anything that is not a non-negative number with an
/// optional unit suffix.
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_lowercase();
    // Longest suffixes first so "mib" is not read as "b".
    let units = [
        ("gib", 1024u64.pow(3)),
        ("mib", 1024u64.pow(2)),
        ("kib", 1024),
        ("gb", 1000u64.pow(3)),
        ("mb", 1000u64.pow(2)),
        ("kb", 1000),
        ("g", 1000u64.pow(3)),
        ("m", 1000u64.pow(2)),
        ("k", 1000),
        ("b", 1),
    ];

    for (unit, mult) in units {
        if let Some(num) = s.strip_suffix(unit) {
            let val = num.trim().parse::<f64>().ok()?;
            if !val.is_finite() || val < 0.0 {
                return None;
            }
            return Some((val * mult as f64) as u64);
        }
    }
    s.parse().ok()
}

/// Bytes stripped from both ends of a line: space, tab, LF, CR, NUL, VT.
fn is_line_padding(b: &u8) -> bool {
    matches!(*b, b' ' | b'\t' | b'\n' | b'\r' | b'\0' | 0x0B)
}

/// Trim line padding from both ends without decoding the bytes.
pub fn trim_line(raw: &[u8]) -> &[u8] {
    let start = raw.iter().position(|b| !is_line_padding(b)).unwrap_or(raw.len());
    let end = raw.iter().rposition(|b| !is_line_padding(b)).map_or(start, |i| i + 1);
    &raw[start..end]
}

/// Decode bytes for display, falling back to Windows-1252 when not UTF-8.
pub fn decode_best_effort(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => WINDOWS_1252.decode(bytes).0,
    }
}
