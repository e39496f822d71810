//! Lenient numeric parsing shared by the hint, region, and color loaders.
//!
//! Skin files in the wild are hand-edited and frequently sloppy. These
//! helpers reproduce the forgiving C library semantics the format grew up
//! with: garbage yields zero instead of an error, and integer lists skip
//! whatever separators the author happened to use.

/// Parse a decimal integer prefix the way C `atoi` does.
///
/// Leading whitespace is skipped and an optional sign is honoured. Parsing
/// stops at the first non-digit; input with no digits yields 0. Values
/// outside `i32` saturate.
pub fn atoi(s: &str) -> i32 {
    strtol(s.as_bytes()).map_or(0, |(value, _)| value)
}

/// `strtol(s, &end, 10)`: returns the value and the number of bytes
/// consumed, or `None` when no digits were found.
fn strtol(bytes: &[u8]) -> Option<(i32, usize)> {
    let mut i = 0;
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        },
        Some(b'+') => {
            i += 1;
            false
        },
        _ => false,
    };

    let digits_start = i;
    let mut value: i64 = 0;
    while let Some(d) = bytes.get(i).filter(|b| b.is_ascii_digit()) {
        value = (value * 10 + i64::from(d - b'0')).min(i64::from(i32::MAX) + 1);
        i += 1;
    }
    if i == digits_start {
        return None;
    }

    let value = if negative { -value } else { value };
    let value = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Some((value, i))
}

/// Parse every integer in a loosely separated list.
///
/// Each number is read with `strtol` semantics; afterwards every character
/// up to the next digit is skipped. Consequently only the first number in
/// the list may carry a minus sign, so `"1, -2"` reads as `[1, 2]`. Region
/// files rely on this exact behaviour.
pub fn int_list(s: &str) -> Vec<i32> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut pos = 0;

    while let Some((value, used)) = strtol(&bytes[pos..]) {
        out.push(value);
        pos += used;
        while pos < bytes.len() && !bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }
    }
    out
}

/// Read one color channel from (up to) two hex characters.
///
/// Mirrors `strtol(pair, NULL, 16)`: leading whitespace and a sign are
/// accepted, parsing stops at the first non-hex character, and an empty
/// parse is 0. Negative results clamp to 0.
pub fn hex_channel(pair: &[u8]) -> u8 {
    let mut i = 0;
    while pair.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    let negative = match pair.get(i) {
        Some(b'-') => {
            i += 1;
            true
        },
        Some(b'+') => {
            i += 1;
            false
        },
        _ => false,
    };

    let mut value: u32 = 0;
    while let Some(d) = pair.get(i).and_then(|b| (*b as char).to_digit(16)) {
        value = value * 16 + d;
        i += 1;
    }

    if negative { 0 } else { value.min(255) as u8 }
}
