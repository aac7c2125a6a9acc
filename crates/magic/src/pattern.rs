//! Decoding of textual pattern values into the bytes matched on disk.

use crate::{error::Error, rule::MagicKind};

/// Decode `value` according to `kind`.
///
/// String patterns are unescaped; numeric patterns parse as a decimal or
/// `0x`-prefixed integer and encode at the kind's width and byte order.
pub(crate) fn decode(kind: MagicKind, value: &str) -> Result<Vec<u8>, Error> {
    match kind {
        MagicKind::String => unescape(value),
        MagicKind::Byte => {
            let n = parse_int(kind, value)?;
            Ok(vec![n as u8])
        }
        MagicKind::Big16 => Ok((parse_int(kind, value)? as u16).to_be_bytes().to_vec()),
        MagicKind::Big32 => Ok((parse_int(kind, value)? as u32).to_be_bytes().to_vec()),
        MagicKind::Little16 => Ok((parse_int(kind, value)? as u16).to_le_bytes().to_vec()),
        MagicKind::Little32 => Ok((parse_int(kind, value)? as u32).to_le_bytes().to_vec()),
        MagicKind::Host16 => Ok((parse_int(kind, value)? as u16).to_ne_bytes().to_vec()),
        MagicKind::Host32 => Ok((parse_int(kind, value)? as u32).to_ne_bytes().to_vec()),
    }
}

/// Parse an integer literal and check it fits the kind's width.
fn parse_int(kind: MagicKind, value: &str) -> Result<u64, Error> {
    let bad = || Error::InvalidNumber {
        value: value.to_string(),
        kind,
    };
    let text = value.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse::<u64>(),
    };
    let n = parsed.map_err(|_| bad())?;
    let width = kind.width().unwrap_or(8);
    if width < 8 && n >= 1u64 << (width * 8) {
        return Err(bad());
    }
    Ok(n)
}

/// Expand C-style escapes in a string pattern.
///
/// Supported: `\\`, `\n`, `\r`, `\t`, `\0`, `\xHH` (one or two hex digits),
/// and `\NNN` (one to three octal digits).
pub(crate) fn unescape(value: &str) -> Result<Vec<u8>, Error> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let start = i;
        let bad = || Error::InvalidEscape {
            value: value.to_string(),
            pos: start,
        };
        i += 1;
        let Some(&esc) = bytes.get(i) else {
            return Err(bad());
        };
        i += 1;
        match esc {
            b'\\' => out.push(b'\\'),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'x' => {
                let mut n: u32 = 0;
                let mut digits = 0;
                while digits < 2 {
                    let Some(d) = bytes.get(i).and_then(|b| (*b as char).to_digit(16)) else {
                        break;
                    };
                    n = n * 16 + d;
                    digits += 1;
                    i += 1;
                }
                if digits == 0 {
                    return Err(bad());
                }
                out.push(n as u8);
            }
            b'0'..=b'7' => {
                let mut n: u32 = u32::from(esc - b'0');
                let mut digits = 1;
                while digits < 3 {
                    let Some(d) = bytes.get(i).and_then(|b| (*b as char).to_digit(8)) else {
                        break;
                    };
                    n = n * 8 + d;
                    digits += 1;
                    i += 1;
                }
                if n > 0xFF {
                    return Err(bad());
                }
                out.push(n as u8);
            }
            _ => return Err(bad()),
        }
    }
    Ok(out)
}
