//! Percent Encoding (RFC 3986)
//!
//! Selective character-class encoding for path segments and query tokens.
//! Blanket `encodeURIComponent`-style encoding is stricter than what RFC 3986
//! permits unescaped in path and query contexts; over-encoding makes URLs
//! unreadable and breaks fragment pattern matching downstream, so each
//! context keeps its own allowed set literal.

/// Encode a query key or value.
///
/// Keeps the RFC 3986 query characters `@ : $ ,` literal on top of the
/// unreserved set. Spaces become `+` unless `encode_spaces` is set, in which
/// case they stay `%20`.
pub fn encode_query_token(token: &str, encode_spaces: bool) -> String {
    let mut out = String::with_capacity(token.len());

    for c in token.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~'
            | '!' | '*' | '\'' | '(' | ')'
            | '@' | ':' | '$' | ',' => out.push(c),
            ' ' if !encode_spaces => out.push('+'),
            _ => push_pct_encoded(&mut out, c),
        }
    }

    out
}

/// Encode a single path segment.
///
/// RFC 3986 `pchar` additionally allows `& = +` in segments, so those stay
/// literal too. Spaces are always `%20` here; `+` in a path is a literal
/// plus, never a space.
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());

    for c in segment.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~'
            | '!' | '*' | '\'' | '(' | ')'
            | '@' | ':' | '$' | ','
            | '&' | '=' | '+' => out.push(c),
            _ => push_pct_encoded(&mut out, c),
        }
    }

    out
}

/// Encode a path, segment by segment.
///
/// The path is split on `/` and each segment encoded independently, so
/// slashes themselves are never encoded.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-decode a path or fragment.
///
/// `+` stays a literal plus: path encoding never produces `+` for a space,
/// so decoding one back to a space would corrupt round-trips.
pub fn percent_decode(s: &str) -> String {
    decode_impl(s, false)
}

/// Percent-decode a query key or value, mapping `+` back to a space.
pub fn percent_decode_query(s: &str) -> String {
    decode_impl(s, true)
}

fn decode_impl(s: &str, plus_as_space: bool) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut rest = s.as_bytes();

    while let Some(&b) = rest.first() {
        match b {
            b'%' if rest.len() >= 3 && is_hex_pair(rest[1], rest[2]) => {
                bytes.push(hex_value(rest[1]) << 4 | hex_value(rest[2]));
                rest = &rest[3..];
            }
            b'+' if plus_as_space => {
                bytes.push(b' ');
                rest = &rest[1..];
            }
            // Malformed `%` sequences pass through untouched.
            _ => {
                bytes.push(b);
                rest = &rest[1..];
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

fn push_pct_encoded(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    for byte in c.encode_utf8(&mut buf).bytes() {
        out.push('%');
        out.push(hex_digit(byte >> 4));
        out.push(hex_digit(byte & 0x0F));
    }
}

fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        _ => (b'A' + nibble - 10) as char,
    }
}

fn is_hex_pair(a: u8, b: u8) -> bool {
    a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
