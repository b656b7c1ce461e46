//! Percent-decoding of export fields.
//!
//! WordPress writes slugs (and occasionally names) URL-encoded. Decoding
//! never fails: anything that is not a clean sequence of `%XX` escapes
//! decoding to UTF-8 is returned unchanged.

use tracing::warn;

/// Decodes every `%XX` escape in `raw`.
///
/// Returns `raw` unchanged if an escape is malformed or the decoded bytes
/// are not valid UTF-8. `+` is left alone.
pub fn decode_component(raw: &str) -> String {
    if !raw.contains('%') {
        return raw.to_string();
    }

    if !has_well_formed_escapes(raw) {
        warn!(value = raw, "malformed percent-encoding; keeping raw value");
        return raw.to_string();
    }

    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            warn!(value = raw, error = %err, "percent-decoded value is not UTF-8; keeping raw value");
            raw.to_string()
        }
    }
}

fn has_well_formed_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
