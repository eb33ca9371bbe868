//! Frame-level scan: delimiters, kind token, checksum

use contracts::{DecodeOutcome, Frame, SentenceError, SentenceKind};

use crate::{gga, gsa, rmc};

/// Decode one frame
///
/// Outcome order:
/// 1. non-text / missing `$` → `Malformed`
/// 2. unrecognized kind token → `UnknownKind` (checksum not inspected)
/// 3. bad or mismatched `*hh` checksum → `Malformed`
/// 4. per-kind field extraction → `Decoded` or `Malformed`
pub fn decode(frame: &Frame) -> DecodeOutcome {
    let text = match std::str::from_utf8(frame.as_bytes()) {
        Ok(text) if text.is_ascii() => text,
        _ => return DecodeOutcome::Malformed(SentenceError::NotText),
    };

    let line = text.trim();
    let body = match line.strip_prefix('$') {
        Some(body) => body,
        None => return DecodeOutcome::Malformed(SentenceError::MissingStart),
    };

    let kind = match recognize(address_token(body)) {
        Some(kind) => kind,
        None => return DecodeOutcome::UnknownKind,
    };

    let payload = match verify_checksum(body) {
        Ok(payload) => payload,
        Err(e) => return DecodeOutcome::Malformed(e),
    };

    // fields[0] is the address token, data fields follow
    let fields: Vec<&str> = payload.split(',').collect();
    let parsed = match kind {
        SentenceKind::Gga => gga::parse(&fields[1..]),
        SentenceKind::Gsa => gsa::parse(&fields[1..]),
        SentenceKind::Rmc => rmc::parse(&fields[1..]),
    };

    match parsed {
        Ok(record) => DecodeOutcome::Decoded(record),
        Err(e) => DecodeOutcome::Malformed(e),
    }
}

/// Address token: everything between `$` and the first `,` or `*`
fn address_token(body: &str) -> &str {
    let end = body
        .find(|c| c == ',' || c == '*')
        .unwrap_or(body.len());
    &body[..end]
}

/// Map an address token to a consumed sentence kind
///
/// Talker-agnostic: the last three characters decide the kind, so GP/GN/GL
/// talkers are all consumed. Proprietary `$P...` sentences never match.
fn recognize(token: &str) -> Option<SentenceKind> {
    if token.len() != 5 || token.starts_with('P') {
        return None;
    }
    match &token[2..] {
        "GGA" => Some(SentenceKind::Gga),
        "GSA" => Some(SentenceKind::Gsa),
        "RMC" => Some(SentenceKind::Rmc),
        _ => None,
    }
}

/// Verify the optional `*hh` trailer, returning the payload before it
///
/// A sentence without `*` is accepted as-is. With `*`, the trailer must be
/// exactly two hex digits matching the XOR of all payload bytes.
fn verify_checksum(body: &str) -> Result<&str, SentenceError> {
    let (payload, field) = match body.rsplit_once('*') {
        Some((payload, field)) => (payload, field),
        None => return Ok(body),
    };

    if field.len() != 2 || !field.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SentenceError::BadChecksumField {
            field: field.to_string(),
        });
    }
    let declared = match u8::from_str_radix(field, 16) {
        Ok(declared) => declared,
        Err(_) => {
            return Err(SentenceError::BadChecksumField {
                field: field.to_string(),
            })
        }
    };

    let computed = payload.bytes().fold(0u8, |acc, b| acc ^ b);
    if computed != declared {
        return Err(SentenceError::ChecksumMismatch { computed, declared });
    }

    Ok(payload)
}
