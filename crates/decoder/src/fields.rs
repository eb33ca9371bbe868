//! Shared field parsing helpers
//!
//! Numeric fields are strict: empty strings and stray characters are
//! errors, matching receiver output where a consumed field is either
//! fully present or the sentence is not trustworthy.

use contracts::{SentenceError, SentenceKind};

/// Parse a plain numeric field
pub(crate) fn number(
    kind: SentenceKind,
    field: &'static str,
    raw: &str,
) -> Result<f64, SentenceError> {
    raw.parse::<f64>()
        .map_err(|_| SentenceError::numeric(kind, field, raw))
}

/// Parse a `ddmm.mmmm` latitude with its `N`/`S` hemisphere
pub(crate) fn latitude(kind: SentenceKind, raw: &str, hemi: &str) -> Result<f64, SentenceError> {
    let degrees = angle(kind, "latitude", raw)?;
    match hemi {
        "N" => Ok(degrees),
        "S" => Ok(-degrees),
        _ => Err(SentenceError::hemisphere(kind, "latitude hemisphere", hemi)),
    }
}

/// Parse a `dddmm.mmmm` longitude with its `E`/`W` hemisphere
pub(crate) fn longitude(kind: SentenceKind, raw: &str, hemi: &str) -> Result<f64, SentenceError> {
    let degrees = angle(kind, "longitude", raw)?;
    match hemi {
        "E" => Ok(degrees),
        "W" => Ok(-degrees),
        _ => Err(SentenceError::hemisphere(kind, "longitude hemisphere", hemi)),
    }
}

/// Parse a plain-degrees field signed by an `E`/`W` hemisphere
pub(crate) fn signed_degrees(
    kind: SentenceKind,
    field: &'static str,
    hemi_field: &'static str,
    raw: &str,
    hemi: &str,
) -> Result<f64, SentenceError> {
    let value = number(kind, field, raw)?;
    match hemi {
        "E" => Ok(value),
        "W" => Ok(-value),
        _ => Err(SentenceError::hemisphere(kind, hemi_field, hemi)),
    }
}

/// Degrees-and-minutes (`[d]ddmm.mmmm`) to decimal degrees
fn angle(kind: SentenceKind, field: &'static str, raw: &str) -> Result<f64, SentenceError> {
    let value = number(kind, field, raw)?;
    let degrees = (value / 100.0).trunc();
    let minutes = value - degrees * 100.0;
    Ok(degrees + minutes / 60.0)
}
