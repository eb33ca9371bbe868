//! GSA - active satellites and dilution of precision
//!
//! The twelve satellite-id slots are only counted, never parsed: a slot
//! is in use when it is non-empty.

use contracts::{Record, SatelliteInfo, SentenceError, SentenceKind};

use crate::fields;

/// Minimum data fields through VDOP
const MIN_FIELDS: usize = 17;

/// The twelve satellite-id slots
const SV_SLOTS: std::ops::Range<usize> = 2..14;

const PDOP: usize = 14;
const HDOP: usize = 15;
const VDOP: usize = 16;

pub(crate) fn parse(data: &[&str]) -> Result<Record, SentenceError> {
    if data.len() < MIN_FIELDS {
        return Err(SentenceError::field_count(
            SentenceKind::Gsa,
            MIN_FIELDS,
            data.len(),
        ));
    }

    let used = data[SV_SLOTS].iter().filter(|slot| !slot.is_empty()).count() as u32;
    let pdop = fields::number(SentenceKind::Gsa, "pdop", data[PDOP])?;
    let hdop = fields::number(SentenceKind::Gsa, "hdop", data[HDOP])?;
    let vdop = fields::number(SentenceKind::Gsa, "vdop", data[VDOP])?;

    Ok(Record::Satellites(SatelliteInfo {
        used,
        pdop,
        hdop,
        vdop,
    }))
}
