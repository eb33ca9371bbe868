//! GGA - fix data
//!
//! Only the antenna altitude is consumed; the remaining fields are
//! validated by count and otherwise ignored.

use contracts::{FixData, Record, SentenceError, SentenceKind};

use crate::fields;

/// Minimum data fields through the altitude unit
const MIN_FIELDS: usize = 10;

/// Altitude above mean sea level, metres
const ALTITUDE: usize = 8;

pub(crate) fn parse(data: &[&str]) -> Result<Record, SentenceError> {
    if data.len() < MIN_FIELDS {
        return Err(SentenceError::field_count(
            SentenceKind::Gga,
            MIN_FIELDS,
            data.len(),
        ));
    }

    let altitude = fields::number(SentenceKind::Gga, "altitude", data[ALTITUDE])?;
    Ok(Record::Fix(FixData { altitude }))
}
