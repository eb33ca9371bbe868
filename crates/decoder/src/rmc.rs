//! RMC - recommended minimum position data
//!
//! Position, speed, track and variation, plus the receiver status flag.
//! A void (`V`) sentence still decodes so the dispatcher can apply its
//! own freeze policy; unparseable fields are errors regardless of status.

use contracts::{PositionData, Record, SentenceError, SentenceKind};

use crate::fields;

/// Minimum data fields through the variation hemisphere
const MIN_FIELDS: usize = 11;

const STATUS: usize = 1;
const LATITUDE: usize = 2;
const LAT_HEMI: usize = 3;
const LONGITUDE: usize = 4;
const LON_HEMI: usize = 5;
const SPEED: usize = 6;
const TRACK: usize = 7;
const VARIATION: usize = 9;
const VAR_HEMI: usize = 10;

pub(crate) fn parse(data: &[&str]) -> Result<Record, SentenceError> {
    if data.len() < MIN_FIELDS {
        return Err(SentenceError::field_count(
            SentenceKind::Rmc,
            MIN_FIELDS,
            data.len(),
        ));
    }

    let active = match data[STATUS] {
        "A" => true,
        "V" => false,
        other => {
            return Err(SentenceError::Status {
                value: other.to_string(),
            })
        }
    };

    let latitude = fields::latitude(SentenceKind::Rmc, data[LATITUDE], data[LAT_HEMI])?;
    let longitude = fields::longitude(SentenceKind::Rmc, data[LONGITUDE], data[LON_HEMI])?;
    let speed = fields::number(SentenceKind::Rmc, "speed", data[SPEED])?;
    let track = fields::number(SentenceKind::Rmc, "track", data[TRACK])?;
    let variation = fields::signed_degrees(
        SentenceKind::Rmc,
        "variation",
        "variation hemisphere",
        data[VARIATION],
        data[VAR_HEMI],
    )?;

    Ok(Record::Position(PositionData {
        active,
        latitude,
        longitude,
        speed,
        variation,
        track,
    }))
}
