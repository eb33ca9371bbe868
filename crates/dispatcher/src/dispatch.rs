//! Record → gauge mapping

use contracts::{MetricSink, Record};
use tracing::{debug, trace};

use crate::gauges;

/// Apply one record to the gauge sink
///
/// Position records with `active == false` produce no writes at all:
/// position gauges keep their last-known values until the receiver
/// reports a fix again. Fix and satellite records always apply, whatever
/// the fix state.
pub fn apply(record: &Record, sink: &dyn MetricSink) {
    match record {
        Record::Fix(fix) => {
            sink.set_scalar(gauges::ALTITUDE.name, fix.altitude);
        }
        Record::Satellites(info) => {
            sink.set_scalar(gauges::SATELLITE_COUNT.name, f64::from(info.used));
            sink.set_labeled(
                gauges::DILUTION_OF_PRECISION.name,
                (gauges::DOP_TYPE, gauges::DOP_POSITION),
                info.pdop,
            );
            sink.set_labeled(
                gauges::DILUTION_OF_PRECISION.name,
                (gauges::DOP_TYPE, gauges::DOP_HORIZONTAL),
                info.hdop,
            );
            sink.set_labeled(
                gauges::DILUTION_OF_PRECISION.name,
                (gauges::DOP_TYPE, gauges::DOP_VERTICAL),
                info.vdop,
            );
        }
        Record::Position(pos) => {
            if !pos.active {
                // no fix yet, keep last-known position gauges
                debug!("void position record, position gauges frozen");
                return;
            }
            sink.set_scalar(gauges::LATITUDE.name, pos.latitude);
            sink.set_scalar(gauges::LONGITUDE.name, pos.longitude);
            sink.set_scalar(gauges::SPEED.name, pos.speed);
            sink.set_scalar(gauges::VARIATION.name, pos.variation);
            sink.set_scalar(gauges::TRACK.name, pos.track);
        }
    }

    trace!(kind = %record.kind(), "record applied");
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use contracts::{
        FixData, GaugeKey, GaugeSnapshot, PositionData, SatelliteInfo,
    };

    use super::*;

    /// In-memory sink recording every write, for assertions
    #[derive(Default)]
    struct RecordingSink {
        gauges: Mutex<BTreeMap<GaugeKey, f64>>,
    }

    impl MetricSink for RecordingSink {
        fn set_scalar(&self, name: &str, value: f64) {
            self.gauges
                .lock()
                .unwrap()
                .insert(GaugeKey::scalar(name), value);
        }

        fn set_labeled(&self, name: &str, label: (&str, &str), value: f64) {
            self.gauges
                .lock()
                .unwrap()
                .insert(GaugeKey::labeled(name, label.0, label.1), value);
        }

        fn snapshot(&self) -> GaugeSnapshot {
            self.gauges
                .lock()
                .unwrap()
                .iter()
                .map(|(key, value)| (key.clone(), *value))
                .collect()
        }
    }

    fn active_position() -> Record {
        Record::Position(PositionData {
            active: true,
            latitude: 37.5,
            longitude: -122.3,
            speed: 5.1,
            variation: 4.2,
            track: 231.8,
        })
    }

    #[test]
    fn test_fix_updates_altitude() {
        let sink = RecordingSink::default();
        apply(&Record::Fix(FixData { altitude: 123.4 }), &sink);

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.scalar("altitude_meters"), 123.4);
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_satellites_update_count_and_dop() {
        let sink = RecordingSink::default();
        apply(
            &Record::Satellites(SatelliteInfo {
                used: 7,
                pdop: 1.2,
                hdop: 0.9,
                vdop: 0.8,
            }),
            &sink,
        );

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.scalar("satellite_count"), 7.0);
        assert_eq!(
            snapshot.value(&GaugeKey::labeled("dilution_of_precision", "type", "position")),
            1.2
        );
        assert_eq!(
            snapshot.value(&GaugeKey::labeled("dilution_of_precision", "type", "horizontal")),
            0.9
        );
        assert_eq!(
            snapshot.value(&GaugeKey::labeled("dilution_of_precision", "type", "vertical")),
            0.8
        );
    }

    #[test]
    fn test_active_position_updates_all_position_gauges() {
        let sink = RecordingSink::default();
        apply(&active_position(), &sink);

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.scalar("latitude_dd"), 37.5);
        assert_eq!(snapshot.scalar("longitude_dd"), -122.3);
        assert_eq!(snapshot.scalar("speed_knots"), 5.1);
        assert_eq!(snapshot.scalar("variation_dd"), 4.2);
        assert_eq!(snapshot.scalar("track_degtrue"), 231.8);
    }

    #[test]
    fn test_void_position_freezes_last_known_values() {
        let sink = RecordingSink::default();
        apply(&active_position(), &sink);

        let mut void = PositionData {
            active: false,
            latitude: 0.0,
            longitude: 0.0,
            speed: 0.0,
            variation: 0.0,
            track: 0.0,
        };
        apply(&Record::Position(void), &sink);

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.scalar("latitude_dd"), 37.5);
        assert_eq!(snapshot.scalar("longitude_dd"), -122.3);
        assert_eq!(snapshot.scalar("speed_knots"), 5.1);
        assert_eq!(snapshot.scalar("variation_dd"), 4.2);
        assert_eq!(snapshot.scalar("track_degtrue"), 231.8);

        // regaining the fix updates again
        void.active = true;
        void.latitude = 37.6;
        apply(&Record::Position(void), &sink);
        assert_eq!(sink.snapshot().scalar("latitude_dd"), 37.6);
    }

    #[test]
    fn test_void_position_never_suppresses_other_records() {
        let sink = RecordingSink::default();
        apply(
            &Record::Position(PositionData {
                active: false,
                latitude: 0.0,
                longitude: 0.0,
                speed: 0.0,
                variation: 0.0,
                track: 0.0,
            }),
            &sink,
        );
        apply(&Record::Fix(FixData { altitude: 99.0 }), &sink);
        apply(
            &Record::Satellites(SatelliteInfo {
                used: 3,
                pdop: 4.1,
                hdop: 3.0,
                vdop: 2.8,
            }),
            &sink,
        );

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.scalar("altitude_meters"), 99.0);
        assert_eq!(snapshot.scalar("satellite_count"), 3.0);
        assert!(!snapshot.contains(&GaugeKey::scalar("latitude_dd")));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let sink = RecordingSink::default();
        apply(&active_position(), &sink);
        let first = sink.snapshot();

        apply(&active_position(), &sink);
        assert_eq!(sink.snapshot(), first);
    }

    #[test]
    fn test_register_zero_initializes_scalars_only() {
        let sink = RecordingSink::default();
        gauges::register_gauges(&sink);

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.len(), 7);
        for spec in gauges::CATALOG.iter().filter(|s| s.label.is_none()) {
            assert!(snapshot.contains(&GaugeKey::scalar(spec.name)));
            assert_eq!(snapshot.scalar(spec.name), 0.0);
        }
    }
}
