//! Static gauge catalog
//!
//! Every metric this exporter can emit, with its operator-facing help
//! text. Names never carry the namespace; the renderer prefixes it.

use contracts::{GaugeSpec, MetricSink};
use tracing::debug;

/// Metric namespace, prefixed to every gauge name at exposition
pub const NAMESPACE: &str = "gps";

/// Label name of the dilution-of-precision family
pub const DOP_TYPE: &str = "type";

/// DOP label values
pub const DOP_POSITION: &str = "position";
pub const DOP_HORIZONTAL: &str = "horizontal";
pub const DOP_VERTICAL: &str = "vertical";

pub const LATITUDE: GaugeSpec = GaugeSpec {
    name: "latitude_dd",
    help: "Current latitude in decimal degrees",
    label: None,
};

pub const LONGITUDE: GaugeSpec = GaugeSpec {
    name: "longitude_dd",
    help: "Current longitude in decimal degrees",
    label: None,
};

pub const VARIATION: GaugeSpec = GaugeSpec {
    name: "variation_dd",
    help: "Current variation in decimal degrees",
    label: None,
};

pub const TRACK: GaugeSpec = GaugeSpec {
    name: "track_degtrue",
    help: "Track angle in degrees True",
    label: None,
};

pub const ALTITUDE: GaugeSpec = GaugeSpec {
    name: "altitude_meters",
    help: "Current altitude in meters",
    label: None,
};

pub const SPEED: GaugeSpec = GaugeSpec {
    name: "speed_knots",
    help: "Current speed in knots",
    label: None,
};

pub const SATELLITE_COUNT: GaugeSpec = GaugeSpec {
    name: "satellite_count",
    help: "Number of satellites currently used for fix",
    label: None,
};

pub const DILUTION_OF_PRECISION: GaugeSpec = GaugeSpec {
    name: "dilution_of_precision",
    help: "Current dilution of precision",
    label: Some(DOP_TYPE),
};

/// Every exported gauge, in registration order
pub const CATALOG: [GaugeSpec; 8] = [
    SATELLITE_COUNT,
    DILUTION_OF_PRECISION,
    LATITUDE,
    LONGITUDE,
    VARIATION,
    TRACK,
    ALTITUDE,
    SPEED,
];

/// Zero-initialize every scalar gauge
///
/// Scalars are visible in the exposition from process start. Labeled
/// families stay absent until their first write, so no phantom series
/// with a made-up label value ever appears.
pub fn register_gauges(sink: &dyn MetricSink) {
    for spec in CATALOG.iter().filter(|spec| spec.label.is_none()) {
        sink.set_scalar(spec.name, 0.0);
    }
    debug!(gauges = CATALOG.len(), "gauge catalog registered");
}
