//! Text exposition rendering
//!
//! Renders a gauge snapshot in the Prometheus text format (version
//! 0.0.4). Families are sorted by name, series within a family by label
//! value, so output is stable between scrapes.

use contracts::{GaugeSnapshot, GaugeSpec};

/// Content type of the rendered exposition
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render a snapshot as exposition text
///
/// Only families with at least one written series appear; each gets its
/// `# HELP`/`# TYPE` header from the spec, then one sample line per
/// series. Families in the snapshot but not in `specs` are skipped, so
/// the spec table is the closed list of what this process exports.
pub fn render(snapshot: &GaugeSnapshot, namespace: &str, specs: &[GaugeSpec]) -> String {
    let mut families: Vec<&GaugeSpec> = specs.iter().collect();
    families.sort_by_key(|spec| spec.name);

    let mut out = String::new();
    for spec in families {
        let series: Vec<_> = snapshot
            .iter()
            .filter(|(key, _)| key.name == spec.name)
            .collect();
        if series.is_empty() {
            continue;
        }

        out.push_str(&format!("# HELP {namespace}_{} {}\n", spec.name, spec.help));
        out.push_str(&format!("# TYPE {namespace}_{} gauge\n", spec.name));

        for (key, value) in series {
            match &key.label {
                Some((label_name, label_value)) => {
                    out.push_str(&format!(
                        "{namespace}_{}{{{label_name}=\"{}\"}} {value}\n",
                        key.name,
                        escape_label(label_value),
                    ));
                }
                None => {
                    out.push_str(&format!("{namespace}_{} {value}\n", key.name));
                }
            }
        }
    }

    out
}

/// Escape a label value per the exposition format
fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
