//! Backend entity types
//!
//! These types mirror the JSON documents returned by the Sensor Continuum
//! API and are shared between server rendering and the browser build.
//! Timestamps that arrive as RFC 3339 strings stay raw until display so a
//! malformed value degrades to a placeholder instead of rejecting the whole
//! payload.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Analysis results keyed by macrozone name, then by reading type, in the
/// order the backend sent them
pub type ByMacrozone<T> = IndexMap<String, IndexMap<String, T>>;

/// Region as returned by the region list and region detail endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    #[serde(default)]
    pub macrozone_count: u32,
    /// Only populated by the region detail endpoint
    #[serde(default)]
    pub macrozones: Vec<Macrozone>,
    #[serde(default)]
    pub hubs: Vec<Hub>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macrozone {
    #[serde(default)]
    pub region_name: String,
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub zone_count: u32,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub hubs: Vec<Hub>,
    #[serde(default)]
    pub zone_hubs: Vec<Hub>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

/// A zone is identified only by its name within a macrozone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub macrozone_name: String,
    pub name: String,
    #[serde(default)]
    pub creation_time: Option<String>,
}

/// Region, macrozone or zone hub; the tag fields are empty where the
/// backend does not send them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    pub id: String,
    #[serde(default)]
    pub macrozone_name: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub registration_time: Option<String>,
    #[serde(default)]
    pub last_seen: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: String,
    #[serde(default)]
    pub macrozone_name: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub registration_time: Option<String>,
    #[serde(default)]
    pub last_seen: Option<String>,
}

/// Raw sensor reading; `timestamp` is in epoch seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macrozone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<String>,
}

/// Aggregated statistics for one reading type over one time bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatePoint {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macrozone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

/// Similarity between a macrozone trend and its region trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    #[serde(default)]
    pub macrozone: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub correlation: Option<f64>,
    #[serde(default)]
    pub slope_macro: Option<f64>,
    #[serde(default)]
    pub slope_region: Option<f64>,
    #[serde(default)]
    pub divergence: Option<f64>,
}

/// Year-over-year variation of one reading type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationEntry {
    #[serde(default)]
    pub macrozone: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub current: Option<f64>,
    #[serde(default)]
    pub previous: Option<f64>,
    #[serde(default)]
    pub delta_perc: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Variation of a macrozone compared with its spatial neighbours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationCorrelationEntry {
    #[serde(default)]
    pub macrozone: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub variation: Option<VariationEntry>,
    #[serde(default)]
    pub neighbor_mean: Option<f64>,
    #[serde(default)]
    pub neighbor_std_dev: Option<f64>,
    #[serde(default)]
    pub neighbor_variation: Vec<VariationEntry>,
    #[serde(default)]
    pub abs_error: Option<f64>,
    #[serde(default)]
    pub z_score: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_region_detail() {
        let json = r#"{
            "name": "Lazio",
            "macrozone_count": 1,
            "macrozones": [{
                "region_name": "Lazio",
                "name": "Roma",
                "lat": 41.9,
                "lon": 12.5,
                "creation_time": "2025-01-10T08:00:00Z",
                "zone_count": 2
            }],
            "hubs": [{
                "id": "hub-1",
                "service": "intermediate-fog-hub",
                "registration_time": "2025-01-10T08:00:00Z",
                "last_seen": "2025-09-20T10:00:00Z"
            }]
        }"#;

        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.name, "Lazio");
        assert_eq!(region.macrozones.len(), 1);
        assert_eq!(region.macrozones[0].zone_count, 2);
        assert!(region.macrozones[0].zones.is_empty());
        assert_eq!(region.hubs[0].service, "intermediate-fog-hub");
        assert_eq!(region.hubs[0].zone_name, "");
    }

    #[test]
    fn parse_region_list_entry_without_details() {
        let json = r#"[{"name": "Lazio", "macrozone_count": 3}]"#;
        let regions: Vec<Region> = serde_json::from_str(json).unwrap();
        assert_eq!(regions[0].macrozone_count, 3);
        assert!(regions[0].macrozones.is_empty());
        assert!(regions[0].hubs.is_empty());
    }

    #[test]
    fn parse_macrozone_with_zone_tags() {
        let json = r#"{
            "name": "MZ1",
            "zones": [{"name": "Z1"}],
            "zone_hubs": [{"id": "H1", "zone_name": "Z1", "last_seen": null}],
            "sensors": [{"id": "S1", "zone_name": "Z1", "type": "temperature", "reference": "bme680"}]
        }"#;

        let macrozone: Macrozone = serde_json::from_str(json).unwrap();
        assert_eq!(macrozone.zones[0].name, "Z1");
        assert_eq!(macrozone.zone_hubs[0].last_seen, None);
        assert_eq!(macrozone.sensors[0].kind, "temperature");
        assert!(macrozone.hubs.is_empty());
    }

    #[test]
    fn parse_trend_map() {
        let json = r#"{
            "MZ1": {
                "temperature": {
                    "macrozone": "MZ1",
                    "region": "Lazio",
                    "type": "temperature",
                    "correlation": 0.91,
                    "slope_macro": 2e-6,
                    "slope_region": -1e-7,
                    "divergence": 0.35
                }
            }
        }"#;

        let trend: ByMacrozone<TrendEntry> = serde_json::from_str(json).unwrap();
        let entry = &trend["MZ1"]["temperature"];
        assert_eq!(entry.slope_macro, Some(2e-6));
        assert_eq!(entry.divergence, Some(0.35));
    }

    #[test]
    fn analysis_maps_keep_backend_order() {
        let json = r#"{
            "Zeta": {"temperature": {"type": "temperature"}, "humidity": {"type": "humidity"}},
            "Alpha": {"pressure": {"type": "pressure"}}
        }"#;

        let trend: ByMacrozone<TrendEntry> = serde_json::from_str(json).unwrap();
        let macrozones: Vec<&str> = trend.keys().map(String::as_str).collect();
        assert_eq!(macrozones, ["Zeta", "Alpha"]);
        let kinds: Vec<&str> = trend["Zeta"].keys().map(String::as_str).collect();
        assert_eq!(kinds, ["temperature", "humidity"]);
    }

    #[test]
    fn parse_variation_correlation_with_nested_variation() {
        let json = r#"{
            "MZ1": {
                "humidity": {
                    "macrozone": "MZ1",
                    "type": "humidity",
                    "variation": {"macrozone": "MZ1", "type": "humidity", "current": 40.0, "previous": 50.0, "delta_perc": -20.0},
                    "neighbor_mean": -5.5,
                    "neighbor_std_dev": 2.25,
                    "neighbor_variation": [],
                    "abs_error": 14.5,
                    "z_score": -6.44
                }
            }
        }"#;

        let correlation: ByMacrozone<VariationCorrelationEntry> =
            serde_json::from_str(json).unwrap();
        let entry = &correlation["MZ1"]["humidity"];
        let variation = entry.variation.as_ref().unwrap();
        assert_eq!(variation.delta_perc, Some(-20.0));
        assert_eq!(entry.z_score, Some(-6.44));
    }

    #[test]
    fn sensor_serializes_type_field_name() {
        let sensor = Sensor {
            id: "S1".to_string(),
            macrozone_name: String::new(),
            zone_name: "Z1".to_string(),
            kind: "pressure".to_string(),
            reference: "bmp280".to_string(),
            registration_time: None,
            last_seen: None,
        };
        let value = serde_json::to_value(&sensor).unwrap();
        assert_eq!(value["type"], "pressure");
    }
}
