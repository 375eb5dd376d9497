//! Grouping of a macrozone's flattened hubs and sensors by zone

use crate::api::{Hub, Macrozone, Sensor, Zone};

/// One zone with the hubs and sensors tagged with its name
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGroup {
    pub zone: Zone,
    pub hubs: Vec<Hub>,
    pub sensors: Vec<Sensor>,
}

/// Zones in backend order. Items whose `zone_name` matches no zone are
/// dropped.
pub fn group_by_zone(macrozone: &Macrozone) -> Vec<ZoneGroup> {
    macrozone
        .zones
        .iter()
        .map(|zone| ZoneGroup {
            zone: zone.clone(),
            hubs: macrozone
                .zone_hubs
                .iter()
                .filter(|h| h.zone_name == zone.name)
                .cloned()
                .collect(),
            sensors: macrozone
                .sensors
                .iter()
                .filter(|s| s.zone_name == zone.name)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_zone_name_and_drops_orphans() {
        let macrozone: Macrozone = serde_json::from_value(serde_json::json!({
            "name": "MZ1",
            "zones": [{"name": "Z1"}, {"name": "Z2"}],
            "zone_hubs": [
                {"id": "H1", "zone_name": "Z1"},
                {"id": "H2", "zone_name": "Z2"},
                {"id": "H9", "zone_name": "Z9"}
            ],
            "sensors": [
                {"id": "S1", "zone_name": "Z1", "type": "temperature"},
                {"id": "S2", "zone_name": "Z1", "type": "humidity"},
                {"id": "S9", "zone_name": "", "type": "pressure"}
            ]
        }))
        .unwrap();

        let groups = group_by_zone(&macrozone);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].zone.name, "Z1");
        assert_eq!(groups[0].hubs.len(), 1);
        assert_eq!(groups[0].sensors.len(), 2);
        assert_eq!(groups[1].hubs[0].id, "H2");
        assert!(groups[1].sensors.is_empty());

        let all_hubs: Vec<_> = groups.iter().flat_map(|g| &g.hubs).map(|h| &h.id).collect();
        assert!(!all_hubs.iter().any(|id| id.as_str() == "H9"));
    }

    #[test]
    fn macrozone_without_zones_has_no_groups() {
        let macrozone: Macrozone = serde_json::from_str(r#"{"name": "MZ1"}"#).unwrap();
        assert!(group_by_zone(&macrozone).is_empty());
    }
}
