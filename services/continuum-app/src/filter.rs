//! Free-text table filtering
//!
//! A row matches when the lowercased query is a substring of all its field
//! values joined with spaces. Absent values contribute an empty string.

use serde::Serialize;
use serde_json::Value;

/// All field values of `row` joined with spaces, lowercased
pub fn search_text<T: Serialize>(row: &T) -> String {
    match serde_json::to_value(row) {
        Ok(value) => {
            let mut parts = Vec::new();
            collect_values(&value, &mut parts);
            parts.join(" ").to_lowercase()
        }
        Err(e) => {
            tracing::debug!("row not searchable: {}", e);
            String::new()
        }
    }
}

fn collect_values(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Null => parts.push(String::new()),
        Value::Bool(b) => parts.push(b.to_string()),
        Value::Number(n) => parts.push(n.to_string()),
        Value::String(s) => parts.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| collect_values(v, parts)),
        Value::Object(map) => map.values().for_each(|v| collect_values(v, parts)),
    }
}

/// Whether `row` matches `query`; an empty query matches everything
pub fn matches<T: Serialize>(row: &T, query: &str) -> bool {
    query.is_empty() || search_text(row).contains(&query.to_lowercase())
}

/// Rows matching `query`, in their original order
pub fn filter_rows<T: Serialize + Clone>(rows: &[T], query: &str) -> Vec<T> {
    rows.iter().filter(|row| matches(*row, query)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Hub;
    use proptest::prelude::*;

    fn hub(id: &str, service: &str, zone: &str) -> Hub {
        Hub {
            id: id.to_string(),
            macrozone_name: "MZ1".to_string(),
            zone_name: zone.to_string(),
            service: service.to_string(),
            registration_time: Some("2025-01-10T08:00:00Z".to_string()),
            last_seen: None,
        }
    }

    fn hubs() -> Vec<Hub> {
        vec![
            hub("hub-alpha", "edge-hub", "Z1"),
            hub("hub-beta", "proximity-fog-hub", "Z2"),
            hub("HUB-GAMMA", "edge-hub", "Z2"),
        ]
    }

    #[test]
    fn search_text_joins_all_values() {
        let text = search_text(&hub("H1", "Edge-Hub", "Z1"));
        assert!(text.contains("h1"));
        assert!(text.contains("edge-hub"));
        assert!(text.contains("2025-01-10t08:00:00z"));
    }

    #[test]
    fn empty_query_returns_input() {
        assert_eq!(filter_rows(&hubs(), ""), hubs());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let found = filter_rows(&hubs(), "Gamma");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "HUB-GAMMA");
    }

    #[test]
    fn matches_any_field() {
        let found = filter_rows(&hubs(), "fog");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "hub-beta");

        assert_eq!(filter_rows(&hubs(), "z2").len(), 2);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_rows(&hubs(), "zzz").is_empty());
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(query in "[a-zA-Z0-9 -]{0,8}") {
            let once = filter_rows(&hubs(), &query);
            let twice = filter_rows(&once, &query);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filtering_ignores_query_case(query in "[a-zA-Z-]{0,6}") {
            prop_assert_eq!(
                filter_rows(&hubs(), &query.to_uppercase()),
                filter_rows(&hubs(), &query.to_lowercase())
            );
        }
    }
}
