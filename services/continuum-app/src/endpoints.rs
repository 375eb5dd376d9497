//! Backend endpoint templates
//!
//! Every backend resource is addressed through a configured URL template.
//! Placeholders such as `{region}` are replaced by percent-encoded path
//! segments; optional parameters are appended as a query string.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::query::{CorrelationQuery, LocationQuery, QueryParams, TrendQuery, VariationQuery};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Errors produced while validating or expanding a template
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("endpoint {endpoint}: unknown placeholder {{{placeholder}}}")]
    UnknownPlaceholder {
        endpoint: &'static str,
        placeholder: String,
    },

    #[error("endpoint {endpoint}: missing placeholder {{{placeholder}}}")]
    MissingPlaceholder {
        endpoint: &'static str,
        placeholder: &'static str,
    },

    #[error("unresolved placeholder {{{0}}} in {1}")]
    Unresolved(String, String),
}

/// A URL with `{name}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Placeholder names in order of appearance, duplicates removed
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        PLACEHOLDER
            .captures_iter(&self.0)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Substitute every `{name}` with the percent-encoded value
    pub fn expand(&self, params: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut url = self.0.clone();
        for (name, value) in params {
            url = url.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
        }
        if let Some(left) = PLACEHOLDER.captures(&url).and_then(|c| c.get(1)) {
            return Err(TemplateError::Unresolved(
                left.as_str().to_string(),
                self.0.clone(),
            ));
        }
        Ok(url)
    }

    /// Expand the template and append `query` when it has any parameter
    pub fn expand_with_query(
        &self,
        params: &[(&str, &str)],
        query: &impl QueryParams,
    ) -> Result<String, TemplateError> {
        let url = self.expand(params)?;
        let query = query.to_query_string();
        if query.is_empty() {
            Ok(url)
        } else {
            Ok(format!("{url}?{query}"))
        }
    }
}

/// The backend resources the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    RegionList,
    RegionByName,
    MacrozoneByName,
    SensorRawData,
    ZoneAggregateData,
    MacrozoneAggregateData,
    MacrozoneAggregateByLocation,
    MacrozoneTrend,
    MacrozoneVariation,
    MacrozoneVariationCorrelation,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::RegionList,
        Endpoint::RegionByName,
        Endpoint::MacrozoneByName,
        Endpoint::SensorRawData,
        Endpoint::ZoneAggregateData,
        Endpoint::MacrozoneAggregateData,
        Endpoint::MacrozoneAggregateByLocation,
        Endpoint::MacrozoneTrend,
        Endpoint::MacrozoneVariation,
        Endpoint::MacrozoneVariationCorrelation,
    ];

    /// Configuration key of the endpoint
    pub fn key(self) -> &'static str {
        match self {
            Endpoint::RegionList => "region_list",
            Endpoint::RegionByName => "region_by_name",
            Endpoint::MacrozoneByName => "macrozone_by_name",
            Endpoint::SensorRawData => "sensor_raw_data",
            Endpoint::ZoneAggregateData => "zone_aggregate_data",
            Endpoint::MacrozoneAggregateData => "macrozone_aggregate_data",
            Endpoint::MacrozoneAggregateByLocation => "macrozone_aggregate_by_location",
            Endpoint::MacrozoneTrend => "macrozone_trend",
            Endpoint::MacrozoneVariation => "macrozone_variation",
            Endpoint::MacrozoneVariationCorrelation => "macrozone_variation_correlation",
        }
    }

    /// Placeholders the template must contain, and no others
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            Endpoint::RegionList | Endpoint::MacrozoneAggregateByLocation => &[],
            Endpoint::RegionByName => &["name"],
            Endpoint::MacrozoneByName => &["region", "name"],
            Endpoint::SensorRawData => &["region", "macrozone", "zone", "sensor"],
            Endpoint::ZoneAggregateData => &["region", "macrozone", "zone"],
            Endpoint::MacrozoneAggregateData => &["region", "macrozone"],
            Endpoint::MacrozoneTrend
            | Endpoint::MacrozoneVariation
            | Endpoint::MacrozoneVariationCorrelation => &["region"],
        }
    }
}

/// URL templates for every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_region_list")]
    pub region_list: UrlTemplate,
    #[serde(default = "default_region_by_name")]
    pub region_by_name: UrlTemplate,
    #[serde(default = "default_macrozone_by_name")]
    pub macrozone_by_name: UrlTemplate,
    #[serde(default = "default_sensor_raw_data")]
    pub sensor_raw_data: UrlTemplate,
    #[serde(default = "default_zone_aggregate_data")]
    pub zone_aggregate_data: UrlTemplate,
    #[serde(default = "default_macrozone_aggregate_data")]
    pub macrozone_aggregate_data: UrlTemplate,
    #[serde(default = "default_macrozone_aggregate_by_location")]
    pub macrozone_aggregate_by_location: UrlTemplate,
    #[serde(default = "default_macrozone_trend")]
    pub macrozone_trend: UrlTemplate,
    #[serde(default = "default_macrozone_variation")]
    pub macrozone_variation: UrlTemplate,
    #[serde(default = "default_macrozone_variation_correlation")]
    pub macrozone_variation_correlation: UrlTemplate,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            region_list: default_region_list(),
            region_by_name: default_region_by_name(),
            macrozone_by_name: default_macrozone_by_name(),
            sensor_raw_data: default_sensor_raw_data(),
            zone_aggregate_data: default_zone_aggregate_data(),
            macrozone_aggregate_data: default_macrozone_aggregate_data(),
            macrozone_aggregate_by_location: default_macrozone_aggregate_by_location(),
            macrozone_trend: default_macrozone_trend(),
            macrozone_variation: default_macrozone_variation(),
            macrozone_variation_correlation: default_macrozone_variation_correlation(),
        }
    }
}

impl Endpoints {
    pub fn template(&self, endpoint: Endpoint) -> &UrlTemplate {
        match endpoint {
            Endpoint::RegionList => &self.region_list,
            Endpoint::RegionByName => &self.region_by_name,
            Endpoint::MacrozoneByName => &self.macrozone_by_name,
            Endpoint::SensorRawData => &self.sensor_raw_data,
            Endpoint::ZoneAggregateData => &self.zone_aggregate_data,
            Endpoint::MacrozoneAggregateData => &self.macrozone_aggregate_data,
            Endpoint::MacrozoneAggregateByLocation => &self.macrozone_aggregate_by_location,
            Endpoint::MacrozoneTrend => &self.macrozone_trend,
            Endpoint::MacrozoneVariation => &self.macrozone_variation,
            Endpoint::MacrozoneVariationCorrelation => &self.macrozone_variation_correlation,
        }
    }

    /// Check that every template uses exactly its endpoint's placeholders
    pub fn validate(&self) -> Result<(), TemplateError> {
        for endpoint in Endpoint::ALL {
            let template = self.template(endpoint);
            let found = template.placeholders();
            let expected = endpoint.placeholders();

            if let Some(unknown) = found.iter().find(|p| !expected.contains(p)) {
                return Err(TemplateError::UnknownPlaceholder {
                    endpoint: endpoint.key(),
                    placeholder: unknown.to_string(),
                });
            }
            if let Some(missing) = expected.iter().find(|p| !found.contains(p)) {
                return Err(TemplateError::MissingPlaceholder {
                    endpoint: endpoint.key(),
                    placeholder: missing,
                });
            }
        }
        Ok(())
    }

    pub fn region_list_url(&self) -> Result<String, TemplateError> {
        self.region_list.expand(&[])
    }

    pub fn region_url(&self, name: &str) -> Result<String, TemplateError> {
        self.region_by_name.expand(&[("name", name)])
    }

    pub fn macrozone_url(&self, region: &str, name: &str) -> Result<String, TemplateError> {
        self.macrozone_by_name
            .expand(&[("region", region), ("name", name)])
    }

    pub fn sensor_raw_data_url(
        &self,
        region: &str,
        macrozone: &str,
        zone: &str,
        sensor: &str,
    ) -> Result<String, TemplateError> {
        self.sensor_raw_data.expand(&[
            ("region", region),
            ("macrozone", macrozone),
            ("zone", zone),
            ("sensor", sensor),
        ])
    }

    pub fn zone_aggregate_url(
        &self,
        region: &str,
        macrozone: &str,
        zone: &str,
    ) -> Result<String, TemplateError> {
        self.zone_aggregate_data.expand(&[
            ("region", region),
            ("macrozone", macrozone),
            ("zone", zone),
        ])
    }

    pub fn macrozone_aggregate_url(
        &self,
        region: &str,
        macrozone: &str,
    ) -> Result<String, TemplateError> {
        self.macrozone_aggregate_data
            .expand(&[("region", region), ("macrozone", macrozone)])
    }

    pub fn location_aggregate_url(&self, query: &LocationQuery) -> Result<String, TemplateError> {
        self.macrozone_aggregate_by_location
            .expand_with_query(&[], query)
    }

    pub fn trend_url(&self, region: &str, query: &TrendQuery) -> Result<String, TemplateError> {
        self.macrozone_trend
            .expand_with_query(&[("region", region)], query)
    }

    pub fn variation_url(
        &self,
        region: &str,
        query: &VariationQuery,
    ) -> Result<String, TemplateError> {
        self.macrozone_variation
            .expand_with_query(&[("region", region)], query)
    }

    pub fn correlation_url(
        &self,
        region: &str,
        query: &CorrelationQuery,
    ) -> Result<String, TemplateError> {
        self.macrozone_variation_correlation
            .expand_with_query(&[("region", region)], query)
    }
}

fn api_url(path: &str) -> UrlTemplate {
    UrlTemplate::new(format!("{DEFAULT_API_BASE}{path}"))
}

fn default_region_list() -> UrlTemplate {
    api_url("/region/list")
}

fn default_region_by_name() -> UrlTemplate {
    api_url("/region/search/name/{name}")
}

fn default_macrozone_by_name() -> UrlTemplate {
    api_url("/macrozone/search/name/{region}/{name}")
}

fn default_sensor_raw_data() -> UrlTemplate {
    api_url("/zone/sensor/data/raw/{region}/{macrozone}/{zone}/{sensor}")
}

fn default_zone_aggregate_data() -> UrlTemplate {
    api_url("/zone/data/aggregated/{region}/{macrozone}/{zone}")
}

fn default_macrozone_aggregate_data() -> UrlTemplate {
    api_url("/macrozone/data/aggregated/name/{region}/{macrozone}")
}

fn default_macrozone_aggregate_by_location() -> UrlTemplate {
    api_url("/macrozone/data/aggregated/location")
}

fn default_macrozone_trend() -> UrlTemplate {
    api_url("/macrozone/data/trend/{region}")
}

fn default_macrozone_variation() -> UrlTemplate {
    api_url("/macrozone/data/variation/{region}")
}

fn default_macrozone_variation_correlation() -> UrlTemplate {
    api_url("/macrozone/data/variation/correlation/{region}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_endpoints_are_valid() {
        Endpoints::default().validate().unwrap();
    }

    #[test]
    fn placeholders_are_listed_once_in_order() {
        let template = UrlTemplate::new("http://x/{region}/{name}/{region}");
        assert_eq!(template.placeholders(), vec!["region", "name"]);
    }

    #[test]
    fn expand_percent_encodes_segments() {
        let endpoints = Endpoints::default();
        let url = endpoints.macrozone_url("Valle d'Aosta", "Zona/1").unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/macrozone/search/name/Valle%20d%27Aosta/Zona%2F1"
        );
    }

    #[test]
    fn expand_reports_unresolved_placeholder() {
        let template = UrlTemplate::new("http://x/{region}/{zone}");
        let err = template.expand(&[("region", "Lazio")]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::Unresolved("zone".to_string(), "http://x/{region}/{zone}".to_string())
        );
    }

    #[test]
    fn sensor_raw_data_url_substitutes_all_segments() {
        let endpoints = Endpoints::default();
        let url = endpoints
            .sensor_raw_data_url("Lazio", "Roma", "Z1", "sensor 7")
            .unwrap();
        assert_eq!(
            url,
            "http://localhost:8080/zone/sensor/data/raw/Lazio/Roma/Z1/sensor%207"
        );
    }

    #[test]
    fn trend_url_appends_only_set_parameters() {
        let endpoints = Endpoints::default();
        let query = TrendQuery {
            days: Some(7),
            date: NaiveDate::from_ymd_opt(2025, 9, 22),
        };
        assert_eq!(
            endpoints.trend_url("Lazio", &query).unwrap(),
            "http://localhost:8080/macrozone/data/trend/Lazio?days=7&date=2025-09-22"
        );
        assert_eq!(
            endpoints
                .trend_url("Lazio", &TrendQuery::default())
                .unwrap(),
            "http://localhost:8080/macrozone/data/trend/Lazio"
        );
    }

    #[test]
    fn location_url_has_no_path_placeholders() {
        let endpoints = Endpoints::default();
        let query = LocationQuery {
            lat: Some(41.9),
            lon: Some(12.5),
            radius: Some(5000.0),
        };
        assert_eq!(
            endpoints.location_aggregate_url(&query).unwrap(),
            "http://localhost:8080/macrozone/data/aggregated/location?lat=41.9&lon=12.5&radius=5000"
        );
    }

    #[test]
    fn validate_rejects_unknown_placeholder() {
        let endpoints = Endpoints {
            region_by_name: UrlTemplate::new("http://x/region/{id}"),
            ..Endpoints::default()
        };
        let err = endpoints.validate().unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownPlaceholder {
                endpoint: "region_by_name",
                placeholder: "id".to_string(),
            }
        );
    }

    #[test]
    fn validate_rejects_missing_placeholder() {
        let endpoints = Endpoints {
            zone_aggregate_data: UrlTemplate::new("http://x/zone/{region}/{macrozone}"),
            ..Endpoints::default()
        };
        let err = endpoints.validate().unwrap_err();
        assert!(err.to_string().contains("missing placeholder {zone}"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{"region_list": "https://api.example.org/region/list"}"#;
        let endpoints: Endpoints = serde_json::from_str(json).unwrap();
        assert_eq!(
            endpoints.region_list.as_str(),
            "https://api.example.org/region/list"
        );
        assert_eq!(endpoints.region_by_name, default_region_by_name());
    }
}
