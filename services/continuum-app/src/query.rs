//! Query parameters for the analysis and location endpoints
//!
//! Only parameters the operator actually set end up in the query string:
//! empty, zero and non-finite values are omitted.

use chrono::{Days, NaiveDate};
use url::form_urlencoded;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days of history the trend form asks for by default
pub const DEFAULT_TREND_DAYS: u32 = 60;

/// Neighbourhood radius the correlation form starts with
pub const DEFAULT_CORRELATION_RADIUS: f64 = 10_000_000.0;

/// Latest day the analysis forms offer: two days before `today`, the most
/// recent day the backend has complete aggregates for
pub fn latest_analysis_date(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(2)).unwrap_or(today)
}

/// Parameters that can be rendered as a URL query string
pub trait QueryParams {
    /// The `(name, value)` pairs to send, in order
    fn pairs(&self) -> Vec<(&'static str, String)>;

    /// Form-encoded query string without the leading `?`
    fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }
}

/// Trend similarity query: how many days to look back from which day
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendQuery {
    pub days: Option<u32>,
    pub date: Option<NaiveDate>,
}

impl QueryParams for TrendQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(days) = self.days.filter(|d| *d > 0) {
            pairs.push(("days", days.to_string()));
        }
        if let Some(date) = self.date {
            pairs.push(("date", date.format(DATE_FORMAT).to_string()));
        }
        pairs
    }
}

/// Year-over-year variation query for one day
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariationQuery {
    pub date: Option<NaiveDate>,
}

impl QueryParams for VariationQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        self.date
            .map(|date| vec![("date", date.format(DATE_FORMAT).to_string())])
            .unwrap_or_default()
    }
}

/// Neighbourhood radius for the variation correlation query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorrelationQuery {
    pub radius: Option<f64>,
}

impl QueryParams for CorrelationQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        self.radius
            .filter(|r| r.is_finite() && *r != 0.0)
            .map(|r| vec![("radius", r.to_string())])
            .unwrap_or_default()
    }
}

/// Aggregated data around a point
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<f64>,
}

impl QueryParams for LocationQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        [("lat", self.lat), ("lon", self.lon), ("radius", self.radius)]
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .filter(|v| v.is_finite())
                    .map(|v| (name, v.to_string()))
            })
            .collect()
    }
}

/// Parse a `YYYY-MM-DD` form value; empty or malformed input is unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Render a date the way a `type="date"` input expects it
pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a numeric form value; empty or malformed input is unset
pub fn parse_number_input<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}
