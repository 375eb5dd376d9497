//! Display formatting
//!
//! Pure helpers turning raw backend values into display strings: dates in
//! the configured timezone, fixed and scientific numbers, activity flags and
//! trend indicators. Nothing here panics on malformed input; unparseable
//! values degrade to `-` or `N/A`.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Activity window for hub cards
pub const CARD_ACTIVE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Activity window for the hub and sensor rows of the macrozone dashboard
pub const MACROZONE_ACTIVE_WINDOW: Duration = Duration::from_secs(10 * 60);

/// Slopes within +/- this value are considered flat
pub const SLOPE_THRESHOLD: f64 = 1e-6;

/// Divergence above this value is flagged
pub const DIVERGENCE_THRESHOLD: f64 = 0.2;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DATE: &str = "-";

/// Which date layout a screen element uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `dd/mm/yy, HH:MM`
    Card,
    /// `dd/mm/yyyy, HH:MM`
    Table,
    /// `dd/mm/yyyy, HH:MM:SS`
    Creation,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Card => "%d/%m/%y, %H:%M",
            DateStyle::Table => "%d/%m/%Y, %H:%M",
            DateStyle::Creation => "%d/%m/%Y, %H:%M:%S",
        }
    }
}

/// Parse a backend timestamp string.
///
/// RFC 3339 is the normal case; a timestamp without offset is read as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Format a timestamp string, `-` when absent or unparseable
pub fn format_date(value: Option<&str>, style: DateStyle, tz: Tz) -> String {
    value
        .and_then(parse_timestamp)
        .map(|dt| format_instant(dt, style, tz))
        .unwrap_or_else(|| NO_DATE.to_string())
}

/// Format epoch seconds with the table layout, `-` for absent or zero
pub fn format_epoch(seconds: Option<i64>, tz: Tz) -> String {
    seconds
        .filter(|s| *s != 0)
        .and_then(|s| Utc.timestamp_opt(s, 0).single())
        .map(|dt| format_instant(dt, DateStyle::Table, tz))
        .unwrap_or_else(|| NO_DATE.to_string())
}

fn format_instant(dt: DateTime<Utc>, style: DateStyle, tz: Tz) -> String {
    dt.with_timezone(&tz).format(style.pattern()).to_string()
}

/// True iff `now - last_seen` is strictly below `window`.
///
/// Absent or unparseable `last_seen` is inactive. A `last_seen` in the future
/// counts as active.
pub fn is_active(last_seen: Option<&str>, now: DateTime<Utc>, window: Duration) -> bool {
    let Some(seen) = last_seen.and_then(parse_timestamp) else {
        return false;
    };
    let elapsed_ms = now.signed_duration_since(seen).num_milliseconds();
    i128::from(elapsed_ms) < window.as_millis() as i128
}

/// Fixed-point number, `N/A` when absent or not finite
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.decimals$}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Scientific notation with 3 significant digits, e.g. `2.00e-6`
pub fn format_scientific(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.to_string();
    };
    let rendered = format!("{v:.2e}");
    match rendered.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => rendered,
    }
}

/// Icon name and colour pair for an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub icon: &'static str,
    pub color: &'static str,
}

impl Indicator {
    pub fn class(self) -> String {
        format!("bi {}", self.icon)
    }

    pub fn style(self) -> String {
        format!("color: {};", self.color)
    }
}

/// Direction of a slope or of a percentage change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl Trend {
    /// Classify a regression slope against [`SLOPE_THRESHOLD`]
    pub fn from_slope(slope: Option<f64>) -> Self {
        Self::classify(slope, SLOPE_THRESHOLD)
    }

    /// Classify a percentage change by its sign
    pub fn from_delta(delta: Option<f64>) -> Self {
        Self::classify(delta, 0.0)
    }

    fn classify(value: Option<f64>, threshold: f64) -> Self {
        match value {
            Some(v) if v > threshold => Trend::Rising,
            Some(v) if v < -threshold => Trend::Falling,
            _ => Trend::Flat,
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            Trend::Rising => Indicator {
                icon: "bi-arrow-up",
                color: "#28a745",
            },
            Trend::Falling => Indicator {
                icon: "bi-arrow-down",
                color: "#dc3545",
            },
            Trend::Flat => Indicator {
                icon: "bi-dash",
                color: "#215b93",
            },
        }
    }
}

/// Whether a macrozone trend diverges from its region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divergence {
    Warning,
    Nominal,
}

impl Divergence {
    pub fn classify(divergence: Option<f64>) -> Self {
        match divergence {
            Some(d) if d > DIVERGENCE_THRESHOLD => Divergence::Warning,
            _ => Divergence::Nominal,
        }
    }

    pub fn indicator(self) -> Indicator {
        match self {
            Divergence::Warning => Indicator {
                icon: "bi-exclamation-circle",
                color: "#FFC107",
            },
            Divergence::Nominal => Indicator {
                icon: "bi-dash",
                color: "#28a745",
            },
        }
    }
}
