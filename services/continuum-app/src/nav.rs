//! Drill-down routes
//!
//! Three screens: the region list, one region, one macrozone. Path segments
//! are percent-encoded so names with spaces or slashes survive a round trip.

use std::borrow::Cow;

/// A screen of the drill-down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Regions,
    Region { name: String },
    Macrozone { region: String, macrozone: String },
}

impl Route {
    /// Parse a request path; unknown paths yield `None`
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Regions),
            ["region", name] => Some(Route::Region {
                name: decode(name)?,
            }),
            ["macrozone", region, macrozone] => Some(Route::Macrozone {
                region: decode(region)?,
                macrozone: decode(macrozone)?,
            }),
            _ => None,
        }
    }

    /// Path of this route with encoded segments
    pub fn path(&self) -> String {
        match self {
            Route::Regions => "/".to_string(),
            Route::Region { name } => format!("/region/{}", urlencoding::encode(name)),
            Route::Macrozone { region, macrozone } => format!(
                "/macrozone/{}/{}",
                urlencoding::encode(region),
                urlencoding::encode(macrozone)
            ),
        }
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(Cow::into_owned)
}
