//! BDD step definitions for the display rules feature

use chrono::Utc;
use cucumber::{then, when};

use continuum_app::format::{
    is_active, Divergence, Trend, CARD_ACTIVE_WINDOW, MACROZONE_ACTIVE_WINDOW,
};

use crate::world::ContinuumWorld;

#[derive(Debug, Default)]
pub struct Classification {
    pub trend: Option<Trend>,
    pub divergence: Option<Divergence>,
    pub card_active: Option<bool>,
    pub macrozone_active: Option<bool>,
}

fn parse_number(s: &str) -> f64 {
    s.parse()
        .unwrap_or_else(|_| panic!("Not a number: {}", s))
}

#[when(expr = "a macrozone slope of {string} is classified")]
fn classify_slope(world: &mut ContinuumWorld, slope: String) {
    world.display.trend = Some(Trend::from_slope(Some(parse_number(&slope))));
}

#[when(expr = "a divergence of {string} is classified")]
fn classify_divergence(world: &mut ContinuumWorld, divergence: String) {
    world.display.divergence = Some(Divergence::classify(Some(parse_number(&divergence))));
}

#[when(expr = "an entity was last seen {int} seconds ago")]
fn last_seen_ago(world: &mut ContinuumWorld, seconds: i64) {
    let now = Utc::now();
    let last_seen = (now - chrono::Duration::seconds(seconds)).to_rfc3339();
    world.display.card_active = Some(is_active(Some(&last_seen), now, CARD_ACTIVE_WINDOW));
    world.display.macrozone_active =
        Some(is_active(Some(&last_seen), now, MACROZONE_ACTIVE_WINDOW));
}

#[when(expr = "an entity was last seen at {string}")]
fn last_seen_at(world: &mut ContinuumWorld, last_seen: String) {
    let now = Utc::now();
    world.display.card_active = Some(is_active(Some(&last_seen), now, CARD_ACTIVE_WINDOW));
    world.display.macrozone_active =
        Some(is_active(Some(&last_seen), now, MACROZONE_ACTIVE_WINDOW));
}

#[then(expr = "the trend should be {string}")]
fn trend_is(world: &mut ContinuumWorld, expected: String) {
    let expected = match expected.as_str() {
        "rising" => Trend::Rising,
        "falling" => Trend::Falling,
        "flat" => Trend::Flat,
        other => panic!("Unknown trend: {}", other),
    };
    assert_eq!(world.display.trend, Some(expected));
}

#[then(expr = "the divergence should be {string}")]
fn divergence_is(world: &mut ContinuumWorld, expected: String) {
    let expected = match expected.as_str() {
        "warning" => Divergence::Warning,
        "nominal" => Divergence::Nominal,
        other => panic!("Unknown divergence: {}", other),
    };
    assert_eq!(world.display.divergence, Some(expected));
}

fn parse_activity(s: &str) -> bool {
    match s {
        "active" => true,
        "inactive" => false,
        other => panic!("Unknown activity: {}", other),
    }
}

#[then(expr = "its card should be {string}")]
fn card_activity(world: &mut ContinuumWorld, expected: String) {
    assert_eq!(world.display.card_active, Some(parse_activity(&expected)));
}

#[then(expr = "its macrozone table row should be {string}")]
fn macrozone_activity(world: &mut ContinuumWorld, expected: String) {
    assert_eq!(
        world.display.macrozone_active,
        Some(parse_activity(&expected))
    );
}
