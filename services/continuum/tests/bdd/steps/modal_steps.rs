//! BDD step definitions for the detail modal feature

use cucumber::{given, then, when};

use continuum_app::api::TimeSeriesPoint;
use continuum_app::fetch::FetchError;

use crate::world::ContinuumWorld;

fn readings(count: usize) -> Vec<TimeSeriesPoint> {
    (0..count)
        .map(|i| TimeSeriesPoint {
            timestamp: Some(1_700_000_000 + i as i64 * 60),
            kind: "temperature".to_string(),
            data: Some(20.0 + i as f64),
            macrozone: None,
            zone: None,
            sensor_id: None,
        })
        .collect()
}

#[given("a closed sensor modal")]
fn closed_modal(world: &mut ContinuumWorld) {
    world.modal = Default::default();
    world.tickets.clear();
}

#[given(expr = "the user opened the modal for sensor {string}")]
fn opened_modal(world: &mut ContinuumWorld, sensor: String) {
    open_modal(world, sensor);
}

#[when(expr = "the user opens the modal for sensor {string}")]
fn open_modal(world: &mut ContinuumWorld, sensor: String) {
    let ticket = world.modal.open(sensor);
    world.tickets.push(ticket);
}

#[when("the user closes the modal")]
fn close_modal(world: &mut ContinuumWorld) {
    world.modal.close();
}

#[when(expr = "request {int} returns {int} readings")]
fn request_returns(world: &mut ContinuumWorld, request: usize, count: usize) {
    let ticket = world.tickets[request - 1];
    world.modal.resolve(ticket, Ok(readings(count)));
}

#[when(expr = "request {int} fails")]
fn request_fails(world: &mut ContinuumWorld, request: usize) {
    let ticket = world.tickets[request - 1];
    world
        .modal
        .resolve(ticket, Err(FetchError::Network("connection reset".to_string())));
}

#[then("the modal should be visible and loading")]
fn visible_and_loading(world: &mut ContinuumWorld) {
    assert!(world.modal.is_visible());
    assert!(world.modal.is_loading());
}

#[then("the modal should be hidden")]
fn hidden(world: &mut ContinuumWorld) {
    assert!(!world.modal.is_visible());
    assert!(!world.modal.is_loading());
}

#[then(expr = "the modal should show {int} readings for sensor {string}")]
fn shows_readings(world: &mut ContinuumWorld, count: usize, sensor: String) {
    assert!(world.modal.is_visible());
    assert!(!world.modal.is_loading());
    assert_eq!(world.modal.selection(), Some(&sensor));
    assert_eq!(world.modal.data().len(), count);
}

#[then("the modal should hold no selection or data")]
fn no_residue(world: &mut ContinuumWorld) {
    assert_eq!(world.modal.selection(), None);
    assert!(world.modal.data().is_empty());
}
