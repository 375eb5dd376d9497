//! BDD step definitions for the dashboard pages feature

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{gherkin::Step, given, then, when};
use tower::ServiceExt;

use continuum::dashboard::{build_router, AppState};
use continuum::io::HttpClient;
use continuum_app::ClientConfig;

use crate::world::ContinuumWorld;

#[given(expr = "the backend answers {string} with status {int}")]
async fn backend_answers_status(world: &mut ContinuumWorld, path: String, status: u16) {
    world.backend.respond(&path, status, "").await;
}

#[given(expr = "the backend answers {string} with:")]
async fn backend_answers_body(world: &mut ContinuumWorld, path: String, step: &Step) {
    let body = step.docstring.clone().expect("step needs a docstring");
    world.backend.respond(&path, 200, body).await;
}

#[given(
    expr = "the backend answers {string} with macrozone {string} whose zone {string} has hub {string} last seen {int} seconds ago"
)]
async fn backend_answers_macrozone(
    world: &mut ContinuumWorld,
    path: String,
    macrozone: String,
    zone: String,
    hub: String,
    seconds: i64,
) {
    let last_seen = (chrono::Utc::now() - chrono::Duration::seconds(seconds)).to_rfc3339();
    let body = serde_json::json!({
        "name": macrozone,
        "zones": [{"name": zone}],
        "zone_hubs": [{"id": hub, "zone_name": zone, "last_seen": last_seen}],
        "sensors": []
    });
    world.backend.respond(&path, 200, body.to_string()).await;
}

#[when(expr = "the page {string} is requested")]
async fn request_page(world: &mut ContinuumWorld, uri: String) {
    let http: Arc<dyn HttpClient> = world.backend.clone();
    let state = AppState::new(http, ClientConfig::default());
    let app = build_router(state, Path::new("target/site"));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

fn body(world: &ContinuumWorld) -> &str {
    world.response_body.as_deref().expect("no response body")
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut ContinuumWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut ContinuumWorld, expected: String) {
    let body = body(world);
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut ContinuumWorld, unexpected: String) {
    let body = body(world);
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}

#[then(expr = "the response should contain {int} zone card(s)")]
fn zone_card_count(world: &mut ContinuumWorld, expected: usize) {
    let count = body(world).matches(r#"class="zone-card""#).count();
    assert_eq!(count, expected);
}

#[then(expr = "the zone card {string} should list hub {string} as {string}")]
fn zone_card_hub(world: &mut ContinuumWorld, zone: String, hub: String, status: String) {
    let body = body(world);
    let start = body
        .find(r#"class="zone-card""#)
        .expect("no zone card rendered");
    let card = &body[start..];
    assert!(card.contains(&zone), "zone {zone} missing from card");

    let row_start = card
        .find(&format!(">{hub}<"))
        .unwrap_or_else(|| panic!("hub {hub} missing from zone card"));
    let row_end = card[row_start..]
        .find("</tr>")
        .map(|i| row_start + i)
        .unwrap_or(card.len());
    let row = &card[row_start..row_end];
    assert!(
        row.contains(&format!(">{status}<")),
        "expected hub {hub} to be {status}, row was: {row}"
    );
}

#[then(expr = "the backend should have been asked for {string}")]
async fn backend_asked(world: &mut ContinuumWorld, path: String) {
    let requests = world.backend.requests.read().await;
    assert!(
        requests.iter().any(|url| url.ends_with(&path)),
        "no request ended with {path}: {requests:?}"
    );
}

#[then(expr = "the response should link to {string}")]
fn response_links(world: &mut ContinuumWorld, path: String) {
    let expected = format!(r#"href="{}""#, path);
    assert!(
        body(world).contains(&expected),
        "Expected a link to '{}'",
        path
    );
}
