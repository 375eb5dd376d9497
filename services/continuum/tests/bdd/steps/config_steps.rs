//! BDD step definitions for the configuration feature

use cucumber::{gherkin::Step, given, then, when};

use continuum::load_config;

use crate::world::ContinuumWorld;

const CONFIG_FILE: &str = "config.json";

#[given("a configuration file containing:")]
fn config_file(world: &mut ContinuumWorld, step: &Step) {
    let content = step.docstring.clone().expect("step needs a docstring");
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), content).unwrap();
    world.config_dir = Some(dir);
}

#[given("no configuration file")]
fn no_config_file(world: &mut ContinuumWorld) {
    world.config_dir = Some(tempfile::tempdir().unwrap());
}

#[when("the configuration is loaded")]
fn load(world: &mut ContinuumWorld) {
    let dir = world.config_dir.as_ref().expect("config dir not set");
    world.config_result = Some(load_config(&dir.path().join(CONFIG_FILE)));
}

#[then(expr = "the server port should be {int}")]
fn server_port(world: &mut ContinuumWorld, port: u16) {
    let config = loaded(world);
    assert_eq!(config.server.port, port);
}

#[then(expr = "the timezone should be {string}")]
fn timezone(world: &mut ContinuumWorld, expected: String) {
    assert_eq!(loaded(world).display.timezone, expected);
}

#[then(expr = "the region endpoint should be {string}")]
fn region_endpoint(world: &mut ContinuumWorld, expected: String) {
    assert_eq!(loaded(world).api.region_by_name.as_str(), expected);
}

#[then(expr = "the client configuration should have page size {int}")]
fn client_page_size(world: &mut ContinuumWorld, expected: usize) {
    assert_eq!(loaded(world).client_config().page_size, expected);
}

#[then(expr = "loading should fail with {string}")]
fn load_fails(world: &mut ContinuumWorld, expected: String) {
    match world.config_result.as_ref().expect("config not loaded") {
        Ok(config) => panic!("expected failure, loaded {config:?}"),
        Err(e) => assert!(
            e.to_string().contains(&expected),
            "expected error containing '{expected}', got '{e}'"
        ),
    }
}

fn loaded(world: &ContinuumWorld) -> &continuum::Config {
    match world.config_result.as_ref().expect("config not loaded") {
        Ok(config) => config,
        Err(e) => panic!("config failed to load: {e}"),
    }
}
