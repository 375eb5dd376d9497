//! BDD step definitions for the continuum server

pub mod config_steps;
pub mod dashboard_steps;
pub mod display_steps;
pub mod modal_steps;
