pub mod back_button;
pub mod cards;
pub mod loader;
pub mod location_search;
pub mod modals;
pub mod panels;
pub mod status_badge;
pub mod table_controls;
pub mod tables;
pub mod zone_card;
