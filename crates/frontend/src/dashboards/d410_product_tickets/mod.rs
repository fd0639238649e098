pub mod browser;
pub mod chart_options;
pub mod config;
pub mod projection;
pub mod selectors;
pub mod state;
pub mod store;
pub mod ui;
