// BayLog - core/mod.rs
//
// Core business logic layer: the bay log store and its derived views.
// Must NOT depend on: ui, platform, app.

pub mod catalog;
pub mod export;
pub mod filter;
pub mod model;
pub mod store;
