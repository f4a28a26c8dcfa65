// BayLog - platform/mod.rs
//
// Platform abstraction layer: config directories and config.toml.
// Dependencies: standard library, directories crate, core model types.
// Must NOT depend on: app, ui.

pub mod config;
