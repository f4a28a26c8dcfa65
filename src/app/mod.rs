// BayLog - app/mod.rs
//
// Application layer: state owned by the UI loop, intake and edit forms.
// Dependencies: core layer, platform config.
// Must NOT depend on: ui.

pub mod edit;
pub mod intake;
pub mod state;
