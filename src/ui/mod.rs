// BayLog - ui/mod.rs
//
// Presentation layer: egui panels and theme constants.
// Dependencies: app state, core types.

pub mod panels;
pub mod theme;
