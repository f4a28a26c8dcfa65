// BayLog - ui/panels/mod.rs

pub mod bay_view;
pub mod defaults;
pub mod edit;
pub mod intake;
pub mod notice;
pub mod toolbar;
