//! Strategic element extraction, path generation and ranking, with a console
//! and an egui front end over the same pipeline.

pub mod config;
pub mod engine;
pub mod model;
pub mod ui;
