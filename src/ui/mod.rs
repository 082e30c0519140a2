pub mod app;
pub mod center_panel;
pub mod console;
pub mod left_panel;
pub mod right_panel;
pub mod settings;

use std::io;

use crate::engine::pipeline::RunResult;

/// Something that can show the outcome of one analysis run.
pub trait Presenter {
    fn present(&mut self, run: &RunResult) -> io::Result<()>;
}

pub const INSUFFICIENT_MESSAGE: &str = "Insufficient elements extracted. Please refine input.";
