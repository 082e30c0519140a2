use std::sync::mpsc::{Receiver, Sender};

use log::{debug, error};

use crate::engine::pipeline::Pipeline;
use crate::engine::protocol::{EngineCommand, EngineResponse};

/// Runs analyses for the interactive window, one at a time, off the UI thread.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    pipeline: Pipeline,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        pipeline: Pipeline,
    ) -> Self {
        Self { rx, tx, pipeline }
    }

    /// Returns once the command channel closes or the window goes away.
    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Analyze(text) => {
                    debug!("Engine: analyze {} chars", text.len());
                    if self.tx.send(EngineResponse::Started).is_err() {
                        break;
                    }

                    let result = self.pipeline.analyze(&text);
                    if let Err(e) = &result {
                        error!("Analysis failed: {}", e);
                    }

                    if self.tx.send(EngineResponse::Finished(result)).is_err() {
                        break;
                    }
                }
            }
        }
    }
}
