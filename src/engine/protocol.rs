use crate::engine::pipeline::RunResult;

pub enum EngineCommand {
    Analyze(String),
}

pub enum EngineResponse {
    Started,
    Finished(RunResult),
}
