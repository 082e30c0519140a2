pub mod element;
pub mod headline;
pub mod llm_decode;
pub mod report;
pub mod strategy_path;
