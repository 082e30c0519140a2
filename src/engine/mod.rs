pub mod engine;
pub mod error;
pub mod extractor;
pub mod llm_client;
pub mod news_client;
pub mod path_generator;
pub mod pipeline;
pub mod prompt_builder;
pub mod protocol;
pub mod ranker;
pub mod scoring;
