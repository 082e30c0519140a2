use log::{debug, info};

use crate::engine::error::ExtractionError;
use crate::engine::llm_client::CompletionService;
use crate::engine::prompt_builder::PromptBuilder;
use crate::model::element::StrategicElement;
use crate::model::llm_decode::decode_llm_elements;

/// One completion call per invocation, then a strict decode.
pub fn extract_elements(
    service: &dyn CompletionService,
    text: &str,
) -> Result<Vec<StrategicElement>, ExtractionError> {
    let prompt = PromptBuilder::extraction(text);
    let reply = service.complete(&prompt)?;
    debug!("extract_elements: reply_len={}", reply.len());

    let elements = decode_llm_elements(&reply)?;
    info!("Extracted {} strategic elements", elements.len());
    Ok(elements)
}
