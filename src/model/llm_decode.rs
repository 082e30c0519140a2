use serde::Deserialize;
use serde_json::{Map, Value};

use crate::engine::error::ExtractionError;
use crate::model::element::{ElementCategory, StrategicElement};

/// One item of the model's reply before validation.
#[derive(Deserialize)]
struct RawElement {
    name: String,
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
}

/// Decode the model's reply into typed elements.
///
/// The reply must be a single JSON array of objects, optionally inside one
/// Markdown code fence. Any bad item rejects the whole batch.
pub fn decode_llm_elements(reply: &str) -> Result<Vec<StrategicElement>, ExtractionError> {
    let body = strip_code_fence(reply.trim());

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ExtractionError::MalformedResponse(format!("not valid JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(ExtractionError::MalformedResponse(
            "expected a JSON array of elements".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_item(index, item))
        .collect()
}

fn decode_item(index: usize, item: Value) -> Result<StrategicElement, ExtractionError> {
    let raw: RawElement = serde_json::from_value(item)
        .map_err(|e| ExtractionError::MalformedResponse(format!("element {index}: {e}")))?;

    let name = raw.name.trim();
    if name.is_empty() {
        return Err(ExtractionError::EmptyName(index));
    }

    let category = raw
        .category
        .parse::<ElementCategory>()
        .map_err(ExtractionError::UnknownCategory)?;

    Ok(StrategicElement::new(
        name,
        category,
        raw.metadata.unwrap_or_default(),
    ))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    match inner.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => inner.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_well_formed_array() {
        let reply = r#"[
            {"name": "Carbon Neutrality", "type": "End", "metadata": {"year": 2040}},
            {"name": "Solar Subsidies", "type": "Means"}
        ]"#;

        let elements = decode_llm_elements(reply).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name(), "Carbon Neutrality");
        assert_eq!(elements[0].category(), ElementCategory::End);
        assert_eq!(elements[0].metadata()["year"], 2040);
        assert_eq!(elements[1].category(), ElementCategory::Means);
        assert!(elements[1].metadata().is_empty());
        assert_ne!(elements[0].id(), elements[1].id());
    }

    #[test]
    fn test_decodes_fenced_reply() {
        let reply = "```json\n[{\"name\": \"Grid upgrades\", \"type\": \"Way\"}]\n```";
        let elements = decode_llm_elements(reply).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].category(), ElementCategory::Way);
    }

    #[test]
    fn test_empty_array_is_not_an_error() {
        assert!(decode_llm_elements("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_prose() {
        let err = decode_llm_elements("Here are the elements you asked for.").unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedResponse(_)));
    }

    #[test]
    fn test_rejects_python_literal_syntax() {
        let reply = "[{'name': 'Carbon Neutrality', 'type': 'End', 'metadata': {}}]";
        assert!(decode_llm_elements(reply).unwrap_err().is_malformed());
    }

    #[test]
    fn test_rejects_expression_payload() {
        let reply = "__import__('os').system('echo pwned')";
        assert!(decode_llm_elements(reply).unwrap_err().is_malformed());
    }

    #[test]
    fn test_rejects_top_level_object() {
        let reply = r#"{"name": "Carbon Neutrality", "type": "End"}"#;
        assert!(matches!(
            decode_llm_elements(reply).unwrap_err(),
            ExtractionError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_unknown_category_rejects_whole_batch() {
        let reply = r#"[
            {"name": "Carbon Neutrality", "type": "End"},
            {"name": "Net zero", "type": "Goal"}
        ]"#;
        match decode_llm_elements(reply) {
            Err(ExtractionError::UnknownCategory(c)) => assert_eq!(c, "Goal"),
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_missing_fields_and_bad_metadata() {
        assert!(decode_llm_elements(r#"[{"type": "End"}]"#).is_err());
        assert!(decode_llm_elements(r#"[{"name": "X"}]"#).is_err());
        let bad_metadata = r#"[{"name": "X", "type": "End", "metadata": [1]}]"#;
        assert!(decode_llm_elements(bad_metadata).is_err());
        assert!(decode_llm_elements(r#"["End"]"#).is_err());
    }

    #[test]
    fn test_rejects_blank_name() {
        let reply = r#"[{"name": "   ", "type": "Means"}]"#;
        assert!(matches!(
            decode_llm_elements(reply).unwrap_err(),
            ExtractionError::EmptyName(0)
        ));
    }

    #[test]
    fn test_null_metadata_defaults_to_empty() {
        let reply = r#"[{"name": " Solar Subsidies ", "type": "Means", "metadata": null}]"#;
        let elements = decode_llm_elements(reply).unwrap();
        assert_eq!(elements[0].name(), "Solar Subsidies");
        assert!(elements[0].metadata().is_empty());
    }
}
