use crate::model::element::ElementCategory;

/// Builds the extraction prompt sent to the completion service.
/// Formatting only: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn extraction(text: &str) -> String {
        let categories = ElementCategory::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut prompt = String::new();

        prompt.push_str("Extract strategic elements from the following text.\n");
        prompt.push_str(&format!(
            "Classify each as exactly one of the following: {categories}.\n"
        ));
        prompt.push_str(
            "Return only a JSON array, with no commentary, in this shape:\n\
             [{\"name\": \"...\", \"type\": \"...\", \"metadata\": {}}]\n\
             Use double-quoted keys and strings. Use the type names exactly as written above.\n\n",
        );

        prompt.push_str("Text:\n");
        prompt.push_str(text);
        prompt.push('\n');

        prompt
    }
}
