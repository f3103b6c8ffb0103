//! The PromptBuilder — ordered, best-effort text assembly.
//!
//! Section order is fixed: role instructions, JSON-only directive, context
//! fields, task description, then the literal example shape. Assembly is
//! deterministic: identical inputs always produce identical prompts.

use compass_core::ConversationContext;
use serde::Serialize;

/// Directive placed directly after the role instructions for every
/// structured call site.
const JSON_ONLY_DIRECTIVE: &str =
    "IMPORTANT: Respond ONLY with valid JSON. No additional text or explanations.";

/// Builds a single prompt string from ordered sections.
///
/// No validation is performed: structured context values are serialized
/// with `serde_json` and slices are joined with commas, whatever their
/// content.
pub struct PromptBuilder {
    sections: Vec<String>,
}

impl PromptBuilder {
    /// Start a prompt with the given role instructions.
    pub fn new(role_instructions: &str) -> Self {
        Self {
            sections: vec![role_instructions.to_string()],
        }
    }

    /// Start a structured-output prompt: role instructions followed by the
    /// JSON-only directive.
    pub fn structured(role_instructions: &str) -> Self {
        let mut builder = Self::new(role_instructions);
        builder.sections.push(JSON_ONLY_DIRECTIVE.to_string());
        builder
    }

    /// Add a labeled scalar context field.
    pub fn context_line(mut self, label: &str, value: &str) -> Self {
        self.sections.push(format!("{label}: {value}"));
        self
    }

    /// Add a labeled list field, joined with commas.
    pub fn context_list(mut self, label: &str, values: &[String]) -> Self {
        self.sections.push(format!("{label}: {}", values.join(", ")));
        self
    }

    /// Add a labeled structured field, JSON-stringified best-effort.
    /// Unserializable values degrade to an empty object rather than
    /// failing the build.
    pub fn context_json<T: Serialize>(mut self, label: &str, value: &T) -> Self {
        let rendered = serde_json::to_string(value).unwrap_or_else(|_| "{}".into());
        self.sections.push(format!("{label}: {rendered}"));
        self
    }

    /// Add rendered conversation history, if any exists.
    pub fn conversation(mut self, context: &ConversationContext) -> Self {
        if !context.is_empty() {
            self.sections
                .push(format!("Conversation Context:\n{}", context.render()));
        }
        self
    }

    /// Add free-form task text.
    pub fn task(mut self, text: &str) -> Self {
        self.sections.push(text.to_string());
        self
    }

    /// Add the literal example of the expected reply shape.
    pub fn example_shape(mut self, example: &str) -> Self {
        self.sections.push(format!(
            "Return ONLY this JSON structure (no markdown, no extra text):\n{example}"
        ));
        self
    }

    /// Assemble the final prompt.
    pub fn build(self) -> String {
        self.sections.join("\n\n")
    }
}
