// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces plain-prose output.
pub const PLAIN_TEXT_SYSTEM: &str = "You are an expert resume writer. \
    Respond with the requested content ONLY. \
    Do NOT include preamble, commentary, or markdown code fences. \
    Do NOT include explanations or apologies.";

/// Fills `{placeholder}` slots in a prompt template.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}
