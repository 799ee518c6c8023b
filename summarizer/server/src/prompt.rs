/// Wraps already-trimmed user text in the fixed summarization instructions.
///
/// The text is embedded verbatim between triple quotes so the model treats it
/// as material to compress rather than as instructions.
pub fn build_prompt(text: &str) -> String {
	format!(
		r#"You are a concise summarization engine. Your task is to shorten the following text into a brief,
factual summary while preserving key information, names, and intent.

Do NOT explain, expand, or invent details. Only compress the input.

Input text:
"""
{text}
"""

Summary (be clear, short, and objective):"#
	)
}
