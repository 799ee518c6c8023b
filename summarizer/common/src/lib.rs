pub mod client;
pub mod validate;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

pub use client::SummarizerClient;
pub use validate::{MAX_CHARS, MIN_CHARS, MIN_WORDS, TextStats, TooFewWords};

// validator compares lengths as u64
const SCHEMA_MIN_CHARS: u64 = MIN_CHARS as u64;
const SCHEMA_MAX_CHARS: u64 = MAX_CHARS as u64;

/// Where `dx serve` hosts the page by default.
pub const DEFAULT_PAGE_ORIGIN: &str = "http://127.0.0.1:8080";

/// Errors surfaced to a person using the summarizer page.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Please enter some text to summarize.")]
	EmptyInput,
	#[error("Text must be at least {} characters long.", MIN_CHARS)]
	TooShort,
	#[error("Cannot connect to the summarizer API. Is it running at {0}?")]
	Network(String),
	#[error("Request timed out. Try a shorter text.")]
	Timeout,
	#[error("Failed to generate summary: {0}")]
	Server(String),
	#[error("The AI returned an empty summary. Please try again.")]
	EmptySummary,
	#[error("An unexpected error occurred: {0}")]
	Unexpected(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate)]
pub struct SummarizeRequest {
	#[validate(length(min = SCHEMA_MIN_CHARS, max = SCHEMA_MAX_CHARS))]
	pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummarizeResponse {
	pub summary: String,
}

/// Body of every non-2xx reply from the API service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
	pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
	pub status: String,
	pub message: String,
}

impl HealthResponse {
	pub fn live() -> Self {
		Self { status: "ok".to_owned(), message: "Summarizer API is live".to_owned() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schema_counts_characters_not_bytes() {
		// ten two-byte characters
		let req = SummarizeRequest { text: "é".repeat(MIN_CHARS) };
		assert!(req.validate().is_ok());

		let req = SummarizeRequest { text: "é".repeat(MIN_CHARS - 1) };
		assert!(req.validate().is_err());
	}

	#[test]
	fn schema_rejects_oversized_text() {
		assert!(SummarizeRequest { text: "a".repeat(MAX_CHARS) }.validate().is_ok());
		assert!(SummarizeRequest { text: "a".repeat(MAX_CHARS + 1) }.validate().is_err());
	}

	#[test]
	fn error_response_uses_detail_field() {
		let body = serde_json::to_value(ErrorResponse { detail: "nope".to_owned() }).unwrap();
		assert_eq!(body, serde_json::json!({ "detail": "nope" }));
	}

	#[test]
	fn too_short_message_names_the_minimum() {
		assert_eq!(AppError::TooShort.to_string(), format!("Text must be at least {MIN_CHARS} characters long."));
	}

	#[test]
	fn server_error_message_carries_detail() {
		let err = AppError::Server("Cannot reach Ollama. Please start Ollama server.".to_owned());
		assert_eq!(err.to_string(), "Failed to generate summary: Cannot reach Ollama. Please start Ollama server.");
	}
}
