//! Text checks shared by the API service and the page.
//!
//! Character limits apply to the raw text as submitted; the word rule applies
//! to the trimmed text, which is also what gets forwarded downstream.

use thiserror::Error;

pub const MIN_CHARS: usize = 10;
pub const MAX_CHARS: usize = 10_000;
pub const MIN_WORDS: usize = 5;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Input is too short to summarize. Please provide at least {} words of content.", MIN_WORDS)]
pub struct TooFewWords {
	pub words: usize,
}

/// Live word and character counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
	pub words: usize,
	pub characters: usize,
}

impl TextStats {
	pub fn of(text: &str) -> Self {
		let trimmed = text.trim();
		Self { words: word_count(trimmed), characters: trimmed.chars().count() }
	}
}

impl std::fmt::Display for TextStats {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Words: {} | Characters: {}", self.words, self.characters)
	}
}

pub fn word_count(text: &str) -> usize {
	text.split_whitespace().count()
}

/// Trims `text` and checks it has enough words to be worth summarizing.
pub fn meaningful_text(text: &str) -> Result<&str, TooFewWords> {
	let trimmed = text.trim();
	let words = word_count(trimmed);
	if words < MIN_WORDS {
		return Err(TooFewWords { words });
	}
	Ok(trimmed)
}
