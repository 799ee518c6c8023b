//! Page state, kept apart from rendering so the transitions can be tested
//! without a browser.

use {
	common::{AppError, MIN_CHARS, TextStats},
	strum::EnumIs,
};

/// What the page is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIs)]
pub enum PageState {
	Empty,
	Typed,
	Summarized,
	Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
	input: String,
	summary: Option<String>,
	error: Option<AppError>,
	pending: bool,
}

impl Page {
	/// An error outranks a summary, which outranks plain input.
	pub fn state(&self) -> PageState {
		if self.error.is_some() {
			PageState::Error
		} else if self.summary.is_some() {
			PageState::Summarized
		} else if self.input.trim().is_empty() {
			PageState::Empty
		} else {
			PageState::Typed
		}
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn summary(&self) -> Option<&str> {
		self.summary.as_deref()
	}

	pub fn error(&self) -> Option<&AppError> {
		self.error.as_ref()
	}

	pub fn is_pending(&self) -> bool {
		self.pending
	}

	pub fn input_stats(&self) -> TextStats {
		TextStats::of(&self.input)
	}

	pub fn summary_stats(&self) -> Option<TextStats> {
		self.summary.as_deref().map(TextStats::of)
	}

	/// Reset is offered once there is both a summary and some input to clear.
	pub fn can_reset(&self) -> bool {
		!self.pending && self.summary.is_some() && !self.input.trim().is_empty()
	}

	pub fn edit(&mut self, text: impl Into<String>) {
		self.input = text.into();
		self.error = None;
	}

	/// Checks the input and marks a request as in flight. Returns the trimmed
	/// text to send, or `None` when nothing should be sent.
	pub fn begin_submit(&mut self) -> Option<String> {
		if self.pending {
			return None;
		}
		let text = self.input.trim();
		let rejection = if text.is_empty() {
			Some(AppError::EmptyInput)
		} else if text.chars().count() < MIN_CHARS {
			Some(AppError::TooShort)
		} else {
			None
		};
		if let Some(error) = rejection {
			self.error = Some(error);
			return None;
		}
		let text = text.to_owned();
		self.error = None;
		self.pending = true;
		Some(text)
	}

	/// Records the outcome of the request started by [`Page::begin_submit`].
	/// A failure keeps any earlier summary on screen.
	pub fn finish(&mut self, result: Result<String, AppError>) {
		self.pending = false;
		match result.map(|summary| summary.trim().to_owned()) {
			Ok(summary) if summary.is_empty() => self.error = Some(AppError::EmptySummary),
			Ok(summary) => {
				self.summary = Some(summary);
				self.error = None;
			},
			Err(error) => self.error = Some(error),
		}
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}
