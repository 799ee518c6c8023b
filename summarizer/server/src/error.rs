use {
	crate::backend::BackendError,
	axum::{
		Json,
		extract::rejection::JsonRejection,
		http::StatusCode,
		response::{IntoResponse, Response},
	},
	common::{ErrorResponse, MAX_CHARS, MIN_CHARS, TooFewWords},
	thiserror::Error,
	validator::ValidationErrors,
};

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("Invalid request: {0}")]
	InvalidRequest(String),
	#[error("Not Found")]
	NotFound,
	#[error("Method Not Allowed")]
	MethodNotAllowed,
	#[error(transparent)]
	TooFewWords(#[from] TooFewWords),
	#[error(transparent)]
	Backend(#[from] BackendError),
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self::InvalidRequest(rejection.body_text())
	}
}

impl From<ValidationErrors> for ApiError {
	fn from(errors: ValidationErrors) -> Self {
		if errors.field_errors().contains_key("text") {
			return Self::InvalidRequest(format!("text must be between {MIN_CHARS} and {MAX_CHARS} characters"));
		}
		Self::InvalidRequest(errors.to_string())
	}
}

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			Self::InvalidRequest(_) | Self::TooFewWords(_) => StatusCode::BAD_REQUEST,
			Self::NotFound => StatusCode::NOT_FOUND,
			Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			Self::Backend(BackendError::Status { .. }) => StatusCode::BAD_GATEWAY,
			Self::Backend(BackendError::Unreachable(_)) => StatusCode::SERVICE_UNAVAILABLE,
			Self::Backend(BackendError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
			Self::Backend(BackendError::EmptyResponse | BackendError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Message shown to the caller. Backend internals stay in the logs.
	pub fn detail(&self) -> String {
		match self {
			Self::InvalidRequest(_) | Self::TooFewWords(_) | Self::NotFound | Self::MethodNotAllowed => self.to_string(),
			Self::Backend(BackendError::Status { .. }) => "Failed to communicate with Ollama. Check if it's running.".to_owned(),
			Self::Backend(BackendError::Unreachable(_)) => "Cannot reach Ollama. Please start Ollama server.".to_owned(),
			Self::Backend(BackendError::Timeout(_)) => "Summarization took too long. Try a shorter text.".to_owned(),
			Self::Backend(BackendError::EmptyResponse) => "Model generated empty summary. Try again.".to_owned(),
			Self::Backend(BackendError::Unexpected(_)) => "An internal error occurred. Please try again.".to_owned(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status(), Json(ErrorResponse { detail: self.detail() })).into_response()
	}
}
