use {
	crate::{AppState, ApiError, prompt::build_prompt},
	axum::{
		Json,
		extract::{State, rejection::JsonRejection},
	},
	common::{HealthResponse, SummarizeRequest, SummarizeResponse, validate::meaningful_text},
	tracing::{info, warn},
	validator::Validate,
};

pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse::live())
}

pub async fn not_found() -> ApiError {
	ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
	ApiError::MethodNotAllowed
}

pub async fn summarize(State(state): State<AppState>, payload: Result<Json<SummarizeRequest>, JsonRejection>) -> Result<Json<SummarizeResponse>, ApiError> {
	let Json(request) = payload.inspect_err(|e| warn!("Rejected malformed summarization request: {e}"))?;
	info!("Received new summarization request");

	request.validate().inspect_err(|e| warn!("Rejected summarization request: {e}"))?;
	let text = meaningful_text(&request.text).inspect_err(|e| warn!(words = e.words, "Input too short to summarize"))?;

	// failures are logged where they are classified
	let summary = state.backend.generate(&build_prompt(text)).await?;

	info!(characters = summary.chars().count(), "Summarization completed successfully");
	Ok(Json(SummarizeResponse { summary }))
}
