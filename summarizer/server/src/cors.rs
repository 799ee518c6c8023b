use {
	crate::AppState,
	axum::{
		extract::{Request, State},
		http::{
			HeaderMap, HeaderValue, Method, StatusCode,
			header::{
				ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
				ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
			},
		},
		middleware::Next,
		response::{IntoResponse, Response},
	},
};

const ALLOWED_METHODS: &str = "POST";
const PREFLIGHT_MAX_AGE_SECS: &str = "600";

/// Lets exactly one browser origin call the API, with credentials.
pub async fn cors_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let allowed = request.headers().get(ORIGIN).is_some_and(|origin| *origin == state.allowed_origin);

	if allowed && request.method() == Method::OPTIONS && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD) {
		let requested_headers = request.headers().get(ACCESS_CONTROL_REQUEST_HEADERS).cloned();
		let mut response = StatusCode::NO_CONTENT.into_response();
		let headers = response.headers_mut();
		allow_origin(headers, &state.allowed_origin);
		headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
		headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested_headers.unwrap_or_else(|| HeaderValue::from_static("content-type")));
		headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(PREFLIGHT_MAX_AGE_SECS));
		return response;
	}

	let mut response = next.run(request).await;
	if allowed {
		allow_origin(response.headers_mut(), &state.allowed_origin);
	}
	response
}

fn allow_origin(headers: &mut HeaderMap, origin: &HeaderValue) {
	headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
	headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
	headers.append(VARY, HeaderValue::from_static("origin"));
}
