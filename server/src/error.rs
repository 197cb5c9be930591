use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type SrvResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// A required request parameter was missing or empty
	MissingParam(&'static str),
	/// The token row exists but carries no usable token
	TokenMissing,
	NotFound,
	DbError,
	PushError,
	Config(Box<str>),

	// externals
	Io(std::io::Error),
	Json(serde_json::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self)
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, error) = match self {
			Error::MissingParam(param) => {
				(StatusCode::BAD_REQUEST, format!("missing required parameter: {}", param))
			}
			Error::TokenMissing => {
				(StatusCode::BAD_REQUEST, "push token not found for device".into())
			}
			Error::NotFound => {
				(StatusCode::NOT_FOUND, "device not found or token not available".into())
			}
			// everything else is reported without detail
			_ => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".into()),
		};
		(status, Json(json!({ "error": error }))).into_response()
	}
}

// vim: ts=4
