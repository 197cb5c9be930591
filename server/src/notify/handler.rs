//! Notification HTTP handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::prelude::*;

#[derive(Serialize)]
pub struct NotifyResponse {
	status: Box<str>,
}

/// POST /notifications - Forward an arbitrary payload to the
/// configured target device's companion app
pub async fn post_notification(
	State(app): State<App>,
	Json(payload): Json<serde_json::Value>,
) -> SrvResult<Json<NotifyResponse>> {
	debug!("Notification payload: {}", payload);
	app.notify.dispatch(&app.opts.notify_target, &payload).await?;
	Ok(Json(NotifyResponse { status: "OK".into() }))
}

// vim: ts=4
