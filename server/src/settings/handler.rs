//! Settings HTTP handlers

use axum::{
	Json,
	extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

use super::types::{SettingsRecord, UpdateSettingsData};

#[derive(Deserialize)]
pub struct SettingsQuery {
	device_id: Option<String>,
}

/// GET /settings?device_id=... - Fetch settings, or defaults when the
/// device has never stored any
pub async fn get_settings(
	State(app): State<App>,
	Query(query): Query<SettingsQuery>,
) -> SrvResult<Json<SettingsRecord>> {
	let device_id = query.device_id.as_deref().unwrap_or("");
	let record = app.settings.get(device_id).await?;
	Ok(Json(record))
}

#[derive(Deserialize)]
pub struct UpdateSettingsRequest {
	device_id: Option<String>,
	#[serde(flatten)]
	settings: UpdateSettingsData,
}

#[derive(Serialize)]
pub struct UpdateSettingsResponse {
	success: bool,
}

/// POST /settings - Upsert the supplied subset of settings fields
pub async fn post_settings(
	State(app): State<App>,
	Json(req): Json<UpdateSettingsRequest>,
) -> SrvResult<Json<UpdateSettingsResponse>> {
	let device_id = req.device_id.as_deref().unwrap_or("");
	app.settings.upsert(device_id, &req.settings).await?;
	Ok(Json(UpdateSettingsResponse { success: true }))
}

// vim: ts=4
