//! Device settings storage
//!
//! The upsert writes only the supplied columns: unspecified fields
//! keep their stored values on update and take the schema defaults on
//! first insert. `updated_at` is set on every write.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use sentra::prelude::*;
use sentra::settings::types::{SettingsRecord, UpdateSettingsData};

use crate::map_opt_res;

fn decode_err(err: serde_json::Error) -> sqlx::Error {
	sqlx::Error::Decode(err.into())
}

/// Parses an enum column from its wire string
fn parse_wire<T: serde::de::DeserializeOwned>(s: String) -> Result<T, sqlx::Error> {
	serde_json::from_value(serde_json::Value::String(s)).map_err(decode_err)
}

/// Renders an enum field as its wire string
fn wire_str<T: serde::Serialize>(value: &T) -> SrvResult<String> {
	match serde_json::to_value(value)? {
		serde_json::Value::String(s) => Ok(s),
		_ => Err(Error::DbError),
	}
}

fn map_settings(row: SqliteRow) -> Result<SettingsRecord, sqlx::Error> {
	let enabled_alerts: String = row.get("enabled_alerts");
	let emergency_contacts: String = row.get("emergency_contacts");

	Ok(SettingsRecord {
		unique_device_id: row.get::<String, _>("unique_device_id").into(),
		language: row.get::<String, _>("language").into(),
		volume: row.get::<i64, _>("volume") as u8,
		speech_mode: parse_wire(row.get("speech_mode"))?,
		enabled_alerts: serde_json::from_str(&enabled_alerts).map_err(decode_err)?,
		danger_sensitivity: parse_wire(row.get("danger_sensitivity"))?,
		notify_companion: row.get("notify_companion"),
		location_sharing: row.get("location_sharing"),
		auto_distress_timeout: row.get::<i64, _>("auto_distress_timeout") as u32,
		emergency_contacts: serde_json::from_str(&emergency_contacts).map_err(decode_err)?,
		button_press_behavior: parse_wire(row.get("button_press_behavior"))?,
		device_name: row.get::<String, _>("device_name").into(),
		wake_word: row.get::<String, _>("wake_word").into(),
		fetch_interval: row.get::<i64, _>("fetch_interval") as u32,
		vibration: row.get("vibration"),
		haptic_pattern: parse_wire(row.get("haptic_pattern"))?,
		high_contrast: row.get("high_contrast"),
		updated_at: Timestamp(row.get("updated_at")),
	})
}

/// Read the settings row for a device; `Error::NotFound` when absent
pub(crate) async fn read(db: &SqlitePool, device_id: &str) -> SrvResult<SettingsRecord> {
	let row = sqlx::query("SELECT * FROM user_settings WHERE unique_device_id = ?")
		.bind(device_id)
		.fetch_optional(db)
		.await;

	map_opt_res(row, map_settings)
}

enum SqlValue {
	Text(String),
	Int(i64),
}

/// Insert-or-update keyed by `unique_device_id`, writing only the
/// supplied columns
pub(crate) async fn upsert(
	db: &SqlitePool,
	device_id: &str,
	data: &UpdateSettingsData,
) -> SrvResult<()> {
	let mut fields: Vec<(&'static str, SqlValue)> = Vec::new();

	if let Some(v) = &data.language { fields.push(("language", SqlValue::Text(v.to_string()))); }
	if let Some(v) = data.volume { fields.push(("volume", SqlValue::Int(i64::from(v)))); }
	if let Some(v) = data.speech_mode { fields.push(("speech_mode", SqlValue::Text(wire_str(&v)?))); }
	if let Some(v) = &data.enabled_alerts { fields.push(("enabled_alerts", SqlValue::Text(serde_json::to_string(v)?))); }
	if let Some(v) = data.danger_sensitivity { fields.push(("danger_sensitivity", SqlValue::Text(wire_str(&v)?))); }
	if let Some(v) = data.notify_companion { fields.push(("notify_companion", SqlValue::Int(i64::from(v)))); }
	if let Some(v) = data.location_sharing { fields.push(("location_sharing", SqlValue::Int(i64::from(v)))); }
	if let Some(v) = data.auto_distress_timeout { fields.push(("auto_distress_timeout", SqlValue::Int(i64::from(v)))); }
	if let Some(v) = &data.emergency_contacts { fields.push(("emergency_contacts", SqlValue::Text(serde_json::to_string(v)?))); }
	if let Some(v) = data.button_press_behavior { fields.push(("button_press_behavior", SqlValue::Text(wire_str(&v)?))); }
	if let Some(v) = &data.device_name { fields.push(("device_name", SqlValue::Text(v.to_string()))); }
	if let Some(v) = &data.wake_word { fields.push(("wake_word", SqlValue::Text(v.to_string()))); }
	if let Some(v) = data.fetch_interval { fields.push(("fetch_interval", SqlValue::Int(i64::from(v)))); }
	if let Some(v) = data.vibration { fields.push(("vibration", SqlValue::Int(i64::from(v)))); }
	if let Some(v) = data.haptic_pattern { fields.push(("haptic_pattern", SqlValue::Text(wire_str(&v)?))); }
	if let Some(v) = data.high_contrast { fields.push(("high_contrast", SqlValue::Int(i64::from(v)))); }

	let mut columns = String::new();
	let mut placeholders = String::new();
	let mut updates = String::new();
	for (name, _) in &fields {
		columns.push_str(", ");
		columns.push_str(name);
		placeholders.push_str(", ?");
		updates.push_str(", ");
		updates.push_str(name);
		updates.push_str(" = excluded.");
		updates.push_str(name);
	}

	let sql = format!(
		"INSERT INTO user_settings (unique_device_id, updated_at{columns})
		VALUES (?, unixepoch(){placeholders})
		ON CONFLICT(unique_device_id) DO UPDATE SET updated_at = unixepoch(){updates}"
	);

	let mut query = sqlx::query(&sql).bind(device_id);
	for (_, value) in &fields {
		query = match value {
			SqlValue::Text(s) => query.bind(s.as_str()),
			SqlValue::Int(i) => query.bind(*i),
		};
	}

	query
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;
	Ok(())
}

// vim: ts=4
