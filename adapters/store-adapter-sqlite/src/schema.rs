//! Database schema initialization
//!
//! Column defaults on `user_settings` mirror the canonical defaults,
//! so a partial first insert materializes a complete record.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS user_settings (
		unique_device_id text NOT NULL,
		language text DEFAULT 'en-US',
		volume integer DEFAULT 100,
		speech_mode text DEFAULT 'normal',
		enabled_alerts json DEFAULT '[\"siren\",\"alarm\",\"smoke_alarm\",\"doorbell\",\"baby_cry\",\"glass_break\",\"car_horn\"]',
		danger_sensitivity text DEFAULT 'medium',
		notify_companion boolean DEFAULT 1,
		location_sharing boolean DEFAULT 0,
		auto_distress_timeout integer DEFAULT 30,
		emergency_contacts json DEFAULT '[]',
		button_press_behavior text DEFAULT 'sos',
		device_name text DEFAULT '',
		wake_word text DEFAULT 'Hey Sentra',
		fetch_interval integer DEFAULT 60,
		vibration boolean DEFAULT 1,
		haptic_pattern text DEFAULT 'standard',
		high_contrast boolean DEFAULT 0,
		updated_at integer DEFAULT (unixepoch()),
		PRIMARY KEY(unique_device_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Tokens
	//********
	// Both key columns exist because deployed installations disagree
	// on which one their registration flow writes.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS tokens (
		device_unique_id text,
		unique_device_id text,
		fcm_token text
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Unique per key column so provisioning upserts instead of piling
	// up rows; NULLs are distinct, so rows keyed by the other column
	// don't collide.
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_tokens_device_unique_id ON tokens (device_unique_id)")
		.execute(&mut *tx)
		.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_tokens_unique_device_id ON tokens (unique_device_id)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
