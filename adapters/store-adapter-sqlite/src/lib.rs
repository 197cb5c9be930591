//! SQLite implementation of the Sentra store adapter.
//!
//! Two tables: `user_settings` (one row per device, column defaults
//! mirroring [`SettingsRecord::defaults`]) and `tokens` (push tokens,
//! addressable by either observed key column).

use async_trait::async_trait;
use std::path::Path;
use sqlx::sqlite::{self, SqlitePool, SqliteRow};

use sentra::prelude::*;
use sentra::settings::types::{SettingsRecord, UpdateSettingsData};
use sentra::store_adapter::{StoreAdapter, TokenColumn};

mod schema;
mod settings;
mod token;

// Helper functions
//******************
fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

pub(crate) fn map_opt_res<T, F>(row: Result<Option<SqliteRow>, sqlx::Error>, f: F) -> SrvResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(Some(row)) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Ok(None) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

#[derive(Debug)]
pub struct StoreAdapterSqlite {
	db: SqlitePool,
}

impl StoreAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> SrvResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		schema::init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}

	/// Provisioning helper: token rows are written by the device
	/// registration flow, not by the relay itself.
	pub async fn set_push_token(
		&self,
		column: TokenColumn,
		id: &str,
		fcm_token: Option<&str>,
	) -> SrvResult<()> {
		token::set(&self.db, column, id, fcm_token).await
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterSqlite {
	async fn read_settings(&self, device_id: &str) -> SrvResult<SettingsRecord> {
		settings::read(&self.db, device_id).await
	}

	async fn upsert_settings(&self, device_id: &str, data: &UpdateSettingsData) -> SrvResult<()> {
		settings::upsert(&self.db, device_id, data).await
	}

	async fn read_push_token(&self, column: TokenColumn, id: &str) -> SrvResult<Option<Box<str>>> {
		token::read(&self.db, column, id).await
	}
}

// vim: ts=4
