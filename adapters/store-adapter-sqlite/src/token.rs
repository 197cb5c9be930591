//! Push token lookup
//!
//! The relay only reads tokens; `set` exists for provisioning and
//! tests. The key column is chosen by configuration since both
//! spellings exist in deployed data.

use sqlx::{Row, SqlitePool};

use sentra::prelude::*;
use sentra::store_adapter::TokenColumn;

/// Resolve a token row. `Error::NotFound` when no row matches;
/// `Ok(None)` when the row exists with a NULL token.
pub(crate) async fn read(
	db: &SqlitePool,
	column: TokenColumn,
	id: &str,
) -> SrvResult<Option<Box<str>>> {
	// column names come from a closed enum, never from input
	let sql = format!("SELECT fcm_token FROM tokens WHERE {} = ?", column.as_sql());
	let row = sqlx::query(&sql)
		.bind(id)
		.fetch_optional(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => {
			let token: Option<String> = row.get("fcm_token");
			Ok(token.map(Into::into))
		}
		None => Err(Error::NotFound),
	}
}

pub(crate) async fn set(
	db: &SqlitePool,
	column: TokenColumn,
	id: &str,
	fcm_token: Option<&str>,
) -> SrvResult<()> {
	// at most one row per id and key column
	let sql = format!(
		"INSERT INTO tokens ({column}, fcm_token) VALUES (?, ?)
		ON CONFLICT({column}) DO UPDATE SET fcm_token = excluded.fcm_token",
		column = column.as_sql()
	);
	sqlx::query(&sql)
		.bind(id)
		.bind(fcm_token)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;
	Ok(())
}

// vim: ts=4
