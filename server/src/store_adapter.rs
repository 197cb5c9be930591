use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::settings::types::{SettingsRecord, UpdateSettingsData};

// TokenColumn //
//*************//
/// Which column of the `tokens` table a push-token lookup is keyed by.
///
/// Deployed data contains both spellings; which one an installation
/// uses is configuration, never a hardcoded literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenColumn {
	#[default]
	DeviceUniqueId,
	UniqueDeviceId,
}

impl TokenColumn {
	/// Column name as it appears in the `tokens` table
	pub fn as_sql(self) -> &'static str {
		match self {
			Self::DeviceUniqueId => "device_unique_id",
			Self::UniqueDeviceId => "unique_device_id",
		}
	}
}

impl std::str::FromStr for TokenColumn {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		match s {
			"device_unique_id" => Ok(Self::DeviceUniqueId),
			"unique_device_id" => Ok(Self::UniqueDeviceId),
			other => Err(Error::Config(format!("unknown token column: {}", other).into())),
		}
	}
}

// StoreAdapter //
//**************//
#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	/// # Settings
	/// Reads the settings row for a device.
	/// Returns `Error::NotFound` when no row exists for the id — a
	/// distinguished condition, not a generic store failure.
	async fn read_settings(&self, device_id: &str) -> SrvResult<SettingsRecord>;

	/// Inserts or updates the settings row keyed by `unique_device_id`.
	/// Only fields present in `data` are written; unspecified columns
	/// keep their stored values (or the schema defaults on first
	/// insert). `updated_at` is set by the store on every call.
	async fn upsert_settings(&self, device_id: &str, data: &UpdateSettingsData) -> SrvResult<()>;

	/// # Tokens
	/// Resolves a push token by the configured key column.
	/// Returns `Error::NotFound` when no row matches, and `Ok(None)`
	/// when the row exists but carries no token.
	async fn read_push_token(&self, column: TokenColumn, id: &str) -> SrvResult<Option<Box<str>>>;
}

// vim: ts=4
