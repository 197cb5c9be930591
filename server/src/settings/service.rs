//! Settings service: fetch-or-default reads and single-write upserts

use std::sync::Arc;

use crate::prelude::*;
use crate::store_adapter::StoreAdapter;

use super::types::{SettingsRecord, UpdateSettingsData};

pub struct SettingsService {
	store: Arc<dyn StoreAdapter>,
}

impl SettingsService {
	pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
		Self { store }
	}

	/// Returns the stored record, or the canonical defaults when the
	/// store reports no row for the device. The defaults are not
	/// persisted. A store failure is never treated as "no settings".
	pub async fn get(&self, device_id: &str) -> SrvResult<SettingsRecord> {
		if device_id.is_empty() {
			return Err(Error::MissingParam("device_id"));
		}

		match self.store.read_settings(device_id).await {
			Ok(record) => Ok(record),
			Err(Error::NotFound) => {
				debug!("No settings for {}, serving defaults", device_id);
				Ok(SettingsRecord::defaults(device_id))
			}
			Err(err) => {
				warn!("Settings lookup failed for {}: {}", device_id, err);
				Err(err)
			}
		}
	}

	/// Performs exactly one conditional write (insert-or-update keyed
	/// by `unique_device_id`); the store fills `updated_at`.
	pub async fn upsert(&self, device_id: &str, data: &UpdateSettingsData) -> SrvResult<()> {
		if device_id.is_empty() {
			return Err(Error::MissingParam("device_id"));
		}

		self.store.upsert_settings(device_id, data).await?;
		info!("Settings updated for {}", device_id);
		Ok(())
	}
}

// vim: ts=4
