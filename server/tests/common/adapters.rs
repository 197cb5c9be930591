//! In-memory adapters for exercising the services without a database
//! or a live messaging provider.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use sentra::prelude::*;
use sentra::push_adapter::{Envelope, PushAdapter};
use sentra::settings::types::{SettingsRecord, UpdateSettingsData};
use sentra::store_adapter::{StoreAdapter, TokenColumn};

// MemoryStoreAdapter //
//********************//
#[derive(Debug, Default)]
pub struct MemoryStoreAdapter {
	pub settings: Mutex<HashMap<String, SettingsRecord>>,
	/// Keyed by (column name, id); the value mirrors a nullable column
	pub tokens: Mutex<HashMap<(&'static str, String), Option<Box<str>>>>,
	pub fail: AtomicBool,
	pub read_calls: AtomicUsize,
	pub write_calls: AtomicUsize,
	pub token_calls: AtomicUsize,
}

impl MemoryStoreAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_token(self, column: TokenColumn, id: &str, token: Option<&str>) -> Self {
		self.tokens.lock().insert((column.as_sql(), id.to_string()), token.map(Box::from));
		self
	}

	/// Makes every subsequent call fail with `DbError`
	pub fn set_failing(&self) {
		self.fail.store(true, Ordering::SeqCst);
	}

	fn check_failing(&self) -> SrvResult<()> {
		if self.fail.load(Ordering::SeqCst) { Err(Error::DbError) } else { Ok(()) }
	}
}

fn apply(record: &mut SettingsRecord, data: &UpdateSettingsData) {
	if let Some(v) = &data.language { record.language = v.clone(); }
	if let Some(v) = data.volume { record.volume = v; }
	if let Some(v) = data.speech_mode { record.speech_mode = v; }
	if let Some(v) = &data.enabled_alerts { record.enabled_alerts = v.clone(); }
	if let Some(v) = data.danger_sensitivity { record.danger_sensitivity = v; }
	if let Some(v) = data.notify_companion { record.notify_companion = v; }
	if let Some(v) = data.location_sharing { record.location_sharing = v; }
	if let Some(v) = data.auto_distress_timeout { record.auto_distress_timeout = v; }
	if let Some(v) = &data.emergency_contacts { record.emergency_contacts = v.clone(); }
	if let Some(v) = data.button_press_behavior { record.button_press_behavior = v; }
	if let Some(v) = &data.device_name { record.device_name = v.clone(); }
	if let Some(v) = &data.wake_word { record.wake_word = v.clone(); }
	if let Some(v) = data.fetch_interval { record.fetch_interval = v; }
	if let Some(v) = data.vibration { record.vibration = v; }
	if let Some(v) = data.haptic_pattern { record.haptic_pattern = v; }
	if let Some(v) = data.high_contrast { record.high_contrast = v; }
}

#[async_trait]
impl StoreAdapter for MemoryStoreAdapter {
	async fn read_settings(&self, device_id: &str) -> SrvResult<SettingsRecord> {
		self.read_calls.fetch_add(1, Ordering::SeqCst);
		self.check_failing()?;
		self.settings.lock().get(device_id).cloned().ok_or(Error::NotFound)
	}

	async fn upsert_settings(&self, device_id: &str, data: &UpdateSettingsData) -> SrvResult<()> {
		self.write_calls.fetch_add(1, Ordering::SeqCst);
		self.check_failing()?;

		let mut settings = self.settings.lock();
		let record = settings
			.entry(device_id.to_string())
			.or_insert_with(|| SettingsRecord::defaults(device_id));
		apply(record, data);
		record.updated_at = now();
		Ok(())
	}

	async fn read_push_token(&self, column: TokenColumn, id: &str) -> SrvResult<Option<Box<str>>> {
		self.token_calls.fetch_add(1, Ordering::SeqCst);
		self.check_failing()?;
		self.tokens.lock().get(&(column.as_sql(), id.to_string())).cloned().ok_or(Error::NotFound)
	}
}

// RecordingPushAdapter //
//**********************//
#[derive(Debug, Default)]
pub struct RecordingPushAdapter {
	pub delivered: Mutex<Vec<(Box<str>, Envelope)>>,
	pub fail: AtomicBool,
}

impl RecordingPushAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_failing(&self) {
		self.fail.store(true, Ordering::SeqCst);
	}

	pub fn delivery_count(&self) -> usize {
		self.delivered.lock().len()
	}
}

#[async_trait]
impl PushAdapter for RecordingPushAdapter {
	async fn deliver(&self, token: &str, envelope: &Envelope) -> SrvResult<()> {
		if self.fail.load(Ordering::SeqCst) {
			return Err(Error::PushError);
		}
		self.delivered.lock().push((token.into(), envelope.clone()));
		Ok(())
	}
}

// vim: ts=4
