//! Settings service and dispatcher behavior against in-memory adapters

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use sentra::notify::Dispatcher;
use sentra::prelude::*;
use sentra::settings::types::UpdateSettingsData;
use sentra::settings::SettingsService;
use sentra::store_adapter::TokenColumn;

use common::adapters::{MemoryStoreAdapter, RecordingPushAdapter};

#[tokio::test]
async fn get_returns_defaults_when_no_row_exists() {
	let store = Arc::new(MemoryStoreAdapter::new());
	let service = SettingsService::new(store.clone());

	let before = now();
	let record = service.get("abc").await.expect("Should serve defaults");
	let after = now();

	assert_eq!(&*record.unique_device_id, "abc");
	assert_eq!(record.volume, 100);
	assert_eq!(&*record.wake_word, "Hey Sentra");
	assert!(record.updated_at >= before && record.updated_at <= after);
	// Defaults are not persisted
	assert!(store.settings.lock().is_empty());
}

#[tokio::test]
async fn upsert_then_get_round_trips() {
	let store = Arc::new(MemoryStoreAdapter::new());
	let service = SettingsService::new(store);

	let t0 = now();
	let data = UpdateSettingsData { volume: Some(42), ..Default::default() };
	service.upsert("abc", &data).await.expect("Should upsert");

	let record = service.get("abc").await.expect("Should read back");
	assert_eq!(record.volume, 42);
	assert!(record.updated_at >= t0);
}

#[tokio::test]
async fn upsert_merges_with_unspecified_fields() {
	let store = Arc::new(MemoryStoreAdapter::new());
	let service = SettingsService::new(store);

	let first = UpdateSettingsData { wake_word: Some("Hej Sentra".into()), ..Default::default() };
	service.upsert("abc", &first).await.expect("Should upsert");

	let second = UpdateSettingsData { volume: Some(5), ..Default::default() };
	service.upsert("abc", &second).await.expect("Should upsert");

	let record = service.get("abc").await.expect("Should read back");
	assert_eq!(record.volume, 5);
	// Earlier write survives a later partial update
	assert_eq!(&*record.wake_word, "Hej Sentra");
}

#[tokio::test]
async fn empty_device_id_is_rejected_before_the_store() {
	let store = Arc::new(MemoryStoreAdapter::new());
	let service = SettingsService::new(store.clone());

	let get = service.get("").await;
	assert!(matches!(get, Err(Error::MissingParam("device_id"))));

	let data = UpdateSettingsData { volume: Some(1), ..Default::default() };
	let upsert = service.upsert("", &data).await;
	assert!(matches!(upsert, Err(Error::MissingParam("device_id"))));

	assert_eq!(store.read_calls.load(Ordering::SeqCst), 0);
	assert_eq!(store.write_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn store_failure_is_not_treated_as_missing_settings() {
	let store = Arc::new(MemoryStoreAdapter::new());
	store.set_failing();
	let service = SettingsService::new(store);

	let result = service.get("abc").await;
	assert!(matches!(result, Err(Error::DbError)));
}

fn dispatcher_with(store: MemoryStoreAdapter) -> (Dispatcher, Arc<MemoryStoreAdapter>, Arc<RecordingPushAdapter>) {
	let store = Arc::new(store);
	let push = Arc::new(RecordingPushAdapter::new());
	let dispatcher = Dispatcher::new(store.clone(), push.clone(), TokenColumn::DeviceUniqueId);
	(dispatcher, store, push)
}

#[tokio::test]
async fn dispatch_with_empty_target_reports_the_config_option() {
	let (dispatcher, store, push) = dispatcher_with(MemoryStoreAdapter::new());

	let result = dispatcher.dispatch("", &serde_json::json!({ "a": 1 })).await;

	assert!(matches!(result, Err(Error::MissingParam("notify_target"))));
	assert_eq!(store.token_calls.load(Ordering::SeqCst), 0);
	assert_eq!(push.delivery_count(), 0);
}

#[tokio::test]
async fn dispatch_with_lookup_miss_never_invokes_the_provider() {
	let (dispatcher, _store, push) = dispatcher_with(MemoryStoreAdapter::new());

	let result = dispatcher.dispatch("companion_app", &serde_json::json!({ "a": 1 })).await;

	assert!(matches!(result, Err(Error::NotFound)));
	assert_eq!(push.delivery_count(), 0);
}

#[tokio::test]
async fn dispatch_with_null_token_never_invokes_the_provider() {
	let store = MemoryStoreAdapter::new()
		.with_token(TokenColumn::DeviceUniqueId, "companion_app", None);
	let (dispatcher, _store, push) = dispatcher_with(store);

	let result = dispatcher.dispatch("companion_app", &serde_json::json!({ "a": 1 })).await;

	assert!(matches!(result, Err(Error::TokenMissing)));
	assert_eq!(push.delivery_count(), 0);
}

#[tokio::test]
async fn dispatch_with_empty_token_never_invokes_the_provider() {
	let store = MemoryStoreAdapter::new()
		.with_token(TokenColumn::DeviceUniqueId, "companion_app", Some(""));
	let (dispatcher, _store, push) = dispatcher_with(store);

	let result = dispatcher.dispatch("companion_app", &serde_json::json!({ "a": 1 })).await;

	assert!(matches!(result, Err(Error::TokenMissing)));
	assert_eq!(push.delivery_count(), 0);
}

#[tokio::test]
async fn dispatch_delivers_exactly_once_with_the_envelope() {
	let store = MemoryStoreAdapter::new()
		.with_token(TokenColumn::DeviceUniqueId, "companion_app", Some("fcm-token-1"));
	let (dispatcher, _store, push) = dispatcher_with(store);

	let payload = serde_json::json!({ "alert": "siren", "db": 92 });
	dispatcher.dispatch("companion_app", &payload).await.expect("Should deliver");

	let delivered = push.delivered.lock();
	assert_eq!(delivered.len(), 1);

	let (token, envelope) = &delivered[0];
	assert_eq!(&**token, "fcm-token-1");
	assert_eq!(&*envelope.typ, "partial_notification");

	let inner: serde_json::Value = serde_json::from_str(&envelope.notifee).expect("notifee is JSON text");
	assert_eq!(inner["body"], payload);
	assert_eq!(inner["android"]["channelId"], "default");
}

#[tokio::test]
async fn dispatch_provider_failure_is_not_a_missing_token() {
	let store = MemoryStoreAdapter::new()
		.with_token(TokenColumn::DeviceUniqueId, "companion_app", Some("fcm-token-1"));
	let (dispatcher, _store, push) = dispatcher_with(store);
	push.set_failing();

	let result = dispatcher.dispatch("companion_app", &serde_json::json!({ "a": 1 })).await;

	assert!(matches!(result, Err(Error::PushError)));
}

#[tokio::test]
async fn dispatch_respects_the_configured_token_column() {
	let store = Arc::new(
		MemoryStoreAdapter::new()
			.with_token(TokenColumn::UniqueDeviceId, "dev-1", Some("fcm-token-2")),
	);
	let push = Arc::new(RecordingPushAdapter::new());
	let dispatcher = Dispatcher::new(store, push.clone(), TokenColumn::UniqueDeviceId);

	dispatcher.dispatch("dev-1", &serde_json::json!("ping")).await.expect("Should deliver");
	assert_eq!(push.delivery_count(), 1);
}

// vim: ts=4
