//! Settings record types and canonical defaults

use serde::{Deserialize, Serialize};

use crate::types::{Timestamp, now};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechMode {
	#[default]
	Normal,
	Slow,
	Verbose,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DangerSensitivity {
	Low,
	#[default]
	Medium,
	High,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonPressBehavior {
	#[default]
	Sos,
	Mute,
	RepeatLast,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
	#[default]
	Standard,
	Long,
	Pulse,
}

/// Alert types enabled for a fresh device
pub const DEFAULT_ALERTS: &[&str] =
	&["siren", "alarm", "smoke_alarm", "doorbell", "baby_cry", "glass_break", "car_horn"];

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_WAKE_WORD: &str = "Hey Sentra";
pub const DEFAULT_VOLUME: u8 = 100;
pub const DEFAULT_AUTO_DISTRESS_TIMEOUT: u32 = 30;
pub const DEFAULT_FETCH_INTERVAL: u32 = 60;

// SettingsRecord //
//****************//
/// One settings row per device. Field names match the backing store
/// columns, which are also the wire names the device firmware expects.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettingsRecord {
	pub unique_device_id: Box<str>,
	pub language: Box<str>,
	pub volume: u8,
	pub speech_mode: SpeechMode,
	pub enabled_alerts: Box<[Box<str>]>,
	pub danger_sensitivity: DangerSensitivity,
	pub notify_companion: bool,
	pub location_sharing: bool,
	pub auto_distress_timeout: u32,
	/// Opaque contact entries, stored and returned as-is
	pub emergency_contacts: Box<[serde_json::Value]>,
	pub button_press_behavior: ButtonPressBehavior,
	pub device_name: Box<str>,
	pub wake_word: Box<str>,
	pub fetch_interval: u32,
	pub vibration: bool,
	pub haptic_pattern: HapticPattern,
	pub high_contrast: bool,
	/// Set by the store on every write
	pub updated_at: Timestamp,
}

impl SettingsRecord {
	/// Canonical settings for a device that has never written any.
	/// Pure and infallible; nothing is persisted.
	pub fn defaults(device_id: &str) -> Self {
		SettingsRecord {
			unique_device_id: device_id.into(),
			language: DEFAULT_LANGUAGE.into(),
			volume: DEFAULT_VOLUME,
			speech_mode: SpeechMode::default(),
			enabled_alerts: DEFAULT_ALERTS.iter().map(|a| Box::from(*a)).collect(),
			danger_sensitivity: DangerSensitivity::default(),
			notify_companion: true,
			location_sharing: false,
			auto_distress_timeout: DEFAULT_AUTO_DISTRESS_TIMEOUT,
			emergency_contacts: Box::new([]),
			button_press_behavior: ButtonPressBehavior::default(),
			device_name: "".into(),
			wake_word: DEFAULT_WAKE_WORD.into(),
			fetch_interval: DEFAULT_FETCH_INTERVAL,
			vibration: true,
			haptic_pattern: HapticPattern::default(),
			high_contrast: false,
			updated_at: now(),
		}
	}
}

// UpdateSettingsData //
//********************//
/// Partial update: only fields present in the request are written.
/// `updated_at` is intentionally absent — it is server-assigned.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateSettingsData {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub language: Option<Box<str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub volume: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub speech_mode: Option<SpeechMode>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enabled_alerts: Option<Box<[Box<str>]>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub danger_sensitivity: Option<DangerSensitivity>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub notify_companion: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location_sharing: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auto_distress_timeout: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub emergency_contacts: Option<Box<[serde_json::Value]>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub button_press_behavior: Option<ButtonPressBehavior>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub device_name: Option<Box<str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub wake_word: Option<Box<str>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fetch_interval: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vibration: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub haptic_pattern: Option<HapticPattern>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub high_contrast: Option<bool>,
}


// vim: ts=4
