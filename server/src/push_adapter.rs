use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::prelude::*;

pub const NOTIFICATION_TYPE: &str = "partial_notification";
pub const ANDROID_CHANNEL_ID: &str = "default";

// Envelope //
//**********//
/// Fixed-shape payload handed to the messaging provider.
///
/// The companion app expects `notifee` as JSON *text*, not a nested
/// object, so the inner structure is serialized before embedding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
	#[serde(rename = "type")]
	pub typ: Box<str>,
	pub notifee: Box<str>,
}

#[derive(Serialize)]
struct NotifeeContent<'a> {
	body: &'a serde_json::Value,
	android: AndroidOpts,
}

#[derive(Serialize)]
struct AndroidOpts {
	#[serde(rename = "channelId")]
	channel_id: &'static str,
}

impl Envelope {
	/// Builds the `partial_notification` envelope for a payload.
	pub fn partial_notification(payload: &serde_json::Value) -> SrvResult<Self> {
		let notifee = serde_json::to_string(&NotifeeContent {
			body: payload,
			android: AndroidOpts { channel_id: ANDROID_CHANNEL_ID },
		})?;
		Ok(Envelope { typ: NOTIFICATION_TYPE.into(), notifee: notifee.into() })
	}
}

// PushAdapter //
//*************//
#[async_trait]
pub trait PushAdapter: Debug + Send + Sync {
	/// Delivers one notification to one token. Exactly one attempt;
	/// no retry, no delivery-receipt tracking.
	async fn deliver(&self, token: &str, envelope: &Envelope) -> SrvResult<()>;
}


// vim: ts=4
