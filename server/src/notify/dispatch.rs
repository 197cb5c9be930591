//! Notification dispatcher: token lookup plus one delivery attempt

use std::sync::Arc;

use crate::prelude::*;
use crate::push_adapter::{Envelope, PushAdapter};
use crate::store_adapter::{StoreAdapter, TokenColumn};

pub struct Dispatcher {
	store: Arc<dyn StoreAdapter>,
	push: Arc<dyn PushAdapter>,
	column: TokenColumn,
}

impl Dispatcher {
	pub fn new(store: Arc<dyn StoreAdapter>, push: Arc<dyn PushAdapter>, column: TokenColumn) -> Self {
		Self { store, push, column }
	}

	/// Resolves `target_id` to a push token and performs exactly one
	/// delivery attempt. The provider is never invoked when the token
	/// is missing, and a delivery failure is never reported as a
	/// missing token.
	pub async fn dispatch(&self, target_id: &str, payload: &serde_json::Value) -> SrvResult<()> {
		// the target comes from builder configuration, not the request
		if target_id.is_empty() {
			return Err(Error::MissingParam("notify_target"));
		}

		let token = self
			.store
			.read_push_token(self.column, target_id)
			.await
			.inspect_err(|err| warn!("Token lookup failed for {}: {}", target_id, err))?;

		let token = match token {
			Some(token) if !token.is_empty() => token,
			_ => {
				warn!("Token row for {} has no usable token", target_id);
				return Err(Error::TokenMissing);
			}
		};

		let envelope = Envelope::partial_notification(payload)?;

		if let Err(err) = self.push.deliver(&token, &envelope).await {
			error!("Push delivery failed for {}: {}", target_id, err);
			return Err(Error::PushError);
		}
		debug!("Notification delivered for {}", target_id);
		Ok(())
	}
}

// vim: ts=4
