//! Firebase Cloud Messaging push adapter.
//!
//! Delivers the relay's fixed envelope as an FCM v1 data message over
//! an HTTPS client. Credential acquisition is out of scope: the
//! bearer token is injected configuration, refreshed by whatever
//! deploys the process.

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::{Client, connect::HttpConnector};
use hyper_util::rt::TokioExecutor;

use sentra::prelude::*;
use sentra::push_adapter::{Envelope, PushAdapter};

pub struct FcmPushAdapter {
	client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
	endpoint: Box<str>,
	bearer_token: Box<str>,
}

// the bearer token must not appear in debug output
impl std::fmt::Debug for FcmPushAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FcmPushAdapter").field("endpoint", &self.endpoint).finish_non_exhaustive()
	}
}

impl FcmPushAdapter {
	pub fn new(project_id: &str, bearer_token: impl Into<Box<str>>) -> SrvResult<Self> {
		// plain http stays available for emulator endpoints
		let connector = HttpsConnectorBuilder::new()
			.with_native_roots()?
			.https_or_http()
			.enable_all_versions()
			.build();
		let client = Client::builder(TokioExecutor::new()).build(connector);

		Ok(Self {
			client,
			endpoint: format!(
				"https://fcm.googleapis.com/v1/projects/{}/messages:send",
				project_id
			)
			.into(),
			bearer_token: bearer_token.into(),
		})
	}

	/// Overrides the delivery endpoint (local FCM emulators)
	pub fn with_endpoint(mut self, endpoint: impl Into<Box<str>>) -> Self {
		self.endpoint = endpoint.into();
		self
	}
}

/// FCM v1 message wrapper around the relay envelope
fn build_message(token: &str, envelope: &Envelope) -> serde_json::Value {
	serde_json::json!({
		"message": {
			"token": token,
			"data": envelope,
		}
	})
}

#[async_trait]
impl PushAdapter for FcmPushAdapter {
	async fn deliver(&self, token: &str, envelope: &Envelope) -> SrvResult<()> {
		let body = serde_json::to_vec(&build_message(token, envelope))?;

		let request = hyper::Request::builder()
			.method(hyper::Method::POST)
			.uri(self.endpoint.as_ref())
			.header("Content-Type", "application/json")
			.header("Authorization", format!("Bearer {}", self.bearer_token))
			.body(Full::new(Bytes::from(body)))
			.map_err(|err| {
				error!("FCM request build error: {}", err);
				Error::PushError
			})?;

		let response = self.client.request(request).await.map_err(|err| {
			error!("FCM request failed: {}", err);
			Error::PushError
		})?;

		let status = response.status();
		if status.is_success() {
			debug!("FCM accepted message");
			return Ok(());
		}

		let body_bytes = response.into_body().collect().await.ok().map(|b| b.to_bytes());
		let body_str = body_bytes.as_ref().and_then(|b| std::str::from_utf8(b).ok()).unwrap_or("");
		error!("FCM rejected message: HTTP {}: {}", status, body_str);
		Err(Error::PushError)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_carries_token_and_envelope_data() {
		let envelope =
			Envelope::partial_notification(&serde_json::json!({ "alert": "siren" })).unwrap();
		let message = build_message("fcm-token-1", &envelope);

		assert_eq!(message["message"]["token"], "fcm-token-1");
		assert_eq!(message["message"]["data"]["type"], "partial_notification");
		assert!(message["message"]["data"]["notifee"].is_string());
	}
}

// vim: ts=4
