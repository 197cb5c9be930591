//! Common types used throughout the relay.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// Timestamp //
//***********//
/// Unix timestamp in seconds, serialized as a plain integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_secs() as i64)
}

// vim: ts=4
