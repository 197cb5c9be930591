//! Sentra relay: per-device settings storage and push notification forwarding.
//!
//! # Features
//!
//!	- Device settings with canonical defaults (`/settings`)
//!		- fetch-or-default reads
//!		- partial upsert writes (merge semantics)
//!	- Push notification relay to the companion app (`/notifications`)
//!		- token lookup keyed by a configurable column
//!		- fixed `partial_notification` envelope shape
//!	- Pluggable storage and messaging through adapter traits

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod notify;
pub mod settings;
pub mod prelude;
pub mod push_adapter;
pub mod store_adapter;
pub mod types;
pub mod routes;

pub use crate::core::app::{App, AppBuilder};

// vim: ts=4
