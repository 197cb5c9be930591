//! Device settings subsystem
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): the settings record, partial-update data
//!   and the canonical defaults
//! - **Service** (`service.rs`): fetch-or-default and upsert
//!   orchestration over the store adapter
//! - **Handler** (`handler.rs`): HTTP API endpoints

pub mod handler;
pub mod service;
pub mod types;

pub use service::SettingsService;
pub use types::{SettingsRecord, UpdateSettingsData};

// vim: ts=4
