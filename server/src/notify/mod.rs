//! Notification relay subsystem
//!
//! Resolves a push token for the configured target and forwards the
//! request payload to the messaging provider in the fixed
//! `partial_notification` envelope shape.

pub mod dispatch;
pub mod handler;

pub use dispatch::Dispatcher;

// vim: ts=4
