pub use crate::core::app::App;
pub use crate::error::{Error, SrvResult};
pub use crate::types::{Timestamp, now};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
