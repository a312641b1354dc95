//! Common types for the account directory
//!
//! This library contains the domain model and error types shared between the
//! directory service and the HTTP gateway. It provides a unified approach to
//! error handling and a single definition of the account wire format.

pub mod error;
pub mod model;
pub mod money;

/// Re-export important types
pub use error::{Error, Result};
pub use money::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
