//! API handlers
//!
//! This module contains all the API endpoint handlers organized by resource.
//! Each handler follows a consistent pattern:
//! - Extract state and parameters using Axum extractors
//! - Call the appropriate service methods
//! - Map the result to a response, with errors becoming plain-text bodies

pub mod account;
pub mod health;
