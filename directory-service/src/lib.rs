//! Directory service for managing the in-memory account collection

pub mod repository;
pub mod service;

pub use repository::{AccountDirectory, InMemoryAccountDirectory};
pub use service::{AccountPatch, DirectoryService};
