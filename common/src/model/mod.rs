//! Domain models for the account directory

pub mod account;
