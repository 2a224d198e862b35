//! Read-only filesystem access for the hook.

pub mod config;
pub mod feature_store;
pub mod paths;
