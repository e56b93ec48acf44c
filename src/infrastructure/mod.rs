//! Infrastructure layer - External concerns and adapters
//!
//! This module contains the session store backends and HTTP handling.

pub mod adapters;
pub mod http;

pub use adapters::{CookieSessionStore, ServerSessionStore};
