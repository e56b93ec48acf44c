//! Application layer - Use cases and application services
//!
//! This module wires the session store and token policy together and exposes
//! the token lookup to the HTTP layer.

pub mod settings;
pub mod token_validator;
pub mod use_cases;

pub use settings::{build_policy, Settings};
pub use token_validator::get_valid_token;
pub use use_cases::{AuthStatus, AuthStatusOutcome, AuthStatusUseCase};
