//! Domain layer - Core business logic and domain models
//!
//! This module contains the session and token models, the session store
//! contract and the token validity rules, independent of any concrete backend.

pub mod policy;
pub mod session;
pub mod store;

pub use policy::{AccessTokenClaims, AllOf, ExpiryPolicy, JwtPolicy, TokenPolicy};
pub use session::{Session, Token, TOKEN_KEY};
pub use store::SessionStore;
