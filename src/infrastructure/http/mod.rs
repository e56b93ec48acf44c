//! HTTP infrastructure module
//!
//! This module contains HTTP-related concerns including the server, routes,
//! handlers, response formatting and filter utilities.

pub mod handlers;
pub mod responses;
pub mod routes;
pub mod server;
pub mod utils;

pub use responses::{handle_rejection, ResponseFormatter};
pub use server::HttpServer;
