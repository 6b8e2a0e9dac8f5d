//! PC build compatibility API server library.
//!
//! Exposes config, state, error handling and the assembled router so
//! integration tests and the binary entrypoint build the same app.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
