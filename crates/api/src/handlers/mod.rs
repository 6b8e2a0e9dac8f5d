//! Request handlers.
//!
//! Handlers deserialize input, delegate to `pcbuild_core`, and map errors
//! via [`AppError`](crate::error::AppError).

pub mod builds;
