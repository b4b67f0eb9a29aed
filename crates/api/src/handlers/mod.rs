//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the matching repository in
//! `screenplay_db` (or the completion gateway) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod chapter;
pub mod character;
pub mod episode;
pub mod generation;
pub mod outline;
pub mod project;
