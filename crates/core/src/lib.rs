//! Domain types shared by the screenplay backend crates.
//!
//! Nothing in here touches the database or the network: it holds the error
//! taxonomy, id/timestamp aliases, the JSON-in-column codecs and the small
//! validation helpers used by the repositories and HTTP handlers.

pub mod character;
pub mod content;
pub mod error;
pub mod json_array;
pub mod outline;
pub mod types;
pub mod validation;
