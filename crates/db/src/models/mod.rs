//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row (plus a decoded
//!   public form where a column holds a JSON blob)
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying the full mutable record
//! - Small single-field patch DTOs where the resource supports them
//!
//! All wire types use camelCase field names.

pub mod chapter;
pub mod character;
pub mod episode;
pub mod generation_log;
pub mod outline;
pub mod project;
