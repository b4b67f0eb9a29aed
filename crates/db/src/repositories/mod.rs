//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Read-modify-write is always a
//! single `UPDATE ... RETURNING` statement; concurrent writers to the same row
//! resolve last-write-wins.

pub mod chapter_repo;
pub mod character_repo;
pub mod episode_repo;
pub mod generation_log_repo;
pub mod outline_repo;
pub mod project_repo;

pub use chapter_repo::ChapterRepo;
pub use character_repo::CharacterRepo;
pub use episode_repo::EpisodeRepo;
pub use generation_log_repo::GenerationLogRepo;
pub use outline_repo::OutlineRepo;
pub use project_repo::ProjectRepo;
