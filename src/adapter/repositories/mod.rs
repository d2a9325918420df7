//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_log_repository;
