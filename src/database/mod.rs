// Database module for tara-review
// Provides SQLite persistence for review drafts (autosave / reload-on-rejoin)

pub mod drafts_repo;
pub mod manager;
pub mod migrations;

pub use manager::DatabaseManager;
