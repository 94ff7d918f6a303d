//! Data models for the LigaPro page layer
//!
//! Plain data only: the page configuration handed over by the template,
//! the report export view state, and the league DTOs the page scripts
//! read (teams, matrix cells, players).

pub mod config;
pub mod league;
pub mod status;

// Re-export commonly used types
pub use config::*;
pub use league::*;
pub use status::*;
