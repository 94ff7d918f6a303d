//! League page behaviour
//!
//! Pure logic behind the league detail page: view switching and its
//! persisted preference, court cost totals, head-to-head history text,
//! the match matrix modal and match update payloads. The DOM side lives in
//! `crate::api`.

pub mod errors;
pub mod history;
pub mod matrix;
pub mod scores;
pub mod totals;
pub mod views;

pub use errors::UiError;
