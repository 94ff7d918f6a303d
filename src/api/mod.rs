//! LigaPro WASM API
//!
//! This module provides the JavaScript-facing API for the league pages.
//!
//! # Module Structure
//!
//! - `helpers`: Logging macros, serde conversion, page configuration store, DOM utilities
//! - `page`: `initPage` and listener wiring
//! - `export`: Report image export (`exportReport`) and its browser collaborators
//! - `views`: Tabs, match/playoff views, matrix rounds, date groups
//! - `modals`: Share and matrix modals, date range toggles
//! - `matches`: Inline score/cost saving, court totals, history and player pickers

pub mod helpers;
pub mod export;
pub mod matches;
pub mod modals;
pub mod page;
pub mod views;

pub use export::export_report;
pub use matches::{recalculate_totals, update_history, update_match_cost, update_match_score};
pub use modals::{close_matrix_modal, close_share_modal, open_matrix_modal, open_share_modal, toggle_date_input, toggle_date_inputs};
pub use page::init_page;
pub use views::{show_matrix_round, show_tab, toggle_date_collapse, toggle_match_view, toggle_playoff_view};
