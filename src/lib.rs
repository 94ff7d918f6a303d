//! LigaPro Manager WASM Module
//!
//! Browser-side behaviour of the league administration pages: the report
//! image exporter plus tabs, view toggles, modals and inline match editing.

pub mod api;
pub mod league;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use models::config::*;
pub use models::status::*;
pub use report::{ExportError, ReportExporter};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("LigaPro WASM module initialized");
}
