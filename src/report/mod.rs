//! Report image export
//!
//! Turns the on-screen report region into a PNG and hands it to the user.
//! The pipeline is platform-agnostic: the DOM, `fetch`, the rasterizer and
//! the share sheet are reached only through the traits in [`platform`], so
//! the whole flow runs natively in tests.
//!
//! # Module Structure
//!
//! - `errors`: Hard failures of an export
//! - `platform`: Collaborator traits and the render options
//! - `images`: Embedded image inlining (data URIs, proxying)
//! - `exporter`: The export operation itself

pub mod errors;
pub mod exporter;
pub mod images;
pub mod platform;

pub use errors::ExportError;
pub use exporter::ReportExporter;
pub use images::{
    classify_source, inline_external_images, proxied_url, resolve_source, ImageSource, InlineSummary,
};
pub use platform::{
    CaptureRegion, FetchedImage, ImageFetcher, ImageSlot, Notifier, Rasterizer, RenderOptions,
    ReportFile, SharePlatform, StatusView,
};
