//! Collaborator traits for the report exporter
//!
//! The browser implementations live in `api::export`; tests provide
//! in-memory ones. Everything runs on one cooperative event loop, so none
//! of the futures here are required to be `Send`.

#![allow(async_fn_in_trait)]

use base64::Engine;
use serde::Serialize;

use crate::models::{ExportStatus, ShareOutcome};
use crate::report::errors::ExportError;

/// Dark slate of the app theme, painted behind the report
pub const REPORT_BACKGROUND: &str = "#0f172a";

/// Supersampling factor for print-quality output
pub const REPORT_SCALE: f64 = 2.0;

pub const REPORT_MIME: &str = "image/png";

pub const REPORT_SHARE_TITLE: &str = "Reporte de la Liga";

/// An image element inside the capture region
pub trait ImageSlot {
    /// Current source locator (absolute URL, relative path or data URI)
    fn source(&self) -> String;

    /// Swap the source for inlined data, keeping the previous locator on
    /// the element as `data-original-src`
    fn replace_source(&self, inlined: &str, original: &str);
}

/// The document region whose rendered pixels become the report
pub trait CaptureRegion {
    type Image: ImageSlot;

    /// Every image element under the region, in document order
    fn images(&self) -> Vec<Self::Image>;
}

/// Bytes of a fetched image plus the type the server declared
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl FetchedImage {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self { bytes, content_type }
    }

    /// Encode as a `data:` URI, falling back to `application/octet-stream`
    /// when the response carried no type
    pub fn to_data_uri(&self) -> String {
        let mime = self
            .content_type
            .as_deref()
            .map(str::trim)
            .filter(|mime| !mime.is_empty())
            .unwrap_or("application/octet-stream");
        format!(
            "data:{};base64,{}",
            mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

pub trait ImageFetcher {
    /// GET `url`; any transport error or non-2xx status is an `Err`
    async fn fetch(&self, url: &str) -> Result<FetchedImage, ExportError>;
}

/// Options passed to the DOM-to-raster backend
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub background_color: String,
    pub scale: f64,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub allow_taint: bool,
}

impl RenderOptions {
    /// Fixed options of the league report
    pub fn report() -> Self {
        Self {
            background_color: REPORT_BACKGROUND.to_string(),
            scale: REPORT_SCALE,
            use_cors: true,
            allow_taint: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::report()
    }
}

/// DOM-to-raster backend
pub trait Rasterizer<C: CaptureRegion> {
    type Bitmap;

    async fn render(&self, region: &C, options: &RenderOptions) -> Result<Self::Bitmap, ExportError>;

    fn encode_png(&self, bitmap: Self::Bitmap) -> Result<Vec<u8>, ExportError>;
}

/// The encoded report, owned by one export invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFile {
    pub filename: String,
    pub mime: &'static str,
    pub title: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportFile {
    pub fn png(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime: REPORT_MIME,
            title: REPORT_SHARE_TITLE,
            bytes,
        }
    }

    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }
}

/// Native share sheet plus the download fallback
pub trait SharePlatform {
    /// True when the platform exposes file sharing and accepts this file
    fn can_share(&self, file: &ReportFile) -> bool;

    async fn share(&self, file: &ReportFile) -> ShareOutcome;

    fn download(&self, file: &ReportFile) -> Result<(), ExportError>;
}

/// Observer of the trigger control state
pub trait StatusView {
    fn show(&self, status: &ExportStatus);
}

/// Blocking user-facing message
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_uses_declared_type() {
        let image = FetchedImage::new(b"GIF89a".to_vec(), Some("image/gif".into()));
        assert_eq!(image.to_data_uri(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_data_uri_without_type() {
        let image = FetchedImage::new(vec![0xff, 0xd8], None);
        assert_eq!(image.to_data_uri(), "data:application/octet-stream;base64,/9g=");
    }

    #[test]
    fn test_render_options_match_backend_keys() {
        let json = serde_json::to_value(RenderOptions::report()).unwrap();
        assert_eq!(json["backgroundColor"], "#0f172a");
        assert_eq!(json["scale"], 2.0);
        assert_eq!(json["useCORS"], true);
        assert_eq!(json["allowTaint"], true);
    }

    #[test]
    fn test_report_file_is_png() {
        let file = ReportFile::png("reporte-Copa.png", vec![1, 2, 3]);
        assert_eq!(file.mime, "image/png");
        assert_eq!(file.data_url(), "data:image/png;base64,AQID");
    }
}
