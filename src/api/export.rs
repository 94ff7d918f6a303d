//! Report image export for the WASM API
//!
//! Browser implementations of the exporter's collaborators:
//! - `DomRegion` / `DomImage`: the capture region and its `<img>` elements
//! - `BrowserFetcher`: `window.fetch` returning the raw image bytes
//! - `Html2Canvas`: the `html2canvas` global as DOM-to-raster backend
//! - `NavigatorShare`: `navigator.share` with the anchor download fallback
//! - `TriggerButton` / `WindowAlert`: the control label and `alert()`

use base64::Engine;
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, File, FilePropertyBag, HtmlAnchorElement, HtmlCanvasElement, HtmlElement, HtmlImageElement, Response};

use crate::api::helpers::{document, js_error_message, js_error_name, page_config, query_all, serialize, window};
use crate::models::{ExportStatus, ShareOutcome};
use crate::report::{
    CaptureRegion, ExportError, FetchedImage, ImageFetcher, ImageSlot, Notifier, Rasterizer,
    RenderOptions, ReportExporter, ReportFile, SharePlatform, StatusView,
};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Element rendered into the report when no id is given
pub const DEFAULT_CAPTURE_ID: &str = "capture-target";

/// Trigger control when no selector is given
pub const DEFAULT_TRIGGER_SELECTOR: &str = "[data-report-export]";

/// Attribute keeping the source an image had before inlining
pub const ORIGINAL_SRC_ATTRIBUTE: &str = "data-original-src";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = html2canvas)]
    fn html2canvas(element: &HtmlElement, options: &JsValue) -> Result<Promise, JsValue>;
}

// ============================================================================
// Capture Region
// ============================================================================

pub struct DomImage(HtmlImageElement);

impl ImageSlot for DomImage {
    fn source(&self) -> String {
        self.0.src()
    }

    fn replace_source(&self, inlined: &str, original: &str) {
        // TODO: decide whether to restore data-original-src after rendering
        if let Err(err) = self.0.set_attribute(ORIGINAL_SRC_ATTRIBUTE, original) {
            wasm_warn!("Could not record original src {}: {}", original, js_error_message(&err));
        }
        self.0.set_src(inlined);
    }
}

pub struct DomRegion {
    element: HtmlElement,
}

impl DomRegion {
    pub fn by_id(id: &str) -> Result<Self, ExportError> {
        let element = document()
            .map_err(|err| ExportError::Dom(js_error_message(&err)))?
            .get_element_by_id(id)
            .ok_or_else(|| ExportError::Dom(format!("Capture region #{} not found", id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ExportError::Dom(format!("#{} is not an HTML element", id)))?;
        Ok(Self { element })
    }
}

impl CaptureRegion for DomRegion {
    type Image = DomImage;

    fn images(&self) -> Vec<DomImage> {
        match query_all(&self.element, "img") {
            Ok(elements) => elements
                .into_iter()
                .filter_map(|element| element.dyn_into::<HtmlImageElement>().ok())
                .map(DomImage)
                .collect(),
            Err(err) => {
                wasm_warn!("Could not list report images: {}", js_error_message(&err));
                Vec::new()
            }
        }
    }
}

// ============================================================================
// Image Fetching
// ============================================================================

pub struct BrowserFetcher;

impl ImageFetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, ExportError> {
        let fetch_error = |err: JsValue| ExportError::Fetch {
            url: url.to_string(),
            reason: js_error_message(&err),
        };

        let window = window().map_err(fetch_error)?;
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(fetch_error)?
            .dyn_into()
            .map_err(fetch_error)?;

        if !response.ok() {
            return Err(ExportError::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        let content_type = response.headers().get("content-type").ok().flatten();
        let buffer = JsFuture::from(response.array_buffer().map_err(fetch_error)?)
            .await
            .map_err(fetch_error)?;
        let bytes = Uint8Array::new(&buffer).to_vec();

        Ok(FetchedImage::new(bytes, content_type))
    }
}

// ============================================================================
// Rendering
// ============================================================================

pub struct Html2Canvas;

impl Rasterizer<DomRegion> for Html2Canvas {
    type Bitmap = HtmlCanvasElement;

    async fn render(&self, region: &DomRegion, options: &RenderOptions) -> Result<HtmlCanvasElement, ExportError> {
        let render_error = |err: JsValue| ExportError::Render(js_error_message(&err));

        let options = serialize(options, "Render options serialization error").map_err(render_error)?;
        let promise = html2canvas(&region.element, &options).map_err(render_error)?;
        JsFuture::from(promise)
            .await
            .map_err(render_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ExportError::Render("Renderer did not return a canvas".to_string()))
    }

    fn encode_png(&self, canvas: HtmlCanvasElement) -> Result<Vec<u8>, ExportError> {
        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|err| ExportError::Encode(js_error_message(&err)))?;
        let payload = data_url
            .split_once(',')
            .map(|(_, payload)| payload)
            .ok_or_else(|| ExportError::Encode("Malformed canvas data URL".to_string()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|err| ExportError::Encode(err.to_string()))
    }
}

// ============================================================================
// Delivery
// ============================================================================

pub struct NavigatorShare;

impl NavigatorShare {
    fn share_data(file: &ReportFile) -> Result<Object, JsValue> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(file.bytes.as_slice()));
        let options = FilePropertyBag::new();
        options.set_type(file.mime);
        let file_obj = File::new_with_u8_array_sequence_and_options(&parts, &file.filename, &options)?;

        let files = Array::new();
        files.push(&file_obj);
        let data = Object::new();
        Reflect::set(&data, &"files".into(), &files)?;
        Reflect::set(&data, &"title".into(), &JsValue::from_str(file.title))?;
        Ok(data)
    }

    fn navigator_method(name: &str) -> Option<(JsValue, Function)> {
        let navigator: JsValue = window().ok()?.navigator().into();
        let method = Reflect::get(&navigator, &name.into()).ok()?;
        let method = method.dyn_into::<Function>().ok()?;
        Some((navigator, method))
    }
}

impl SharePlatform for NavigatorShare {
    fn can_share(&self, file: &ReportFile) -> bool {
        let (Some((navigator, can_share)), Some(_)) =
            (Self::navigator_method("canShare"), Self::navigator_method("share"))
        else {
            return false;
        };
        let Ok(data) = Self::share_data(file) else {
            return false;
        };
        can_share
            .call1(&navigator, &data)
            .map(|result| result.as_bool().unwrap_or(false))
            .unwrap_or(false)
    }

    async fn share(&self, file: &ReportFile) -> ShareOutcome {
        let Some((navigator, share)) = Self::navigator_method("share") else {
            return ShareOutcome::Failed("navigator.share is not available".to_string());
        };
        let data = match Self::share_data(file) {
            Ok(data) => data,
            Err(err) => return ShareOutcome::Failed(js_error_message(&err)),
        };

        let promise = match share.call1(&navigator, &data) {
            Ok(promise) => Promise::from(promise),
            Err(err) => return ShareOutcome::Failed(js_error_message(&err)),
        };

        match JsFuture::from(promise).await {
            Ok(_) => ShareOutcome::Shared,
            Err(err) if js_error_name(&err).as_deref() == Some("AbortError") => ShareOutcome::Cancelled,
            Err(err) => ShareOutcome::Failed(js_error_message(&err)),
        }
    }

    fn download(&self, file: &ReportFile) -> Result<(), ExportError> {
        let dom_error = |err: JsValue| ExportError::Download(js_error_message(&err));

        let document = document().map_err(dom_error)?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|_| ExportError::Download("Anchor cast failed".to_string()))?;
        anchor.set_href(&file.data_url());
        anchor.set_download(&file.filename);
        anchor.style().set_property("display", "none").ok();

        let body = document
            .body()
            .ok_or_else(|| ExportError::Download("Missing body".to_string()))?;
        body.append_child(&anchor).map_err(dom_error)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

// ============================================================================
// Control and Alerts
// ============================================================================

pub struct TriggerButton {
    element: Option<Element>,
}

impl TriggerButton {
    pub fn find(selector: &str) -> Self {
        let element = document()
            .ok()
            .and_then(|document| document.query_selector(selector).ok().flatten());
        if element.is_none() {
            wasm_warn!("Export trigger '{}' not found, status will not be shown", selector);
        }
        Self { element }
    }
}

impl StatusView for TriggerButton {
    fn show(&self, status: &ExportStatus) {
        let Some(element) = &self.element else {
            return;
        };
        element.set_inner_html(status.label_html());
        let result = if status.is_busy() {
            element
                .set_attribute("disabled", "")
                .and_then(|_| element.set_attribute("aria-busy", "true"))
        } else {
            element
                .remove_attribute("disabled")
                .and_then(|_| element.remove_attribute("aria-busy"))
        };
        if let Err(err) = result {
            wasm_warn!("Could not update export trigger: {}", js_error_message(&err));
        }
    }
}

pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn alert(&self, message: &str) {
        if let Ok(window) = window() {
            window.alert_with_message(message).ok();
        }
    }
}

// ============================================================================
// Export Entry Point
// ============================================================================

/// Export the report region as a PNG and share or download it
///
/// # Parameters
/// - `capture_id`: id of the region to render (default `capture-target`)
/// - `trigger_selector`: selector of the button to drive (default `[data-report-export]`)
///
/// # Returns
/// `{outcome: "shared" | "shareCancelled" | "downloaded" | "failed", reason?}`
#[wasm_bindgen(js_name = exportReport)]
pub async fn export_report(
    capture_id: Option<String>,
    trigger_selector: Option<String>,
) -> Result<JsValue, JsValue> {
    let capture_id = capture_id.unwrap_or_else(|| DEFAULT_CAPTURE_ID.to_string());
    let trigger_selector = trigger_selector.unwrap_or_else(|| DEFAULT_TRIGGER_SELECTOR.to_string());
    wasm_info!("exportReport called: region=#{}, trigger='{}'", capture_id, trigger_selector);

    let origin = window()?.location().origin()?;
    let config = page_config().export_config(&origin);
    let exporter = ReportExporter::new(
        config,
        BrowserFetcher,
        Html2Canvas,
        NavigatorShare,
        TriggerButton::find(&trigger_selector),
        WindowAlert,
    );

    let outcome = match DomRegion::by_id(&capture_id) {
        Ok(region) => exporter.export_report(&region).await,
        Err(err) => exporter.fail(err),
    };

    wasm_log!("  exportReport outcome: {:?}", outcome);
    serialize(&outcome, "Outcome serialization error")
}
