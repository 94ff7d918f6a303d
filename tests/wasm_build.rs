//! WASM build test
//!
//! Browser tests for the DOM side of the report exporter.

use ligapro_ui::api::export::{BrowserFetcher, DomRegion, TriggerButton, ORIGINAL_SRC_ATTRIBUTE};
use ligapro_ui::api::helpers::{document, store_page};
use ligapro_ui::api::modals::open_matrix_modal;
use ligapro_ui::models::{ExportConfig, ExportStatus, PageConfig};
use ligapro_ui::report::{inline_external_images, CaptureRegion, ImageSlot, StatusView};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PIXEL: &str = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";

fn mount(html: &str) {
    let document = document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
}

#[wasm_bindgen_test]
async fn test_inline_images_are_skipped() {
    mount(&format!(r#"<div id="report-inline"><img src="{}"><img src="{}"></div>"#, PIXEL, PIXEL));
    let region = DomRegion::by_id("report-inline").unwrap();

    let summary = inline_external_images(&region, &BrowserFetcher, &ExportConfig::new("http://localhost")).await;

    assert_eq!(summary.skipped, 2);
    for image in region.images() {
        assert_eq!(image.source(), PIXEL);
    }
}

#[wasm_bindgen_test]
fn test_replace_source_keeps_original() {
    mount(r#"<div id="report-replace"><img src="/static/shield.png"></div>"#);
    let region = DomRegion::by_id("report-replace").unwrap();
    let image = region.images().remove(0);
    let original = image.source();

    image.replace_source(PIXEL, &original);

    assert_eq!(image.source(), PIXEL);
    let element = document().unwrap().query_selector("#report-replace img").unwrap().unwrap();
    assert_eq!(element.get_attribute(ORIGINAL_SRC_ATTRIBUTE), Some(original));
}

#[wasm_bindgen_test]
fn test_missing_region_is_an_error() {
    assert!(DomRegion::by_id("no-such-region").is_err());
}

#[wasm_bindgen_test]
fn test_trigger_button_follows_status() {
    mount(r#"<button id="export-btn" data-report-export>Descargar</button>"#);
    let button = TriggerButton::find("#export-btn");
    let element = document().unwrap().get_element_by_id("export-btn").unwrap();

    button.show(&ExportStatus::Rendering);
    assert!(element.has_attribute("disabled"));
    assert_eq!(element.inner_html(), ExportStatus::Rendering.label_html());

    button.show(&ExportStatus::Error("boom".into()));
    assert!(!element.has_attribute("disabled"));
    assert_eq!(element.inner_html(), ExportStatus::Error("boom".into()).label_html());
}

const MATRIX_MODAL: &str = r#"
<div id="matrixMatchModal" class="hidden">
  <div><img id="matrix_home_shield"></div><span id="matrix_home_name"></span>
  <div><img id="matrix_away_shield"></div><span id="matrix_away_name"></span>
  <input id="matrix_home_team_id" type="hidden">
  <input id="matrix_away_team_id" type="hidden">
  <input id="matrix_match_round" type="number">
  <input id="matrix_match_id" type="hidden">
  <input id="matrix_match_date" type="date">
  <input id="matrix_match_time" type="time">
  <select id="matrix_court_id"><option value="">-</option><option value="2">Cancha 2</option></select>
  <input id="matrix_home_score" type="number">
  <input id="matrix_away_score" type="number">
  <button id="btn-delete-matrix-match" class="hidden"></button>
</div>"#;

#[wasm_bindgen_test]
fn test_matrix_modal_opens_with_court_select() {
    mount(MATRIX_MODAL);
    let config: PageConfig = serde_json::from_str(
        r#"{"teamsData": {"1": {"name": "Tigres", "shield_url": "/static/tigres.png"}, "2": {"name": "Leones"}}}"#,
    )
    .unwrap();
    store_page(config).unwrap();
    let cell = js_sys::JSON::parse(
        r#"{"home_id": 1, "away_id": 2, "round": "3",
            "match": {"id": 41, "match_date_iso": "2024-05-04T18:30:00", "court_id": 2}}"#,
    )
    .unwrap();

    open_matrix_modal(cell).unwrap();

    let document = document().unwrap();
    let modal = document.get_element_by_id("matrixMatchModal").unwrap();
    assert!(modal.class_list().contains("flex"));
    assert!(!modal.class_list().contains("hidden"));
    let court = document.get_element_by_id("matrix_court_id").unwrap();
    assert_eq!(court.dyn_into::<web_sys::HtmlSelectElement>().unwrap().value(), "2");
    let round = document.get_element_by_id("matrix_match_round").unwrap();
    assert_eq!(round.dyn_into::<web_sys::HtmlInputElement>().unwrap().value(), "3");
    let delete = document.get_element_by_id("btn-delete-matrix-match").unwrap();
    assert!(!delete.class_list().contains("hidden"));
}
