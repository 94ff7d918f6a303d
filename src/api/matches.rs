//! Inline match editing for the WASM API
//!
//! Scores and referee fees are saved as soon as they change. Cost edits
//! update the court footer before the request goes out.

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, Request, RequestInit, Response};

use crate::api::helpers::{
    document, element_by_id, input_by_id, js_error_message, page_config, query_all, ui_error, window,
};
use crate::league::history::{describe_history, player_options};
use crate::league::scores::{clamp_highlight_start, reply_error, MatchUpdate, UpdateKind};
use crate::league::totals::{format_amount, CourtTotals, PROFIT_NEGATIVE_CLASS, PROFIT_POSITIVE_CLASS};
use crate::league::UiError;
use crate::{wasm_error, wasm_log, wasm_warn};

async fn post_update(update: MatchUpdate) -> Result<Option<String>, UiError> {
    let config = page_config();
    let url = config
        .update_match_costs_url
        .as_deref()
        .ok_or(UiError::MissingConfig("updateMatchCostsUrl"))?;
    let request_error = |err: JsValue| UiError::Request(js_error_message(&err));

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&update.to_json()?));
    let request = Request::new_with_str_and_init(url, &init).map_err(request_error)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(request_error)?;
    headers
        .set("X-CSRFToken", config.csrf_token.as_deref().unwrap_or_default())
        .map_err(request_error)?;

    let window = window().map_err(request_error)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(request_error)?
        .dyn_into()
        .map_err(request_error)?;
    let body = JsFuture::from(response.text().map_err(request_error)?)
        .await
        .map_err(request_error)?
        .as_string()
        .unwrap_or_default();

    reply_error(&body)
}

async fn save(kind: UpdateKind, update: MatchUpdate) {
    wasm_log!("Saving {} for match {}", update.field, update.match_id);
    match post_update(update).await {
        Ok(None) => {}
        Ok(Some(error)) => {
            wasm_error!("{}", error);
            if let Ok(window) = window() {
                window
                    .alert_with_message(&format!("{}{}", kind.alert_prefix(), error))
                    .ok();
            }
        }
        // Transport problems are only logged; the typed value stays visible
        Err(err) => wasm_error!("Error: {}", err),
    }
}

/// Save an edited score
#[wasm_bindgen(js_name = updateMatchScore)]
pub async fn update_match_score(match_id: JsValue, field: String, value: String) {
    let match_id: Value = serde_wasm_bindgen::from_value(match_id).unwrap_or(Value::Null);
    save(UpdateKind::Score, MatchUpdate::new(match_id, field, Value::String(value))).await;
}

/// Save an edited referee fee after updating the court totals
#[wasm_bindgen(js_name = updateMatchCost)]
pub async fn update_match_cost(match_id: JsValue, field: String, value: String, court_id: String) {
    if let Err(err) = recalculate_totals(&court_id) {
        wasm_warn!("Could not recalculate totals for court {}: {}", court_id, js_error_message(&err));
    }
    let match_id: Value = serde_wasm_bindgen::from_value(match_id).unwrap_or(Value::Null);
    save(UpdateKind::Cost, MatchUpdate::new(match_id, field, Value::String(value))).await;
}

fn set_footer_amount(footer: &Element, data_type: &str, amount: i64) -> Result<(), JsValue> {
    if let Some(cell) = footer.query_selector(&format!("[data-type=\"{}\"]", data_type))? {
        cell.set_text_content(Some(&format_amount(amount)));
    }
    Ok(())
}

/// Recompute the footer of one court's cost table from its inputs
#[wasm_bindgen(js_name = recalculateTotals)]
pub fn recalculate_totals(court_id: &str) -> Result<(), JsValue> {
    let Some(footer) = document()?.get_element_by_id(&format!("footer-{}", court_id)) else {
        return Ok(());
    };
    let Some(table) = footer.closest("table")? else {
        return Ok(());
    };

    let inputs: Vec<(Option<String>, String)> = query_all(&table, "input")?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| (input.get_attribute("data-field"), input.value()))
        .collect();
    let totals = CourtTotals::from_inputs(
        inputs
            .iter()
            .map(|(field, value)| (field.as_deref(), value.as_str())),
    );

    set_footer_amount(&footer, "total-home", totals.home)?;
    set_footer_amount(&footer, "total-away", totals.away)?;
    set_footer_amount(&footer, "total-referee", totals.referee)?;

    if let Some(profit) = footer.query_selector("[data-type=\"total-profit\"]")? {
        profit.set_text_content(Some(&format_amount(totals.profit())));
        let classes = profit.class_list();
        classes.remove_2(PROFIT_POSITIVE_CLASS, PROFIT_NEGATIVE_CLASS)?;
        classes.add_1(totals.profit_class())?;
    }
    Ok(())
}

/// Show who the team picked in `select_id` has already played
#[wasm_bindgen(js_name = updateHistory)]
pub fn update_history(select_id: &str, output_id: &str) -> Result<(), JsValue> {
    let select = element_by_id(select_id)?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| ui_error(UiError::MissingElement(select_id.to_string())))?;
    let text = describe_history(&select.value(), &page_config());
    element_by_id(output_id)?.set_text_content(Some(&text));
    Ok(())
}

/// Refill a player picker with the players of the chosen team
pub fn load_players(team_select: &HtmlSelectElement) -> Result<(), JsValue> {
    let Some(target_id) = team_select.get_attribute("data-target") else {
        return Ok(());
    };
    let Some(player_select) = document()?.get_element_by_id(&target_id) else {
        return Ok(());
    };

    player_select.set_inner_html("");
    for (value, label) in player_options(&team_select.value(), &page_config()) {
        let option = HtmlOptionElement::new_with_text_and_value(&label, &value)?;
        player_select.append_child(&option)?;
    }
    Ok(())
}

/// Keep the highlight range start within `1..=end`
pub fn validate_highlight_range() -> Result<(), JsValue> {
    let start = input_by_id("h-start")?;
    let end = input_by_id("h-end")?;
    if let Some(adjusted) = clamp_highlight_start(&start.value(), &end.value()) {
        start.set_value(&adjusted.to_string());
    }
    Ok(())
}
