//! View switching for the WASM API
//!
//! Tabs, match/playoff views, matrix rounds and collapsible date groups.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{
    add_classes, document, document_query_all, element_by_id, hide, remove_classes, show, ui_error, window,
};
use crate::league::views::{
    matrix_round_button_id, matrix_round_panel_id, restore_view, select_view, tab_from_hash, MatchView,
    PlayoffView, PreferenceStore, ViewGroup, ViewSwitch, ACTIVE_ROUND_BUTTON, INACTIVE_ROUND_BUTTON,
};
use crate::{wasm_log, wasm_warn};

/// View preferences kept in `window.localStorage`
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    wasm_warn!("Could not persist {}={}", key, value);
                }
            }
            None => wasm_warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

fn apply_switch(switch: &ViewSwitch) -> Result<(), JsValue> {
    let document = document()?;

    for id in &switch.hide_panels {
        if let Some(panel) = document.get_element_by_id(id) {
            hide(&panel)?;
        }
    }
    for id in &switch.reset_buttons {
        if let Some(button) = document.get_element_by_id(id) {
            remove_classes(&button, switch.active_classes)?;
            add_classes(&button, switch.inactive_classes)?;
        }
    }

    if let Some(panel) = document.get_element_by_id(switch.show_panel) {
        show(&panel)?;
    }
    if let Some(button) = document.get_element_by_id(switch.activate_button) {
        remove_classes(&button, switch.inactive_classes)?;
        add_classes(&button, switch.active_classes)?;
    }
    Ok(())
}

fn switch_group<V: ViewGroup>(view: &str) -> Result<(), JsValue> {
    let view: V = view.parse().map_err(ui_error)?;
    let switch = select_view(&LocalStorage, view);
    wasm_log!("Switching {} to {}", V::STORAGE_KEY, view.name());
    apply_switch(&switch)
}

/// Show the match list, matrix or date view and remember the choice
#[wasm_bindgen(js_name = toggleMatchView)]
pub fn toggle_match_view(view: &str) -> Result<(), JsValue> {
    switch_group::<MatchView>(view)
}

/// Show the playoff list or bracket and remember the choice
#[wasm_bindgen(js_name = togglePlayoffView)]
pub fn toggle_playoff_view(view: &str) -> Result<(), JsValue> {
    // Pages without a playoff section have nothing to switch
    let document = document()?;
    if document.get_element_by_id(PlayoffView::List.panel_id()).is_none()
        || document.get_element_by_id(PlayoffView::Bracket.panel_id()).is_none()
    {
        return Ok(());
    }
    switch_group::<PlayoffView>(view)
}

/// Re-apply the stored match and playoff views
pub fn restore_view_preferences() -> Result<(), JsValue> {
    if let Some(view) = restore_view::<MatchView, _>(&LocalStorage) {
        toggle_match_view(view.name())?;
    }
    if let Some(view) = restore_view::<PlayoffView, _>(&LocalStorage) {
        toggle_playoff_view(view.name())?;
    }
    Ok(())
}

/// Activate a tab and its button, and record it in the URL hash
#[wasm_bindgen(js_name = showTab)]
pub fn show_tab(tab_id: &str) -> Result<(), JsValue> {
    for content in document_query_all(".tab-content")? {
        content.class_list().remove_1("active")?;
    }
    if let Some(selected) = document()?.get_element_by_id(tab_id) {
        selected.class_list().add_1("active")?;
    }

    for button in document_query_all(".tab-btn")? {
        button.class_list().remove_1("active")?;
    }
    let selector = format!(".tab-btn[data-tab=\"{}\"]", tab_id);
    if let Some(button) = document()?.query_selector(&selector)? {
        button.class_list().add_1("active")?;
    }

    window()?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", tab_id)))
}

/// Open the tab named by the URL hash, if such an element exists
pub fn restore_tab_from_hash() -> Result<(), JsValue> {
    let hash = window()?.location().hash()?;
    if let Some(tab) = tab_from_hash(&hash) {
        if document()?.get_element_by_id(tab).is_some() {
            show_tab(tab)?;
        }
    }
    Ok(())
}

/// Show one round of the match matrix
#[wasm_bindgen(js_name = showMatrixRound)]
pub fn show_matrix_round(round: u32) -> Result<(), JsValue> {
    for container in document_query_all(".matrix-round-container")? {
        hide(&container)?;
    }
    if let Some(selected) = document()?.get_element_by_id(&matrix_round_panel_id(round)) {
        show(&selected)?;
    }

    for button in document_query_all("[id^=\"btn-matrix-round-\"]")? {
        remove_classes(&button, ACTIVE_ROUND_BUTTON)?;
        add_classes(&button, INACTIVE_ROUND_BUTTON)?;
    }
    if let Some(active) = document()?.get_element_by_id(&matrix_round_button_id(round)) {
        remove_classes(&active, INACTIVE_ROUND_BUTTON)?;
        add_classes(&active, ACTIVE_ROUND_BUTTON)?;
    }
    Ok(())
}

/// Expand or collapse a date group and flip its chevron
#[wasm_bindgen(js_name = toggleDateCollapse)]
pub fn toggle_date_collapse(id: &str) -> Result<(), JsValue> {
    let group = element_by_id(id)?;
    let icon = element_by_id(&format!("icon-{}", id))?;
    if group.class_list().contains("hidden") {
        show(&group)?;
        icon.class_list().add_1("rotate-180")
    } else {
        hide(&group)?;
        icon.class_list().remove_1("rotate-180")
    }
}
