//! Page setup for the WASM API
//!
//! `initPage` receives the template's configuration once and wires the
//! listeners the league pages need. Every listener is optional: pages only
//! carry the elements they use.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::api::export::{export_report, DEFAULT_TRIGGER_SELECTOR};
use crate::api::helpers::{
    deserialize, document, document_query_all, hide, js_error_message, show, store_page, window,
};
use crate::api::matches::{load_players, update_history, validate_highlight_range};
use crate::api::modals::delete_matrix_match;
use crate::api::views::{restore_tab_from_hash, restore_view_preferences};
use crate::models::PageConfig;
use crate::{wasm_info, wasm_warn};

/// Flash messages disappear after this many milliseconds
pub const FLASH_TIMEOUT_MS: i32 = 5000;

const FLASH_SELECTOR: &str = ".fixed.top-4 > div";

fn log_failure(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        wasm_warn!("{} failed: {}", context, js_error_message(&err));
    }
}

fn listen(element: &Element, event: &str, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn element(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Store the page configuration and wire the page's listeners
///
/// # Parameters
/// - `config_js`: `{leagueName, proxyImageUrl, csrfToken, updateMatchCostsUrl,
///   teamsMap, teamsHistory, teamsData, playersByTeam}`, every key optional
#[wasm_bindgen(js_name = initPage)]
pub fn init_page(config_js: JsValue) -> Result<(), JsValue> {
    let config: PageConfig = if config_js.is_undefined() || config_js.is_null() {
        PageConfig::default()
    } else {
        deserialize(config_js, "Page configuration deserialization error")?
    };
    wasm_info!(
        "initPage: league={:?}, {} teams",
        config.league_name,
        config.teams_map.len()
    );
    store_page(config)?;

    log_failure("Mobile menu", wire_mobile_menu());
    log_failure("Flash messages", schedule_flash_dismissal());
    log_failure("Match form history", wire_history_selects());
    log_failure("Player pickers", wire_player_pickers());
    log_failure("Tab restore", restore_tab_from_hash());
    log_failure("View restore", restore_view_preferences());
    log_failure("Highlight settings", wire_highlight_settings());
    log_failure("Matrix delete", wire_matrix_delete());
    log_failure("Report export", wire_report_export());
    Ok(())
}

fn wire_mobile_menu() -> Result<(), JsValue> {
    let (Some(button), Some(menu)) = (element("mobile-menu-btn"), element("mobile-menu")) else {
        return Ok(());
    };
    let icon_host = button.clone();
    listen(&button, "click", move || {
        log_failure("Mobile menu toggle", toggle_mobile_menu(&icon_host, &menu));
    })
}

fn toggle_mobile_menu(button: &Element, menu: &Element) -> Result<(), JsValue> {
    let hidden = menu.class_list().toggle("hidden")?;
    if let Some(icon) = button.query_selector("i")? {
        let classes = icon.class_list();
        if hidden {
            classes.remove_1("fa-times")?;
            classes.add_1("fa-bars")?;
        } else {
            classes.remove_1("fa-bars")?;
            classes.add_1("fa-times")?;
        }
    }
    Ok(())
}

fn schedule_flash_dismissal() -> Result<(), JsValue> {
    let callback = Closure::once_into_js(move || {
        match document_query_all(FLASH_SELECTOR) {
            Ok(messages) => messages.iter().for_each(|message| message.remove()),
            Err(err) => wasm_warn!("Could not dismiss flash messages: {}", js_error_message(&err)),
        }
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        FLASH_TIMEOUT_MS,
    )?;
    Ok(())
}

fn wire_history_selects() -> Result<(), JsValue> {
    let pairs = [("home_team_id", "home_history"), ("away_team_id", "away_history")];
    let mut any = false;
    for (select_id, output_id) in pairs {
        if let Some(select) = element(select_id) {
            any = true;
            listen(&select, "change", move || {
                log_failure("History update", update_history(select_id, output_id));
            })?;
        }
    }

    if any {
        for (select_id, output_id) in pairs {
            if element(select_id).is_some() && element(output_id).is_some() {
                update_history(select_id, output_id)?;
            }
        }
    }
    Ok(())
}

fn wire_player_pickers() -> Result<(), JsValue> {
    for select in document_query_all(".team-select")? {
        let Ok(team_select) = select.clone().dyn_into::<HtmlSelectElement>() else {
            continue;
        };
        listen(&select, "change", move || {
            log_failure("Player picker", load_players(&team_select));
        })?;
    }
    Ok(())
}

fn wire_highlight_settings() -> Result<(), JsValue> {
    if let (Some(toggle), Some(settings)) = (element("toggle-highlight"), element("highlight-settings-box")) {
        if let Ok(checkbox) = toggle.clone().dyn_into::<HtmlInputElement>() {
            listen(&toggle, "change", move || {
                let result = if checkbox.checked() { show(&settings) } else { hide(&settings) };
                log_failure("Highlight toggle", result);
            })?;
        }
    }

    if let (Some(start), Some(end)) = (element("h-start"), element("h-end")) {
        for input in [start, end] {
            listen(&input, "change", || log_failure("Highlight range", validate_highlight_range()))?;
        }
    }
    Ok(())
}

fn wire_matrix_delete() -> Result<(), JsValue> {
    let Some(button) = element("btn-delete-matrix-match") else {
        return Ok(());
    };
    listen(&button, "click", || log_failure("Matrix delete", delete_matrix_match()))
}

fn wire_report_export() -> Result<(), JsValue> {
    let Some(trigger) = document()?.query_selector(DEFAULT_TRIGGER_SELECTOR)? else {
        return Ok(());
    };
    listen(&trigger, "click", || {
        wasm_bindgen_futures::spawn_local(async {
            if let Err(err) = export_report(None, None).await {
                wasm_warn!("Report export failed: {}", js_error_message(&err));
            }
        });
    })
}
