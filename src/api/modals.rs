//! Modal dialogs and small form toggles for the WASM API

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlImageElement};

use crate::api::helpers::{
    close_modal, deserialize, document, element_by_id, hide, input_by_id, open_modal, page_config, set_field_value, show,
    ui_error,
};
use crate::league::matrix::{MatrixForm, TeamHeader};
use crate::models::MatrixCell;
use crate::wasm_info;

const SHIELD_PLACEHOLDER_CLASS: &str = "w-12 h-12 bg-white/10 rounded flex items-center justify-center";
const SHIELD_PLACEHOLDER_ICON: &str = r#"<i class="fas fa-shield-alt text-white/40"></i>"#;

#[wasm_bindgen(js_name = openShareModal)]
pub fn open_share_modal() -> Result<(), JsValue> {
    open_modal("shareModal")
}

#[wasm_bindgen(js_name = closeShareModal)]
pub fn close_share_modal() -> Result<(), JsValue> {
    close_modal("shareModal")
}

/// Show the custom date range when "recent matches" is checked
#[wasm_bindgen(js_name = toggleDateInputs)]
pub fn toggle_date_inputs() -> Result<(), JsValue> {
    let checked = input_by_id("check_recent")?.checked();
    let inputs = element_by_id("date_inputs")?;
    if checked {
        show(&inputs)
    } else {
        hide(&inputs)
    }
}

/// Start date of a league copy: hidden when copying from the start
#[wasm_bindgen(js_name = toggleDateInput)]
pub fn toggle_date_input(league_id: &str, is_from_start: bool) -> Result<(), JsValue> {
    let input = element_by_id(&format!("date_input_{}", league_id))?;
    if is_from_start {
        hide(&input)?;
        input.remove_attribute("required")
    } else {
        show(&input)?;
        input.set_attribute("required", "required")
    }
}

fn render_team_header(shield_id: &str, name_id: &str, team: &TeamHeader) -> Result<(), JsValue> {
    element_by_id(name_id)?.set_text_content(Some(&team.name));

    let shield = element_by_id(shield_id)?;
    let parent = shield.parent_element();
    let placeholder: Option<Element> = match &parent {
        Some(parent) => parent.query_selector("div")?,
        None => None,
    };

    match &team.shield_url {
        Some(url) => {
            if let Some(image) = shield.dyn_ref::<HtmlImageElement>() {
                image.set_src(url);
            }
            show(&shield)?;
            if let Some(placeholder) = placeholder {
                placeholder.remove();
            }
        }
        None => {
            hide(&shield)?;
            if let (None, Some(parent)) = (placeholder, parent) {
                let placeholder = document()?.create_element("div")?;
                placeholder.set_class_name(SHIELD_PLACEHOLDER_CLASS);
                placeholder.set_inner_html(SHIELD_PLACEHOLDER_ICON);
                parent.insert_before(&placeholder, Some(shield.as_ref()))?;
            }
        }
    }
    Ok(())
}

/// Open the matrix modal for a clicked home/away cell
///
/// # Parameters
/// - `cell_js`: `{home_id, away_id, round?, match?}` as rendered by the page
#[wasm_bindgen(js_name = openMatrixModal)]
pub fn open_matrix_modal(cell_js: JsValue) -> Result<(), JsValue> {
    let cell: MatrixCell = deserialize(cell_js, "Matrix cell deserialization error")?;
    let form = MatrixForm::from_cell(&cell, &page_config().teams_data).map_err(ui_error)?;
    wasm_info!(
        "openMatrixModal: {} vs {} (match '{}')",
        form.home.name,
        form.away.name,
        form.match_id
    );

    render_team_header("matrix_home_shield", "matrix_home_name", &form.home)?;
    render_team_header("matrix_away_shield", "matrix_away_name", &form.away)?;

    // matrix_court_id is a <select>, the rest are inputs
    for (id, value) in form.fields() {
        set_field_value(id, value)?;
    }

    let delete_button = element_by_id("btn-delete-matrix-match")?;
    if form.delete_visible {
        show(&delete_button)?;
    } else {
        hide(&delete_button)?;
    }

    open_modal("matrixMatchModal")
}

#[wasm_bindgen(js_name = closeMatrixModal)]
pub fn close_matrix_modal() -> Result<(), JsValue> {
    close_modal("matrixMatchModal")
}

/// Submit the delete form for the match shown in the matrix modal
pub fn delete_matrix_match() -> Result<(), JsValue> {
    let match_id = input_by_id("matrix_match_id")?.value();
    if match_id.is_empty() {
        return Ok(());
    }
    input_by_id("delete_matrix_match_id")?.set_value(&match_id);
    element_by_id("deleteMatrixForm")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| JsValue::from_str("#deleteMatrixForm is not a form"))?
        .submit()
}
