// League page logic: history text, matrix modal form, view preferences

use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;

use ligapro_ui::league::history::{describe_history, player_options, NO_HISTORY, PLAYER_PLACEHOLDER};
use ligapro_ui::league::matrix::MatrixForm;
use ligapro_ui::league::views::{restore_view, select_view, MatchView, PlayoffView, PreferenceStore};
use ligapro_ui::models::{MatrixCell, PageConfig};

#[derive(Default)]
struct MemoryPreferences(RefCell<HashMap<String, String>>);

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

fn page() -> PageConfig {
    serde_json::from_value(json!({
        "leagueName": "Liga Norte",
        "teamsMap": {"1": "Tigres", "2": "Leones", "10": "Halcones"},
        "teamsHistory": {
            "1": {"10": 1, "2": 3, "99": 1},
            "2": {}
        },
        "teamsData": {
            "1": {"name": "Tigres", "shield_url": "https://cdn.example.com/tigres.png"},
            "2": {"name": "Leones", "shield_url": null}
        },
        "playersByTeam": {
            "1": [{"id": 5, "name": "Ana"}, {"id": 8, "name": "Bea"}]
        }
    }))
    .unwrap()
}

#[test]
fn test_history_lists_opponents_in_id_order() {
    assert_eq!(
        describe_history("1", &page()),
        "Ya jugó contra: Leones x3, Halcones, Desconocido"
    );
}

#[test]
fn test_history_without_matches() {
    let config = page();
    assert_eq!(describe_history("2", &config), NO_HISTORY);
    assert_eq!(describe_history("10", &config), NO_HISTORY);
    assert_eq!(describe_history("", &config), "");
}

#[test]
fn test_player_options_start_with_placeholder() {
    let config = page();
    let options = player_options("1", &config);
    assert_eq!(options[0], (String::new(), PLAYER_PLACEHOLDER.to_string()));
    assert_eq!(options[1], ("5".to_string(), "Ana".to_string()));
    assert_eq!(options.len(), 3);

    assert_eq!(player_options("2", &config).len(), 1);
}

#[test]
fn test_matrix_form_edit_mode() {
    let cell: MatrixCell = serde_json::from_value(json!({
        "home_id": 1,
        "away_id": 2,
        "round": 3,
        "match": {
            "id": 41,
            "match_date_iso": "2024-05-04T18:30:00",
            "court_id": 2,
            "home_score": 4,
            "away_score": 1
        }
    }))
    .unwrap();

    let form = MatrixForm::from_cell(&cell, &page().teams_data).unwrap();

    assert_eq!(form.home.name, "Tigres");
    assert_eq!(form.home.shield_url.as_deref(), Some("https://cdn.example.com/tigres.png"));
    assert_eq!(form.away.shield_url, None);
    assert_eq!(form.match_id, "41");
    assert_eq!(form.date, "2024-05-04");
    assert_eq!(form.time, "18:30");
    assert_eq!(form.round, "3");
    assert_eq!(form.home_score, "4");
    assert!(form.delete_visible);
}

#[test]
fn test_matrix_form_create_mode() {
    let cell: MatrixCell = serde_json::from_value(json!({"home_id": "2", "away_id": "1"})).unwrap();

    let form = MatrixForm::from_cell(&cell, &page().teams_data).unwrap();

    assert_eq!(form.round, "1");
    assert!(form.match_id.is_empty());
    assert!(form.date.is_empty());
    assert!(!form.delete_visible);
    assert!(form.fields().iter().any(|(id, value)| *id == "matrix_home_team_id" && *value == "2"));
}

#[test]
fn test_matrix_form_round_as_rendered_by_template() {
    let teams = page().teams_data;
    for (round, expected) in [(json!("3"), "3"), (json!(2.0), "2"), (json!(0), "1"), (json!(null), "1")] {
        let cell: MatrixCell =
            serde_json::from_value(json!({"home_id": 1, "away_id": 2, "round": round})).unwrap();
        assert_eq!(MatrixForm::from_cell(&cell, &teams).unwrap().round, expected);
    }
}

#[test]
fn test_matrix_form_unknown_team() {
    let cell: MatrixCell = serde_json::from_value(json!({"home_id": 1, "away_id": 77})).unwrap();
    assert!(MatrixForm::from_cell(&cell, &page().teams_data).is_err());
}

#[test]
fn test_view_preference_round_trip() {
    let store = MemoryPreferences::default();
    assert_eq!(restore_view::<MatchView, _>(&store), None);

    let switch = select_view(&store, MatchView::Matrix);
    assert_eq!(switch.show_panel, "matches-matrix-view");
    assert_eq!(store.get("matchView").as_deref(), Some("matrix"));
    assert_eq!(restore_view::<MatchView, _>(&store), Some(MatchView::Matrix));

    select_view(&store, PlayoffView::Bracket);
    assert_eq!(restore_view::<PlayoffView, _>(&store), Some(PlayoffView::Bracket));
}

#[test]
fn test_stale_preference_ignored() {
    let store = MemoryPreferences::default();
    store.set("matchView", "calendar");
    assert_eq!(restore_view::<MatchView, _>(&store), None);
}
