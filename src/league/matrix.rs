//! Match matrix modal
//!
//! Clicking a home/away cell of the matrix opens a modal that either edits
//! the match already played in that cell or creates a new one.

use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::league::errors::UiError;
use crate::league::totals::parse_int;
use crate::models::{json_to_field, MatrixCell, TeamInfo};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamHeader {
    pub name: String,
    /// `None` shows the shield placeholder instead of an image
    pub shield_url: Option<String>,
}

impl TeamHeader {
    fn from_team(team: &TeamInfo) -> Self {
        Self {
            name: team.name.clone(),
            shield_url: team.shield_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Values of the matrix modal form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixForm {
    pub home: TeamHeader,
    pub away: TeamHeader,
    pub home_team_id: String,
    pub away_team_id: String,
    pub round: String,
    pub match_id: String,
    pub date: String,
    pub time: String,
    pub court_id: String,
    pub home_score: String,
    pub away_score: String,
    /// Only an existing match can be deleted
    pub delete_visible: bool,
}

impl MatrixForm {
    pub fn from_cell(cell: &MatrixCell, teams: &HashMap<String, TeamInfo>) -> Result<Self, UiError> {
        let home_team_id = json_to_field(&cell.home_id);
        let away_team_id = json_to_field(&cell.away_id);
        let home = teams
            .get(&home_team_id)
            .ok_or_else(|| UiError::UnknownTeam(home_team_id.clone()))?;
        let away = teams
            .get(&away_team_id)
            .ok_or_else(|| UiError::UnknownTeam(away_team_id.clone()))?;

        let mut form = Self {
            home: TeamHeader::from_team(home),
            away: TeamHeader::from_team(away),
            home_team_id,
            away_team_id,
            round: round_or_first(cell.round.as_ref()).to_string(),
            match_id: String::new(),
            date: String::new(),
            time: String::new(),
            court_id: String::new(),
            home_score: String::new(),
            away_score: String::new(),
            delete_visible: false,
        };

        if let Some(existing) = &cell.existing {
            form.match_id = json_to_field(&existing.id);
            if let Some(iso) = existing.match_date_iso.as_deref() {
                let (date, time) = split_match_datetime(iso);
                form.date = date;
                form.time = time;
            }
            form.court_id = existing.court_id.as_ref().map(json_to_field).unwrap_or_default();
            form.home_score = existing.home_score.as_ref().map(json_to_field).unwrap_or_default();
            form.away_score = existing.away_score.as_ref().map(json_to_field).unwrap_or_default();
            form.delete_visible = true;
        }

        Ok(form)
    }

    /// `(input id, value)` pairs of the modal form
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("matrix_home_team_id", self.home_team_id.as_str()),
            ("matrix_away_team_id", self.away_team_id.as_str()),
            ("matrix_match_round", self.round.as_str()),
            ("matrix_match_id", self.match_id.as_str()),
            ("matrix_match_date", self.date.as_str()),
            ("matrix_match_time", self.time.as_str()),
            ("matrix_court_id", self.court_id.as_str()),
            ("matrix_home_score", self.home_score.as_str()),
            ("matrix_away_score", self.away_score.as_str()),
        ]
    }
}

/// Round of a matrix cell, read like `parseInt` and defaulting to the first
fn round_or_first(round: Option<&serde_json::Value>) -> i64 {
    round
        .map(json_to_field)
        .and_then(|round| parse_int(&round))
        .filter(|round| *round > 0)
        .unwrap_or(1)
}

/// Split `YYYY-MM-DDTHH:MM:SS` into date and `HH:MM` input values
pub fn split_match_datetime(iso: &str) -> (String, String) {
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(iso, format) {
            return (
                parsed.format("%Y-%m-%d").to_string(),
                parsed.format("%H:%M").to_string(),
            );
        }
    }

    // Keep whatever the server sent rather than dropping it
    let mut parts = iso.splitn(2, 'T');
    let date = parts.next().unwrap_or_default().to_string();
    let time = parts
        .next()
        .map(|time| time.chars().take(5).collect())
        .unwrap_or_default();
    (date, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_match_datetime() {
        assert_eq!(
            split_match_datetime("2024-05-04T18:30:00"),
            ("2024-05-04".to_string(), "18:30".to_string())
        );
        assert_eq!(
            split_match_datetime("2024-05-04T09:05"),
            ("2024-05-04".to_string(), "09:05".to_string())
        );
        assert_eq!(split_match_datetime("2024-05-04"), ("2024-05-04".to_string(), String::new()));
    }

    #[test]
    fn test_round_accepts_strings_and_floats() {
        assert_eq!(round_or_first(Some(&json!(2))), 2);
        assert_eq!(round_or_first(Some(&json!("3"))), 3);
        assert_eq!(round_or_first(Some(&json!(2.0))), 2);
    }

    #[test]
    fn test_round_falls_back_to_first() {
        assert_eq!(round_or_first(None), 1);
        assert_eq!(round_or_first(Some(&serde_json::Value::Null)), 1);
        assert_eq!(round_or_first(Some(&json!(0))), 1);
        assert_eq!(round_or_first(Some(&json!("fecha"))), 1);
    }
}
