//! League DTOs read by the page scripts

use serde::{Deserialize, Serialize};

/// Header data of a team shown in the matrix modal
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TeamInfo {
    pub name: String,
    #[serde(default)]
    pub shield_url: Option<String>,
}

/// A player entry of the stats form picker
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerOption {
    pub id: serde_json::Value,
    pub name: String,
}

/// The match stored in a matrix cell, if any
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MatrixMatch {
    pub id: serde_json::Value,
    /// `YYYY-MM-DDTHH:MM:SS`
    pub match_date_iso: Option<String>,
    pub court_id: Option<serde_json::Value>,
    pub home_score: Option<serde_json::Value>,
    pub away_score: Option<serde_json::Value>,
}

/// Payload of a clicked cell in the home/away match matrix
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatrixCell {
    pub home_id: serde_json::Value,
    pub away_id: serde_json::Value,
    /// Whatever the template rendered: `2`, `"3"`, `2.0` or null
    #[serde(default)]
    pub round: Option<serde_json::Value>,
    #[serde(default, rename = "match")]
    pub existing: Option<MatrixMatch>,
}

/// Render an id-ish JSON value the way an input's `value` would show it
pub fn json_to_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_cell_from_page_json() {
        let cell: MatrixCell = serde_json::from_str(
            r#"{"home_id": 3, "away_id": "7", "round": 2,
                "match": {"id": 41, "match_date_iso": "2024-05-04T18:30:00", "home_score": 2}}"#,
        )
        .unwrap();

        assert_eq!(json_to_field(&cell.home_id), "3");
        assert_eq!(json_to_field(&cell.away_id), "7");
        let existing = cell.existing.unwrap();
        assert_eq!(json_to_field(&existing.id), "41");
        assert!(existing.away_score.is_none());
    }
}
