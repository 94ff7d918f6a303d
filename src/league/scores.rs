//! Match score and cost updates
//!
//! Scores and referee fees are edited inline and saved one field at a time.
//! The server owns the numbers; this only shapes the request and reads the
//! reply.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::league::errors::UiError;
use crate::league::totals::parse_int;

/// Which inline editor produced the update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateKind {
    Score,
    Cost,
}

impl UpdateKind {
    /// Prefix of the alert shown when the server rejects the update
    pub fn alert_prefix(self) -> &'static str {
        match self {
            UpdateKind::Score => "Error al guardar resultado: ",
            UpdateKind::Cost => "Error al guardar: ",
        }
    }
}

/// One edited field of one match
#[derive(Clone, Debug, PartialEq)]
pub struct MatchUpdate {
    pub match_id: Value,
    pub field: String,
    pub value: Value,
}

impl MatchUpdate {
    pub fn new(match_id: Value, field: impl Into<String>, value: Value) -> Self {
        Self {
            match_id,
            field: field.into(),
            value,
        }
    }

    /// JSON body: `{"match_id": <id>, "<field>": <value>}`
    pub fn to_json(&self) -> Result<String, UiError> {
        let mut body = Map::new();
        body.insert("match_id".to_string(), self.match_id.clone());
        body.insert(self.field.clone(), self.value.clone());
        Ok(serde_json::to_string(&Value::Object(body))?)
    }
}

#[derive(Deserialize, Debug, Default)]
struct UpdateReply {
    #[serde(default)]
    error: Option<String>,
}

/// Error message carried by a server reply, if any
pub fn reply_error(body: &str) -> Result<Option<String>, UiError> {
    let reply: UpdateReply = serde_json::from_str(body)?;
    Ok(reply.error.filter(|error| !error.is_empty()))
}

/// Corrected highlight start for the `h-start`/`h-end` range inputs
///
/// Start may not pass end and may not drop below 1. `None` means the
/// input is fine as typed.
pub fn clamp_highlight_start(start: &str, end: &str) -> Option<i64> {
    let start = parse_int(start)?;
    let mut adjusted = None;
    if let Some(end) = parse_int(end) {
        if start > end {
            adjusted = Some(end);
        }
    }
    if start < 1 {
        adjusted = Some(1);
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_body_uses_field_name() {
        let update = MatchUpdate::new(json!(12), "referee_cost_home", json!("300"));
        let body: Value = serde_json::from_str(&update.to_json().unwrap()).unwrap();
        assert_eq!(body, json!({"match_id": 12, "referee_cost_home": "300"}));
    }

    #[test]
    fn test_reply_error() {
        assert_eq!(reply_error(r#"{"success": true}"#).unwrap(), None);
        assert_eq!(
            reply_error(r#"{"error": "Partido no encontrado"}"#).unwrap().as_deref(),
            Some("Partido no encontrado")
        );
        assert!(reply_error("<html>").is_err());
    }

    #[test]
    fn test_clamp_highlight_start() {
        assert_eq!(clamp_highlight_start("3", "5"), None);
        assert_eq!(clamp_highlight_start("7", "5"), Some(5));
        assert_eq!(clamp_highlight_start("0", "5"), Some(1));
        assert_eq!(clamp_highlight_start("-2", "-5"), Some(1));
        assert_eq!(clamp_highlight_start("", "5"), None);
    }
}
