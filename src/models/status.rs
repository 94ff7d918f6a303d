//! Report export view state
//!
//! The exporter never touches the trigger button directly. It publishes an
//! `ExportStatus` and whatever renders the button observes it.

use serde::{Deserialize, Serialize};

/// Lifecycle of one export invocation as seen by the trigger control
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum ExportStatus {
    #[default]
    Idle,
    Rendering,
    Delivering,
    Done,
    Error(String),
}

pub const IDLE_LABEL: &str = r#"<i class="fas fa-download mr-2"></i>Descargar Imagen"#;
pub const RENDERING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i>Generando..."#;
pub const DELIVERING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin mr-2"></i>Compartiendo..."#;
pub const ERROR_LABEL: &str = r#"<i class="fas fa-exclamation-triangle mr-2"></i>Error"#;

impl ExportStatus {
    /// True while an export owns the control
    pub fn is_busy(&self) -> bool {
        matches!(self, ExportStatus::Rendering | ExportStatus::Delivering)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ExportStatus::Error(_))
    }

    /// Inner HTML of the trigger control for this state
    ///
    /// `Done` shows the idle label again so the button reads as ready.
    pub fn label_html(&self) -> &'static str {
        match self {
            ExportStatus::Idle | ExportStatus::Done => IDLE_LABEL,
            ExportStatus::Rendering => RENDERING_LABEL,
            ExportStatus::Delivering => DELIVERING_LABEL,
            ExportStatus::Error(_) => ERROR_LABEL,
        }
    }
}

/// How the report reached the user
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", content = "reason", rename_all = "camelCase")]
pub enum DeliveryOutcome {
    /// The native share sheet completed
    Shared,
    /// The user dismissed the share sheet
    ShareCancelled,
    /// A browser download was triggered
    Downloaded,
    /// Rendering or delivery failed; the reason was shown to the user
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, DeliveryOutcome::Failed(_))
    }
}

/// Result of one native share attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_states() {
        assert!(!ExportStatus::Idle.is_busy());
        assert!(ExportStatus::Rendering.is_busy());
        assert!(ExportStatus::Delivering.is_busy());
        assert!(!ExportStatus::Done.is_busy());
        assert!(!ExportStatus::Error("boom".into()).is_busy());
    }

    #[test]
    fn test_done_reads_like_idle() {
        assert_eq!(ExportStatus::Done.label_html(), ExportStatus::Idle.label_html());
        assert_ne!(ExportStatus::Error("x".into()).label_html(), IDLE_LABEL);
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_string(&DeliveryOutcome::Failed("no canvas".into())).unwrap();
        assert_eq!(json, r#"{"outcome":"failed","reason":"no canvas"}"#);
        let json = serde_json::to_string(&DeliveryOutcome::ShareCancelled).unwrap();
        assert_eq!(json, r#"{"outcome":"shareCancelled"}"#);
    }
}
