//! Page configuration
//!
//! The server template used to scatter these values over `window.*`
//! globals. They now arrive as one object through `initPage(config)` and
//! are handed to the code that needs them explicitly.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::league::{PlayerOption, TeamInfo};

/// Everything the league page template knows about the current page
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Display name of the league, used for the exported file name
    pub league_name: Option<String>,

    /// Same-origin endpoint that streams back external images (`?url=...`)
    pub proxy_image_url: Option<String>,

    /// Token sent as `X-CSRFToken` on match updates
    pub csrf_token: Option<String>,

    /// Endpoint receiving score and cost updates
    pub update_match_costs_url: Option<String>,

    /// Team id -> display name
    pub teams_map: HashMap<String, String>,

    /// Team id -> (opponent id -> matches played)
    pub teams_history: HashMap<String, HashMap<String, u32>>,

    /// Team id -> header data for the matrix modal
    pub teams_data: HashMap<String, TeamInfo>,

    /// Team id -> players offered by the stats form
    pub players_by_team: HashMap<String, Vec<PlayerOption>>,
}

impl PageConfig {
    /// Build the exporter configuration for a page served from `page_origin`
    pub fn export_config(&self, page_origin: &str) -> ExportConfig {
        ExportConfig {
            league_name: self.league_name.clone(),
            proxy_image_url: self.proxy_image_url.clone(),
            page_origin: page_origin.to_string(),
        }
    }
}

/// Configuration consumed by the report exporter
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportConfig {
    pub league_name: Option<String>,
    pub proxy_image_url: Option<String>,
    /// Serialized origin of the page, e.g. `https://ligapro.app`
    pub page_origin: String,
}

/// Name used when the page did not provide one
pub const FALLBACK_LEAGUE_NAME: &str = "liga";

impl ExportConfig {
    pub fn new(page_origin: impl Into<String>) -> Self {
        Self {
            page_origin: page_origin.into(),
            ..Self::default()
        }
    }

    pub fn with_league_name(mut self, name: impl Into<String>) -> Self {
        self.league_name = Some(name.into());
        self
    }

    pub fn with_proxy(mut self, proxy_image_url: impl Into<String>) -> Self {
        self.proxy_image_url = Some(proxy_image_url.into());
        self
    }

    /// File name of the exported report: `reporte-<league>.png`
    pub fn report_filename(&self) -> String {
        let name = self
            .league_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_LEAGUE_NAME);
        format!("reporte-{}.png", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename_uses_league_name() {
        let config = ExportConfig::new("https://ligapro.app").with_league_name("Liga Norte");
        assert_eq!(config.report_filename(), "reporte-Liga Norte.png");
    }

    #[test]
    fn test_report_filename_without_name() {
        let config = ExportConfig::new("https://ligapro.app");
        assert_eq!(config.report_filename(), "reporte-liga.png");

        let blank = config.with_league_name("   ");
        assert_eq!(blank.report_filename(), "reporte-liga.png");
    }

    #[test]
    fn test_page_config_defaults_missing_fields() {
        let config: PageConfig = serde_json::from_str(r#"{"leagueName": "Copa"}"#).unwrap();
        assert_eq!(config.league_name.as_deref(), Some("Copa"));
        assert!(config.proxy_image_url.is_none());
        assert!(config.teams_map.is_empty());

        let export = config.export_config("https://ligapro.app");
        assert_eq!(export.page_origin, "https://ligapro.app");
        assert_eq!(export.report_filename(), "reporte-Copa.png");
    }
}
