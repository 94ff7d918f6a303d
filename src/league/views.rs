//! View switching for the league page
//!
//! The match list, playoff section and tabs all work the same way: hide
//! every panel of a group, reset every button, then show one panel and
//! highlight its button. The chosen match and playoff views are remembered
//! across visits.

use std::str::FromStr;

use crate::league::errors::UiError;

pub const ACTIVE_BUTTON: &[&str] = &["bg-primary", "text-white"];
pub const INACTIVE_BUTTON: &[&str] = &["text-white/60", "hover:text-white"];
pub const ACTIVE_PLAYOFF_BUTTON: &[&str] = &["bg-primary", "text-white", "shadow-lg", "shadow-primary/20"];

pub const ACTIVE_ROUND_BUTTON: &[&str] = &["bg-primary", "text-white"];
pub const INACTIVE_ROUND_BUTTON: &[&str] = &["bg-white/5", "text-white/60", "hover:bg-white/10"];

/// Key/value store for view preferences (localStorage on the web)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// A group of mutually exclusive panels with one button each
pub trait ViewGroup: Copy + Eq + FromStr<Err = UiError> + 'static {
    const STORAGE_KEY: &'static str;
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
    fn panel_id(self) -> &'static str;
    fn button_id(self) -> &'static str;

    fn active_classes() -> &'static [&'static str] {
        ACTIVE_BUTTON
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchView {
    List,
    Matrix,
    Dates,
}

impl ViewGroup for MatchView {
    const STORAGE_KEY: &'static str = "matchView";
    const ALL: &'static [Self] = &[MatchView::List, MatchView::Matrix, MatchView::Dates];

    fn name(self) -> &'static str {
        match self {
            MatchView::List => "list",
            MatchView::Matrix => "matrix",
            MatchView::Dates => "dates",
        }
    }

    fn panel_id(self) -> &'static str {
        match self {
            MatchView::List => "matches-list-view",
            MatchView::Matrix => "matches-matrix-view",
            MatchView::Dates => "matches-dates-view",
        }
    }

    fn button_id(self) -> &'static str {
        match self {
            MatchView::List => "btn-view-list",
            MatchView::Matrix => "btn-view-matrix",
            MatchView::Dates => "btn-view-dates",
        }
    }
}

impl FromStr for MatchView {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(MatchView::List),
            "matrix" => Ok(MatchView::Matrix),
            "dates" => Ok(MatchView::Dates),
            other => Err(UiError::UnknownView(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoffView {
    List,
    Bracket,
}

impl ViewGroup for PlayoffView {
    const STORAGE_KEY: &'static str = "playoffView";
    const ALL: &'static [Self] = &[PlayoffView::List, PlayoffView::Bracket];

    fn name(self) -> &'static str {
        match self {
            PlayoffView::List => "list",
            PlayoffView::Bracket => "bracket",
        }
    }

    fn panel_id(self) -> &'static str {
        match self {
            PlayoffView::List => "playoff-list-view",
            PlayoffView::Bracket => "playoff-bracket-view",
        }
    }

    fn button_id(self) -> &'static str {
        match self {
            PlayoffView::List => "btn-playoff-list",
            PlayoffView::Bracket => "btn-playoff-bracket",
        }
    }

    fn active_classes() -> &'static [&'static str] {
        ACTIVE_PLAYOFF_BUTTON
    }
}

impl FromStr for PlayoffView {
    type Err = UiError;

    // Anything but "list" shows the bracket
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(PlayoffView::List),
            "" => Err(UiError::UnknownView(String::new())),
            _ => Ok(PlayoffView::Bracket),
        }
    }
}

/// DOM changes needed to switch a view group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSwitch {
    pub show_panel: &'static str,
    pub hide_panels: Vec<&'static str>,
    pub activate_button: &'static str,
    pub reset_buttons: Vec<&'static str>,
    pub active_classes: &'static [&'static str],
    pub inactive_classes: &'static [&'static str],
}

impl ViewSwitch {
    pub fn to<V: ViewGroup>(selected: V) -> Self {
        Self {
            show_panel: selected.panel_id(),
            hide_panels: V::ALL.iter().map(|view| view.panel_id()).collect(),
            activate_button: selected.button_id(),
            reset_buttons: V::ALL.iter().map(|view| view.button_id()).collect(),
            active_classes: V::active_classes(),
            inactive_classes: INACTIVE_BUTTON,
        }
    }
}

/// Switch to `view` and remember the choice
pub fn select_view<V: ViewGroup, S: PreferenceStore>(store: &S, view: V) -> ViewSwitch {
    store.set(V::STORAGE_KEY, view.name());
    ViewSwitch::to(view)
}

/// Previously chosen view, ignoring unknown stored values
pub fn restore_view<V: ViewGroup, S: PreferenceStore>(store: &S) -> Option<V> {
    let stored = store.get(V::STORAGE_KEY)?;
    match stored.parse::<V>() {
        Ok(view) => Some(view),
        Err(err) => {
            log::warn!("Ignoring stored {}: {}", V::STORAGE_KEY, err);
            None
        }
    }
}

/// Tab id carried by a location hash (`#standings` -> `standings`)
pub fn tab_from_hash(hash: &str) -> Option<&str> {
    let tab = hash.strip_prefix('#').unwrap_or(hash);
    (!tab.is_empty()).then_some(tab)
}

pub fn matrix_round_panel_id(round: u32) -> String {
    format!("matrix-round-{}", round)
}

pub fn matrix_round_button_id(round: u32) -> String {
    format!("btn-matrix-round-{}", round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_view_switch_resets_all_panels() {
        let switch = ViewSwitch::to(MatchView::Dates);
        assert_eq!(switch.show_panel, "matches-dates-view");
        assert_eq!(switch.hide_panels.len(), 3);
        assert_eq!(switch.activate_button, "btn-view-dates");
        assert_eq!(switch.active_classes, ACTIVE_BUTTON);
    }

    #[test]
    fn test_playoff_buttons_get_shadow() {
        let switch = ViewSwitch::to(PlayoffView::List);
        assert!(switch.active_classes.contains(&"shadow-primary/20"));
    }

    #[test]
    fn test_unknown_match_view_rejected() {
        assert!("grid".parse::<MatchView>().is_err());
        assert_eq!("bracket".parse::<PlayoffView>().unwrap(), PlayoffView::Bracket);
        assert_eq!("tree".parse::<PlayoffView>().unwrap(), PlayoffView::Bracket);
    }

    #[test]
    fn test_tab_from_hash() {
        assert_eq!(tab_from_hash("#standings"), Some("standings"));
        assert_eq!(tab_from_hash("#"), None);
        assert_eq!(tab_from_hash(""), None);
    }
}
