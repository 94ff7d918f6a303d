//! Head-to-head history for the match form
//!
//! Picking a team in the match form shows who it has already played, so
//! the admin does not schedule the same pairing twice by mistake.

use crate::models::{json_to_field, PageConfig};

pub const NO_HISTORY: &str = "Sin partidos previos.";
pub const UNKNOWN_TEAM: &str = "Desconocido";
pub const PLAYER_PLACEHOLDER: &str = "Seleccionar Jugador";

/// Text shown under a team picker
pub fn describe_history(team_id: &str, config: &PageConfig) -> String {
    if team_id.is_empty() {
        return String::new();
    }

    let history = match config.teams_history.get(team_id) {
        Some(history) if !history.is_empty() => history,
        _ => return NO_HISTORY.to_string(),
    };

    let mut opponents: Vec<(&String, &u32)> = history.iter().collect();
    opponents.sort_by(|(a, _), (b, _)| opponent_order(a).cmp(&opponent_order(b)));

    let played: Vec<String> = opponents
        .into_iter()
        .map(|(opponent_id, count)| {
            let name = config
                .teams_map
                .get(opponent_id.as_str())
                .map(String::as_str)
                .unwrap_or(UNKNOWN_TEAM);
            if *count > 1 {
                format!("{} x{}", name, count)
            } else {
                name.to_string()
            }
        })
        .collect();

    format!("Ya jugó contra: {}", played.join(", "))
}

// Numeric ids first in numeric order, then anything else alphabetically
fn opponent_order(id: &str) -> (u8, u64, &str) {
    match id.parse::<u64>() {
        Ok(n) => (0, n, id),
        Err(_) => (1, 0, id),
    }
}

/// `(value, label)` pairs for a team's player picker, placeholder first
pub fn player_options(team_id: &str, config: &PageConfig) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), PLAYER_PLACEHOLDER.to_string())];
    if team_id.is_empty() {
        return options;
    }
    if let Some(players) = config.players_by_team.get(team_id) {
        options.extend(
            players
                .iter()
                .map(|player| (json_to_field(&player.id), player.name.clone())),
        );
    }
    options
}
