//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum GameMode {
    /// Two people sharing the keyboard.
    #[serde(rename = "pvp")]
    #[strum(serialize = "pvp", ascii_case_insensitive)]
    PlayerVsPlayer,
    /// Human as X against the heuristic as O.
    #[default]
    #[serde(rename = "pvc")]
    #[strum(serialize = "pvc", ascii_case_insensitive)]
    PlayerVsMachine,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Local (1v1)",
            GameMode::PlayerVsMachine => "Against the machine",
        }
    }

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::PlayerVsPlayer => GameMode::PlayerVsMachine,
            GameMode::PlayerVsMachine => GameMode::PlayerVsPlayer,
        }
    }

    /// Whether the heuristic plays a side in this mode.
    pub fn has_machine(self) -> bool {
        matches!(self, GameMode::PlayerVsMachine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_names() {
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::PlayerVsPlayer));
        assert_eq!("PVC".parse::<GameMode>(), Ok(GameMode::PlayerVsMachine));
        assert!("solo".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_toggle_and_default() {
        assert_eq!(GameMode::default(), GameMode::PlayerVsMachine);
        assert_eq!(GameMode::default().toggle(), GameMode::PlayerVsPlayer);
        assert!(!GameMode::PlayerVsPlayer.has_machine());
    }

    #[test]
    fn test_short_name_round_trip() {
        let name: &'static str = GameMode::PlayerVsPlayer.into();
        assert_eq!(name, "pvp");
    }
}
