//! Run configuration: defaults, optional `~/.mazechase/config.json`, and
//! command-line overrides.

use crate::core::constants::{
    COINS_PER_LEVEL, CONFIG_FILE_NAME, ENEMIES_PER_LEVEL, FRAME_INTERVAL_MS,
};
use crate::game::{Difficulty, Rules};
use crate::pathfinding::OpenSetKind;
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub coins_per_level: usize,
    pub enemies_per_level: usize,
    /// Real-time delay between ticks.
    pub frame_interval_ms: u64,
    /// Directory of `level<N>.txt` files; built-in levels when unset.
    pub levels_dir: Option<PathBuf>,
    /// Placement seed; derived from the clock when unset.
    pub seed: Option<u64>,
    pub open_set: OpenSetKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            coins_per_level: COINS_PER_LEVEL,
            enemies_per_level: ENEMIES_PER_LEVEL,
            frame_interval_ms: FRAME_INTERVAL_MS,
            levels_dir: None,
            seed: None,
            open_set: OpenSetKind::default(),
        }
    }
}

impl GameConfig {
    /// Defaults overlaid with `~/.mazechase/config.json` when present.
    pub fn load() -> Self {
        match data_path(CONFIG_FILE_NAME) {
            Ok(path) => load_json_or_default(&path),
            Err(_) => Self::default(),
        }
    }

    /// Writes this configuration to `~/.mazechase/config.json`.
    pub fn save(&self) -> io::Result<PathBuf> {
        let path = data_path(CONFIG_FILE_NAME)?;
        save_json(&path, self)?;
        Ok(path)
    }

    pub fn rules(&self) -> Rules {
        Rules {
            enemy_delay: self.difficulty.enemy_delay(),
            coins_per_level: self.coins_per_level,
            enemies_per_level: self.enemies_per_level,
            open_set: self.open_set,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// The configured seed, or one taken from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let now = chrono::Utc::now();
            now.timestamp_nanos_opt()
                .unwrap_or_else(|| now.timestamp_micros()) as u64
        })
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(GameConfig),
    /// Persist the merged configuration instead of playing.
    SaveConfig(GameConfig),
    Version,
    Help,
}

pub const USAGE: &str = "\
Usage: mazechase [options]

Options:
  --difficulty <name>  easy, medium, hard, very-hard or nightmare
  --coins <n>          Coins placed on each level
  --enemies <n>        Enemies placed on each level
  --levels <dir>       Load level<N>.txt files from a directory
  --seed <n>           Seed for coin and enemy placement
  --frame-ms <n>       Milliseconds between ticks
  --heap               Use the binary-heap open set for pathfinding
  --save-config        Save these options as the defaults and exit
  --version            Show version information
  --help               Show this help message

Controls: W/A/S/D or arrow keys to move, Q or Esc to quit.";

/// Applies command-line arguments (without the program name) to `config`.
pub fn parse_args(args: &[String], mut config: GameConfig) -> Result<CliCommand, String> {
    let mut save = false;
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let mut value = || take_value(args, &mut i, flag);
        match flag {
            "--difficulty" | "-d" => {
                let name = value()?;
                config.difficulty = Difficulty::from_name(name)
                    .ok_or_else(|| format!("unknown difficulty: {}", name))?;
            }
            "--coins" => config.coins_per_level = parse_number(flag, value()?)?,
            "--enemies" => config.enemies_per_level = parse_number(flag, value()?)?,
            "--frame-ms" => config.frame_interval_ms = parse_number(flag, value()?)?,
            "--seed" => config.seed = Some(parse_number(flag, value()?)?),
            "--levels" => config.levels_dir = Some(PathBuf::from(value()?)),
            "--heap" => config.open_set = OpenSetKind::BinaryHeap,
            "--save-config" => save = true,
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    if save {
        Ok(CliCommand::SaveConfig(config))
    } else {
        Ok(CliCommand::Play(config))
    }
}

/// Advances past `flag` and returns the value that follows it.
fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("{} expects a number, got {:?}", flag, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.coins_per_level, 10);
        assert_eq!(config.enemies_per_level, 1);
        assert_eq!(config.frame_interval(), Duration::from_millis(50));
        assert_eq!(config.rules().enemy_delay, 3);
    }

    #[test]
    fn test_no_args_plays_with_base_config() {
        let base = GameConfig::default();
        assert_eq!(parse_args(&[], base.clone()), Ok(CliCommand::Play(base)));
    }

    #[test]
    fn test_flags_override_config() {
        let parsed = parse_args(
            &args(&[
                "--difficulty",
                "nightmare",
                "--coins",
                "4",
                "--enemies",
                "3",
                "--seed",
                "77",
                "--levels",
                "maps",
                "--heap",
            ]),
            GameConfig::default(),
        )
        .unwrap();
        let CliCommand::Play(config) = parsed else {
            panic!("expected Play, got {:?}", parsed);
        };
        assert_eq!(config.difficulty, Difficulty::Nightmare);
        assert_eq!(config.coins_per_level, 4);
        assert_eq!(config.enemies_per_level, 3);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.resolve_seed(), 77);
        assert_eq!(config.levels_dir, Some(PathBuf::from("maps")));
        assert_eq!(config.open_set, OpenSetKind::BinaryHeap);
        assert_eq!(config.rules().enemy_delay, 1);
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert!(parse_args(&args(&["--coins"]), GameConfig::default()).is_err());
        assert!(parse_args(&args(&["--coins", "many"]), GameConfig::default()).is_err());
        assert!(parse_args(&args(&["--difficulty", "brutal"]), GameConfig::default()).is_err());
        assert!(parse_args(&args(&["--fly"]), GameConfig::default()).is_err());
    }

    #[test]
    fn test_version_and_help() {
        assert_eq!(
            parse_args(&args(&["--version"]), GameConfig::default()),
            Ok(CliCommand::Version)
        );
        assert_eq!(
            parse_args(&args(&["-h"]), GameConfig::default()),
            Ok(CliCommand::Help)
        );
    }

    #[test]
    fn test_save_config_carries_overrides() {
        let parsed = parse_args(
            &args(&["--save-config", "--difficulty", "easy"]),
            GameConfig::default(),
        )
        .unwrap();
        let CliCommand::SaveConfig(config) = parsed else {
            panic!("expected SaveConfig, got {:?}", parsed);
        };
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"difficulty": "Easy", "coins_per_level": 3}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.coins_per_level, 3);
        assert_eq!(config.enemies_per_level, 1);
        assert_eq!(config.open_set, OpenSetKind::LinearScan);
    }
}
