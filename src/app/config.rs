use std::path::PathBuf;

use clap::Parser;

use crate::{
    engine::{DEFAULT_WIN_THRESHOLD, check_threshold},
    error::GridError,
};

/// Board edge length used by the terminal game.
pub const BOARD_SIZE: usize = 4;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Slide tiles, merge equal numbers, reach 2048")]
pub struct Config {
    /// Tile value that wins the game (power of two, at least 4)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WIN_THRESHOLD)]
    pub win_threshold: u32,

    /// Seed for tile spawning; random when omitted
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// File the best score is kept in
    #[arg(long, value_name = "PATH", default_value = ".tile2048_best")]
    pub best_score_file: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<(), GridError> {
        check_threshold(self.win_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["tile2048"]).unwrap();
        assert_eq!(config.win_threshold, 2048);
        assert_eq!(config.seed, None);
        assert_eq!(config.best_score_file, PathBuf::from(".tile2048_best"));
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_flags() {
        let config = Config::try_parse_from([
            "tile2048",
            "--win-threshold",
            "512",
            "--seed",
            "42",
            "--best-score-file",
            "/tmp/best",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(config.win_threshold, 512);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.best_score_file, PathBuf::from("/tmp/best"));
        assert_eq!(config.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn threshold_must_be_power_of_two() {
        let config = Config::try_parse_from(["tile2048", "--win-threshold", "1000"]).unwrap();
        assert_eq!(config.validate(), Err(GridError::InvalidThreshold(1000)));
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
