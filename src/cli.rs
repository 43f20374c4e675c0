//! Command-line arguments.

use chequer_core::GameConfig;
use clap::{Parser, ValueEnum};

/// Sets up a chess game on any board size, replays moves given in
/// coordinate notation and prints the board, its FEN and the game status.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Preset board and starting position.
    #[arg(long, value_enum, default_value_t = Variant::Standard)]
    pub variant: Variant,

    /// Starting position in FEN, overriding the variant's.
    #[arg(long)]
    pub fen: Option<String>,

    /// Number of files, overriding the variant's.
    #[arg(long)]
    pub files: Option<usize>,

    /// Number of ranks, overriding the variant's.
    #[arg(long)]
    pub ranks: Option<usize>,

    /// Moves to play in order, e.g. `e2e4` or `e7e8q`.
    pub moves: Vec<String>,
}

/// Known board presets.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Standard 8x8 chess.
    Standard,
    /// Silverman's 4x4 minichess.
    #[value(name = "silverman4x4")]
    Silverman4x4,
    /// Silverman's 4x5 minichess.
    #[value(name = "silverman4x5")]
    Silverman4x5,
}

impl Args {
    /// The game to start: the variant preset with any explicit `--fen`,
    /// `--files` and `--ranks` applied on top.
    pub fn config(&self) -> GameConfig {
        let mut config = match self.variant {
            Variant::Standard => GameConfig::default(),
            Variant::Silverman4x4 => GameConfig::silverman_4x4(),
            Variant::Silverman4x5 => GameConfig::silverman_4x5(),
        };
        if let Some(fen) = &self.fen {
            config.fen.clone_from(fen);
        }
        if let Some(files) = self.files {
            config.files = files;
        }
        if let Some(ranks) = self.ranks {
            config.ranks = ranks;
        }
        config
    }
}
