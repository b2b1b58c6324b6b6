//! Startup configuration for the native binary.

use clap::Parser;

use crate::game::SortOrder;

/// Tracing filter used when neither `--log-filter` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tic-Tac-Toe with move history and replay
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tictactoe")]
#[command(about = "Tic-Tac-Toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Tracing filter (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Initial window width
    #[arg(long, default_value_t = 720.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 520.0)]
    pub height: f32,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            descending: false,
            log_filter: None,
            width: 720.0,
            height: 520.0,
        }
    }
}

impl Cli {
    /// Initial move list order
    pub fn sort_order(&self) -> SortOrder {
        if self.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}
