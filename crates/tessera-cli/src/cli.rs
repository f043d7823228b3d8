use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tessera_config::OverlayKind;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages, including every layout pass
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// How the modal is combined with the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverlayArg {
    /// Replace the grid with the positioned modal
    Sequential,
    /// Paint the modal over the grid
    Layered,
}

impl From<OverlayArg> for OverlayKind {
    fn from(arg: OverlayArg) -> Self {
        match arg {
            OverlayArg::Sequential => OverlayKind::Sequential,
            OverlayArg::Layered => OverlayKind::Layered,
        }
    }
}

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "tessera - render card grids for terminal dashboards")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one frame of a demo board to stdout
    Render(RenderArgs),

    /// Print the effective board configuration as TOML
    Config(BoardArgs),
}

/// Board configuration source plus per-option overrides
#[derive(Debug, Clone, Default, Args)]
pub struct BoardArgs {
    /// Config file (toml, json, yaml)
    #[arg(short = 'C', long, env = "TESSERA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fixed column count
    #[arg(long)]
    pub columns: Option<usize>,

    /// Spaces between cells and blank lines between rows
    #[arg(long)]
    pub gap: Option<usize>,

    /// Narrowest cell allowed in responsive mode
    #[arg(long)]
    pub min_cell_width: Option<usize>,

    /// Derive the column count from the viewport width
    #[arg(long)]
    pub responsive: bool,

    /// Title band text
    #[arg(long)]
    pub title: Option<String>,

    /// Modal placement mode
    #[arg(long, value_enum)]
    pub overlay: Option<OverlayArg>,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Viewport width in columns
    #[arg(long, default_value_t = 100)]
    pub width: u16,

    /// Viewport height in rows
    #[arg(long, default_value_t = 30)]
    pub height: u16,

    /// Number of demo cards
    #[arg(long, default_value_t = 4)]
    pub cards: usize,

    /// Comma-separated keys to replay before rendering (e.g. "right,down,enter,esc")
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Open a modal with this text on top of the grid
    #[arg(long)]
    pub modal: Option<String>,

    /// Deliver up to this many pending animation ticks before rendering
    #[arg(long, default_value_t = 0)]
    pub ticks: usize,

    /// Strip colors and use ASCII-safe borders for the normal state
    #[arg(long)]
    pub plain: bool,
}
