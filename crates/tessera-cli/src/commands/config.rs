use anyhow::{Context, Result};
use tessera_config::{BoardConfig, ConfigLoader};
use tracing::{debug, info};

use crate::cli::BoardArgs;

/// Load the config file, if any, and apply command-line overrides on top.
pub fn effective_config(args: &BoardArgs) -> Result<BoardConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading board config");
            ConfigLoader::load_from_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => BoardConfig::default(),
    };

    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(gap) = args.gap {
        config.gap = gap;
    }
    if let Some(min_cell_width) = args.min_cell_width {
        config.min_cell_width = min_cell_width;
    }
    if args.responsive {
        config.responsive = true;
    }
    if let Some(title) = &args.title {
        config.title = Some(title.clone());
    }
    if let Some(overlay) = args.overlay {
        config.overlay = overlay.into();
    }

    let config = config.normalized();
    config.validate().context("invalid board options")?;
    debug!(?config, "effective config");
    Ok(config)
}

/// Execute config subcommand
pub fn execute(args: BoardArgs) -> Result<String> {
    let config = effective_config(&args)?;
    ConfigLoader::to_toml_string(&config).context("failed to serialize config")
}
