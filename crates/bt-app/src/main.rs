use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4. Appliquer les overrides CLI
    if let Some(width) = cli.width {
        config.target_width = width;
    }
    if cli.invert {
        config.invert = true;
    }
    config.clamp_all();

    // 5. Convertir
    pipeline::convert(&cli.input, &cli.output_path(), &config)
}

/// Resolve config: fall back to defaults when the file is absent.
fn resolve_config(cli: &cli::Cli) -> Result<bt_core::config::ConvertConfig> {
    if cli.config.exists() {
        bt_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(bt_core::config::ConvertConfig::default())
    }
}
