use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{error, info};

use pie_ui::{config::AppConfig, logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Expense pie chart.
///
/// Opens a window with four expense fields and draws a pie chart with a
/// legend once they are filled in.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML file overriding window size, captions and chart layout.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `pie_core=trace`.
    /// Falls back to `RUST_LOG`, then `info`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    info!(width = config.window.width, height = config.window.height, "starting");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);

            if let Err(error) = open_main_window(config, cx) {
                error!(?error, "cannot open main window");
                cx.quit();
            }
        });

    Ok(())
}
