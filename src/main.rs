//! Tasklist - A terminal to-do list with inline editing.
//!
//! # Usage
//!
//! ```bash
//! tasklist
//! tasklist --task "Buy milk" --task "Walk dog"
//! tasklist --theme light --save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tasklist::app::App;
use tasklist::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use tasklist::perf;

/// A terminal to-do list with inline editing
#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about, long_about = None)]
struct Cli {
    /// Start the session with this task (repeatable; not saved)
    #[arg(short, long = "task", value_name = "TEXT")]
    tasks: Vec<String>,

    /// Color palette (light or dark terminal background)
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Log how long each update step takes
    #[arg(long)]
    perf: bool,

    /// Write detailed render/event debug events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    // Initialize logging; `--perf` also lets update timings through.
    let filter = perf::log_filter(
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::WARN.into()),
        effective.perf,
    )?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    tracing::debug!(?effective, "effective flags");

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("TASKLIST_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        let shown = render_debug_log_path
            .as_ref()
            .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string());
        tracing::warn!(path = %shown, %err, "failed to initialize render debug log");
    }

    let theme = effective.theme.unwrap_or(ThemeMode::Auto).resolve();

    let mut app = App::new()
        .with_tasks(cli.tasks)
        .with_mouse(!effective.no_mouse)
        .with_light_theme(theme == ThemeMode::Light)
        .with_config_paths(
            Some(global_path),
            if local_path.exists() {
                Some(local_path)
            } else {
                None
            },
        );

    app.run().context("Application error")
}
