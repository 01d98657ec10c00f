use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use picZoom::app::settings::{self, config_dirs};
use picZoom::platform;
use picZoom::runner;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SimulatedChoice {
    Accept,
    Dismiss,
}

#[derive(Parser, Debug)]
#[command(name = "picZoom", version, about = "Squeeze your images")]
struct Cli {
    /// Color theme: "dark" or "light".
    #[arg(long)]
    theme: Option<String>,

    /// Skip the background animation.
    #[arg(long)]
    reduced_motion: bool,

    /// Draw one static frame and exit (also implied by a non-tty stdout).
    #[arg(long)]
    prerender: bool,

    /// Wire up a fake install platform that prompts and then accepts or
    /// dismisses. Without this the install button never appears.
    #[arg(long, value_enum)]
    simulate_install: Option<SimulatedChoice>,
}

/// Logs go to a file in the cache dir; stdout belongs to the TUI.
fn init_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    tracing_log::LogTracer::init().context("log bridge init failed")?;
    let dir = config_dirs::user_cache_dir().context("no cache directory")?;
    std::fs::create_dir_all(&dir)?;
    let file = tracing_appender::rolling::never(dir, "picZoom.log");
    let (writer, guard) = tracing_appender::non_blocking(file);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("subscriber init failed")?;
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging()?;

    let mut settings = settings::load_settings().unwrap_or_default();
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if cli.reduced_motion {
        settings.reduced_motion = true;
    }

    let install_rx = match cli.simulate_install {
        Some(choice) => platform::simulated_platform(choice == SimulatedChoice::Accept),
        None => platform::null_platform(),
    };

    match runner::run_app(settings, install_rx, cli.prerender)? {
        Some(file) => {
            println!(
                "selected {} ({} bytes, {})",
                file.name,
                file.bytes.len(),
                file.content_type.as_deref().unwrap_or("unknown type"),
            );
        }
        None => tracing::info!("exited without selecting an image"),
    }
    Ok(())
}
