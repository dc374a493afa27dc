//! CalmCare Wellness - terminal dashboard for patients and providers
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use calmcare_app::config;
use clap::Parser;
use tracing::info;

/// CalmCare Wellness - a terminal dashboard for patients and providers
#[derive(Parser, Debug)]
#[command(name = "calmcare", version)]
#[command(about = "A calm terminal dashboard for patients and providers", long_about = None)]
struct Args {
    /// Path to open first, e.g. /patient/sleep (overrides the config file)
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the routing report as JSON and exit (no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let Some(path) = args.config.clone().or_else(config::default_config_path) else {
            eprintln!("No config directory on this system; pass --config <FILE>");
            std::process::exit(1);
        };
        if config::init_config_file(&path)? {
            println!("Wrote {}", path.display());
        } else {
            println!("{} already exists, left untouched", path.display());
        }
        return Ok(());
    }

    calmcare_core::logging::init()?;

    // An explicitly requested file must load; the default location falls back
    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings(),
    };
    if let Some(route) = args.route {
        settings.behavior.start_route = route;
    }
    info!(
        "Starting CalmCare at {:?} (icons: {})",
        settings.behavior.start_route, settings.ui.icons
    );

    if args.headless {
        calmcare::run_headless(&settings)?;
    } else {
        calmcare::run(settings).await?;
    }
    Ok(())
}
