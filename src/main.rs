mod config;
mod host;
mod install;
mod paths;
mod version;

use crate::config::{OutputFormat, SmlocateConfig, load_cfg, save_cfg};
use crate::host::{HostEnvironment, SystemHost};
use crate::install::{InstallationInfo, resolve, score_file_exists};

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Locate a StepMania installation's everyone.dance.txt score file
#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
struct Args {
    /// StepMania install directory (defaults to the saved one)
    stepmania_dir: Option<String>,

    /// Platform identifier to resolve for: win32, linux or darwin
    #[arg(long)]
    platform: Option<String>,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "text")]
    json: bool,

    /// Print the result as plain text
    #[arg(long)]
    text: bool,

    /// Remember the directory and platform for later runs
    #[arg(long)]
    save: bool,

    /// Print version
    #[arg(short = 'V', long)]
    version: bool,
}

/// Directory, platform and output format for one run
#[derive(Debug, PartialEq)]
struct Settings {
    stepmania_dir: String,
    platform: String,
    output: OutputFormat,
}

/// What gets printed for a lookup
#[derive(Serialize, Debug)]
struct Report<'a> {
    #[serde(flatten)]
    info: &'a InstallationInfo,
    score_file_exists: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.version {
        println!("smlocate {}", version::current_version());
        return Ok(());
    }

    let host = SystemHost::new();
    let saved = load_cfg();

    let settings = effective_settings(&args, &saved, &host);
    tracing::debug!(
        "smlocate {} on {}",
        version::current_version(),
        settings.platform
    );

    let info = resolve(&host, &settings.stepmania_dir, &settings.platform);
    let report = Report {
        info: &info,
        score_file_exists: score_file_exists(&host, &info),
    };

    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report)),
    }

    if args.save {
        let config = settings_to_save(&args, &saved, settings);
        save_cfg(&config).map_err(|e| anyhow!("Failed to save settings: {}", e))?;
    }

    Ok(())
}

/// Command line first, then saved settings, then the host
fn effective_settings(
    args: &Args,
    saved: &SmlocateConfig,
    host: &dyn HostEnvironment,
) -> Settings {
    let stepmania_dir = args
        .stepmania_dir
        .clone()
        .unwrap_or_else(|| saved.stepmania_dir.clone());
    let platform = args
        .platform
        .clone()
        .or_else(|| saved.platform.clone())
        .unwrap_or_else(|| host.platform());
    let output = if args.json {
        OutputFormat::Json
    } else if args.text {
        OutputFormat::Text
    } else {
        saved.output
    };

    Settings {
        stepmania_dir,
        platform,
        output,
    }
}

/// Config written by `--save`
///
/// A platform only detected from the host is not pinned, so the saved
/// directory keeps working when settings move to another machine.
fn settings_to_save(args: &Args, saved: &SmlocateConfig, settings: Settings) -> SmlocateConfig {
    SmlocateConfig {
        stepmania_dir: settings.stepmania_dir,
        platform: args.platform.clone().or_else(|| saved.platform.clone()),
        output: settings.output,
    }
}

fn render_text(report: &Report) -> String {
    let info = report.info;
    let score_file = match &info.score_file {
        Some(path) => format!(
            "{}{}",
            path.display(),
            if report.score_file_exists { "" } else { " (missing)" }
        ),
        None => "unknown".to_string(),
    };

    format!(
        "Platform:    {}\nVariant:     {}\nInstall dir: {}\nPortable:    {}\nScore file:  {}\n",
        info.platform,
        info.variant.name(),
        info.variant_dir.display(),
        if info.is_portable { "yes" } else { "no" },
        score_file
    )
}
