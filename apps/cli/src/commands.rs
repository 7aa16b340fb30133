//! CLI definition, settings resolution, tracing setup, and the generate run.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use bpdocs_catalog::{BlueprintProvider, HttpBlueprintProvider, ProviderOptions, SnapshotProvider};
use bpdocs_core::pipeline::{
    GenerateConfig, GenerateOutcome, GenerateReport, ProgressReporter, generate,
};
use bpdocs_shared::{AppConfig, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// bpdocs — document a simulator's blueprint library.
///
/// With no arguments, queries the simulator at 127.0.0.1:2000 and writes
/// Docs/bp_library.md.
#[derive(Parser, Debug)]
#[command(
    name = "bpdocs",
    version,
    about = "Generate the blueprint library Markdown document from a running simulator.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file (defaults to ~/.bpdocs/bpdocs.toml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulator host.
    #[arg(long)]
    pub host: Option<String>,

    /// Simulator port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Catalog request timeout in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Blueprint wildcard filter.
    #[arg(long)]
    pub filter: Option<String>,

    /// Output Markdown file.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Read the catalog from a JSON snapshot instead of the simulator.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Fail if the output file is not up to date instead of writing it.
    ///
    /// An unreachable simulator still exits 0 in this mode, so the check
    /// only guards runs that actually reach the catalog.
    #[arg(long)]
    pub check: bool,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = ["bpdocs", "bpdocs_core", "bpdocs_catalog", "bpdocs_shared"]
        .map(|target| format!("{target}={level}"))
        .join(",");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Settings (flags > config file > defaults)
// ---------------------------------------------------------------------------

/// Runtime settings merged from the config file and CLI flags.
#[derive(Debug)]
struct Settings {
    provider: ProviderOptions,
    source: Option<PathBuf>,
    generate: GenerateConfig,
}

impl Settings {
    /// Load the config file named on the command line (or the default one) and merge flags.
    fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config_from(path)?,
            None => load_config()?,
        };
        Ok(Self::merge(cli, config))
    }

    fn merge(cli: &Cli, config: AppConfig) -> Self {
        let simulator = config.simulator;
        Self {
            provider: ProviderOptions {
                host: cli.host.clone().unwrap_or(simulator.host),
                port: cli.port.unwrap_or(simulator.port),
                timeout: Duration::from_millis(cli.timeout_ms.unwrap_or(simulator.timeout_ms)),
            },
            source: cli.source.clone(),
            generate: GenerateConfig {
                output_path: cli.out.clone().unwrap_or(config.output.path),
                filter: cli.filter.clone().unwrap_or(simulator.filter),
                check: cli.check,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Generate the document.
///
/// An unreachable simulator prints a diagnostic and still exits 0 so that
/// automated doc builds without a simulator do not fail. Any other error
/// exits non-zero.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;

    println!("Generating API blueprint documentation...");

    let result = match &settings.source {
        Some(path) => run_with(&settings, &SnapshotProvider::new(path)).await,
        None => {
            let provider = HttpBlueprintProvider::new(&settings.provider)?;
            run_with(&settings, &provider).await
        }
    };

    match result {
        Ok(report) => finish(&report),
        Err(e) if e.is_connection() => {
            warn!(error = %e, "blueprint provider unreachable, no document generated");
            print_connection_banner();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn run_with<P: BlueprintProvider>(
    settings: &Settings,
    provider: &P,
) -> bpdocs_shared::Result<GenerateReport> {
    info!(
        source = %provider.describe(),
        out = %settings.generate.output_path.display(),
        check = settings.generate.check,
        "generating blueprint library"
    );

    let reporter = CliProgress::new();
    let result = generate(&settings.generate, provider, &reporter).await;
    if result.is_err() {
        reporter.clear();
    }
    result
}

fn finish(report: &GenerateReport) -> Result<()> {
    let path = report.output_path.display();
    match report.outcome {
        GenerateOutcome::Written => {
            println!();
            println!("  Blueprint library written!");
            println!("  Path:       {path}");
            println!("  Categories: {}", report.category_count);
            println!("  Blueprints: {}", report.blueprint_count);
            println!("  Attributes: {}", report.attribute_count);
            println!("  Time:       {:.1}s", report.elapsed.as_secs_f64());
            println!();
            println!("Done!");
            Ok(())
        }
        GenerateOutcome::UpToDate => {
            println!("{path} is up to date");
            Ok(())
        }
        GenerateOutcome::Stale => Err(eyre!(
            "{path} is out of date with the blueprint catalog; rerun without --check to regenerate"
        )),
    }
}

fn print_connection_banner() {
    println!("\n  [ERROR] Can't establish connection with the simulator");
    println!(" .---------------------------------------------------.");
    println!("  |       Make sure the simulator is connected!       |");
    println!("  '---------------------------------------------------'\n");
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }

    fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _report: &GenerateReport) {
        self.spinner.finish_and_clear();
    }
}
