//! Setgen - main test-set script generator
//!
//! Scans a directory of `MODEL_NAME.Test.xxx.xml` test scripts and writes
//! one `MODEL_NAME.xml` per model, including every test script of that
//! model between a header and a footer template.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any failure (unreadable template, unreadable origin directory,
//!       failed write, invalid arguments or config)

mod cli;
mod config;
mod error;
mod models;
mod render;
mod scanner;
mod templates;

use anyhow::{bail, Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use indicatif::{ProgressBar, ProgressStyle};
use models::{Job, RunSummary};
use render::IncludeStyle;
use scanner::{DirectoryLister, FsLister};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    debug!("Setgen v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match execute(&args) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            error!("Generation failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .setgen.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!("{} already exists. Remove it first or edit it manually.", DEFAULT_CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load config, run the generation against the real filesystem and report.
fn execute(args: &Args) -> Result<()> {
    let mut config = load_config(args)?;
    config.merge_with_args(args);

    let job = build_job(args, &config)?;
    let summary = run_generation(&job, &FsLister)?;

    if summary.dry_run && !args.quiet && !args.summary_json {
        print_dry_run(&job, &summary);
    }

    if args.summary_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}

/// Build the run description from validated arguments and merged config.
fn build_job(args: &Args, config: &Config) -> Result<Job> {
    if config.scanner.delimiter.is_empty() {
        bail!("scanner.delimiter must not be empty");
    }

    // stdout carries only the JSON summary when requested
    let verbose = config.general.verbose && !args.summary_json;

    Ok(Job {
        origin: args.origin_folder.clone().context("origin_folder is required")?,
        destination: args
            .destination_folder
            .clone()
            .context("destination_folder is required")?,
        header: args.path_to_header.clone().context("path_to_header is required")?,
        footer: args.path_to_footer.clone().context("path_to_footer is required")?,
        verbose,
        dry_run: args.dry_run,
        show_progress: !verbose && !args.quiet,
        extension: config.output.extension.clone(),
        style: IncludeStyle::from(config),
    })
}

/// Load templates, scan the origin directory and write one main script per model.
///
/// The first failure aborts the run; files written before it are left in place.
fn run_generation(job: &Job, lister: &dyn DirectoryLister) -> Result<RunSummary> {
    if job.verbose {
        println!("\nVerbosity turned on!\n");
    }

    let header = templates::load(&job.header)?;
    if job.verbose {
        println!("Header successfully loaded!\n");
    }

    let footer = templates::load(&job.footer)?;
    if job.verbose {
        println!("Footer successfully loaded!\n");
    }

    let groups = scanner::scan(lister, &job.origin, &job.style.delimiter)?;
    info!(
        "Found {} models in {}",
        groups.len(),
        job.origin.display()
    );

    if job.verbose {
        println!("The following models were detected, shown as {{\"model_name\": test_count}}:\n");
        println!("{}\n", serde_json::to_string_pretty(&groups)?);
    }

    let mut summary = RunSummary {
        groups,
        written: Vec::new(),
        dry_run: job.dry_run,
    };

    if job.dry_run {
        return Ok(summary);
    }

    let progress = if job.show_progress {
        let pb = ProgressBar::new(summary.groups.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for (model, count) in &summary.groups {
        progress.set_message(model.clone());

        let content = render::render(model, *count, &header, &footer, &job.style);
        let path = render::writer::write(model, &content, &job.destination, &job.extension)?;

        summary.written.push(path);
        progress.inc(1);
    }
    progress.finish_and_clear();

    if job.verbose {
        println!("Created model_name.xml files successfully!");
    }

    Ok(summary)
}

/// Print what a real run would write.
fn print_dry_run(job: &Job, summary: &RunSummary) {
    println!("\nDry run: scanned {} (nothing written)\n", job.origin.display());

    if summary.groups.is_empty() {
        println!("   No test scripts found.");
        return;
    }

    for (model, count) in &summary.groups {
        let path = render::writer::output_path(&job.destination, model, &job.extension);
        println!("   {} ({} scripts) -> {}", model, count, path.display());
    }
    println!(
        "\n   Total: {} models, {} scripts",
        summary.groups.len(),
        summary.total_scripts()
    );
}
