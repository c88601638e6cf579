use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use covtree::config::Config;
use covtree::coverage::{self, check_fail_under};
use covtree::report;
use covtree::tree::{CoverageNode, CoverageStats};

const CONFIG_FILE: &str = "covtree.toml";

#[derive(Parser)]
#[command(name = "covtree")]
#[command(about = "Render Go function coverage as a collapsible markdown tree")]
#[command(version)]
struct Cli {
    /// Output of `go tool cover -func` (use - for stdin)
    input: PathBuf,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (default: covtree.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Heading line at the top of the report
    #[arg(long)]
    title: Option<String>,

    /// Append a summary table of functions per coverage tier
    #[arg(long)]
    summary: bool,

    /// Exit with an error when total coverage is below this percentage
    #[arg(long, value_name = "PCT")]
    fail_under: Option<f64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => {
            Config::load(path).with_context(|| format!("Could not load {}", path.display()))?
        }
        None => Config::load_or_default(Path::new(CONFIG_FILE))?,
    };

    let mut options = config.report_options();
    if let Some(title) = cli.title {
        options.title = title;
    }
    if cli.summary {
        options.summary = true;
    }

    let fail_under = cli.fail_under.or(config.thresholds.fail_under);
    if let Some(min) = fail_under {
        if !(0.0..=100.0).contains(&min) {
            anyhow::bail!("--fail-under must be between 0 and 100, got {}", min);
        }
    }

    // Parse everything before rendering so a bad record produces no output
    let entries = coverage::read_report(&cli.input)?;
    if entries.is_empty() {
        log::warn!("no coverage records in {}", cli.input.display());
    }

    let tree = CoverageNode::from_entries(entries);
    log::debug!("built coverage tree with {} records", tree.entry_count());

    match cli.output {
        Some(ref path) => {
            report::generate_report(&tree, &options, path)?;
            log::info!("report written to {}", path.display());
        }
        None => {
            let markdown = report::render_report(&tree, &options);
            io::stdout()
                .lock()
                .write_all(markdown.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }

    if let Some(threshold) = fail_under {
        let stats = CoverageStats::from_tree(&tree, &options.thresholds);
        let result = check_fail_under(&stats, threshold);
        result.print_summary();

        if !result.passed {
            std::process::exit(1);
        }
    }

    Ok(())
}
