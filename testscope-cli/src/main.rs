use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::process::ExitCode;
use testscope_cli::config::{self, ConfigMerger, OutputFormat};
use testscope_cli::{input, output, registry_check};
use testscope_domain::{cairo_selector_config, Selector};
use testscope_types::{SelectionReport, ToolInfo};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "testscope",
    version,
    about = "Maps a revision's changed files to the per-crate CI jobs that must run."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a JSON array of changed paths from stdin and emit the jobs to run.
    Select(SelectArgs),
    /// List the registered crates, their job ids and the language triggers.
    ListCrates(ListCratesArgs),
    /// Compare the compiled-in registry with the crate directories on disk.
    CheckRegistry(CheckRegistryArgs),
}

#[derive(Debug, Parser)]
struct SelectArgs {
    /// Repository root holding testscope.toml (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Output format (default: from testscope.toml, else github).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also append `<name>=<jobs>` to this file (GitHub output file protocol).
    #[arg(long, env = "TESTSCOPE_GITHUB_OUTPUT")]
    github_output: Option<Utf8PathBuf>,

    /// Also write a markdown summary of the selection to this file.
    #[arg(long)]
    summary: Option<Utf8PathBuf>,

    /// Suppress the diagnostic echo lines.
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Parser)]
struct ListCratesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: ListFormat,
}

#[derive(Debug, Parser)]
struct CheckRegistryArgs {
    /// Repository root containing the crates directory (default: current directory).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Select(args) => cmd_select(args),
        Command::ListCrates(args) => cmd_list_crates(args),
        Command::CheckRegistry(args) => cmd_check_registry(args),
    }
}

fn cmd_select(args: SelectArgs) -> anyhow::Result<()> {
    let file_config =
        config::load_or_default(&args.repo_root).context("load testscope.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_select_args(args.format, args.quiet)?;
    debug!(
        "merged config: name={}, echo={}, format={:?}",
        merged.output_name, merged.echo, merged.format
    );

    let selector = Selector::new(cairo_selector_config().context("build crate registry")?);
    let echo = merged.echo && merged.format == OutputFormat::Github;

    let raw = input::read_stdin().context("read changed files from stdin")?;
    if echo {
        println!("{}", output::echo_input(&raw));
    }

    let changes = input::parse_change_set(&raw).context("parse changed files")?;
    if echo {
        println!("{}", output::echo_changes(&changes)?);
    }

    let report = SelectionReport::new(tool_info(), selector.explain(&changes));

    match merged.format {
        OutputFormat::Github => {
            if echo {
                println!("{}", output::echo_jobs(&report.jobs)?);
            }
            println!("{}", output::set_output_line(&merged.output_name, &report.jobs));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{}", json);
        }
    }

    if let Some(path) = &args.github_output {
        output::append_github_output(path, &merged.output_name, &report.jobs)?;
        debug!("appended jobs to {}", path);
    }
    if let Some(path) = &args.summary {
        fs::write(path.as_std_path(), output::render_summary_md(&report))
            .with_context(|| format!("write {}", path))?;
    }

    info!(
        files = changes.len(),
        jobs = report.jobs.len(),
        "selected jobs: {}",
        report.jobs.joined()
    );
    Ok(())
}

fn cmd_list_crates(args: ListCratesArgs) -> anyhow::Result<()> {
    let config = cairo_selector_config().context("build crate registry")?;

    match args.format {
        ListFormat::Text => {
            print!("{}", output::render_registry_text(&config));
        }
        ListFormat::Json => {
            let json = output::registry_json(&config);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn cmd_check_registry(args: CheckRegistryArgs) -> anyhow::Result<()> {
    let config = cairo_selector_config().context("build crate registry")?;
    let drift = registry_check::check_registry(&args.repo_root, &config.registry)
        .with_context(|| format!("check registry against {}", args.repo_root))?;

    print!("{}", registry_check::render_drift(&drift));
    for overlap in &drift.overlaps {
        warn!(
            "crate prefix of '{}' also matches '{}'",
            overlap.shorter, overlap.longer
        );
    }

    if !drift.is_clean() {
        anyhow::bail!(
            "registry drift: {} missing, {} unregistered",
            drift.missing.len(),
            drift.unregistered.len()
        );
    }
    Ok(())
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "testscope".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
