//! Configuration file loading for testscope.
//!
//! Discovers and loads `testscope.toml` from the repository root.
//! Merges config file settings with CLI arguments (CLI takes precedence).
//! The crate registry is compiled in and deliberately absent from this file.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "testscope.toml";

/// Default key for the job list in CI output.
pub const DEFAULT_OUTPUT_NAME: &str = "jobs";

/// Top-level configuration from testscope.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestscopeConfig {
    /// Output settings.
    pub output: OutputConfig,
}

/// Output section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Key the job list is published under (`::set-output name=<name>::`).
    pub name: String,

    /// Print the diagnostic echo lines (raw input, parsed paths, jobs).
    pub echo: bool,

    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_OUTPUT_NAME.to_string(),
            echo: true,
            format: OutputFormat::default(),
        }
    }
}

/// How `select` reports its result on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Diagnostic echoes followed by the `::set-output` line.
    #[default]
    Github,
    /// A pretty-printed selection report.
    Json,
}

/// Discover the testscope.toml config file.
///
/// Searches for `testscope.toml` in the repository root directory.
/// Returns `None` if no config file is found.
pub fn discover_config(repo_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a testscope.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<TestscopeConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<TestscopeConfig> {
    let config: TestscopeConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from repo root, or return default if not found.
pub fn load_or_default(repo_root: &Utf8Path) -> anyhow::Result<TestscopeConfig> {
    match discover_config(repo_root) {
        Some(path) => load_config(&path),
        None => Ok(TestscopeConfig::default()),
    }
}

/// Settings for one `select` run after merging file and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub output_name: String,
    pub echo: bool,
    pub format: OutputFormat,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: TestscopeConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: TestscopeConfig) -> Self {
        Self { config }
    }

    /// Merge with `select` CLI arguments.
    ///
    /// `--format` replaces the file's format; `--quiet` turns echoes off regardless of the file.
    pub fn merge_select_args(
        self,
        cli_format: Option<OutputFormat>,
        quiet: bool,
    ) -> anyhow::Result<MergedConfig> {
        let output = self.config.output;
        validate_output_name(&output.name)?;

        Ok(MergedConfig {
            output_name: output.name,
            echo: output.echo && !quiet,
            format: cli_format.unwrap_or(output.format),
        })
    }
}

/// Output names end up inside `::set-output name=<name>::` and `<name>=` lines.
pub fn validate_output_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() {
        anyhow::bail!("output name must not be empty");
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || matches!(*c, ':' | '=' | ','))
    {
        anyhow::bail!("output name '{}' contains disallowed character {:?}", name, c);
    }
    Ok(())
}
