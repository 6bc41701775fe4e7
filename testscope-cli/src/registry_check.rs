//! Drift check between the compiled-in registry and the crates actually present on disk.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use testscope_types::{CrateRegistry, PrefixOverlap};
use tracing::debug;

/// Result of comparing the registry with the repository layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryDrift {
    /// Registered crates with no matching directory, in registry order.
    pub missing: Vec<String>,
    /// Directories under the crate root that the registry does not list, sorted.
    pub unregistered: Vec<String>,
    /// Informational; never counts as drift.
    pub overlaps: Vec<PrefixOverlap>,
}

impl RegistryDrift {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unregistered.is_empty()
    }
}

/// Short names of crate directories matching the registry root.
///
/// A root of `crates/cairo-lang-` lists `crates/` and keeps directories named `cairo-lang-*`.
pub fn discover_crates(repo_root: &Utf8Path, crate_root: &str) -> anyhow::Result<Vec<String>> {
    let (dir, name_prefix) = match crate_root.rsplit_once('/') {
        Some((dir, prefix)) => (repo_root.join(dir), prefix),
        None => (repo_root.to_path_buf(), crate_root),
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir.as_std_path()).with_context(|| format!("list {}", dir))? {
        let entry = entry.with_context(|| format!("list {}", dir))?;
        if !entry.file_type().with_context(|| format!("stat {}", dir))?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!(dir = %dir, "skipping non-UTF-8 directory name");
            continue;
        };
        if let Some(short) = name.strip_prefix(name_prefix) {
            if !short.is_empty() {
                names.push(short.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

pub fn check_registry(repo_root: &Utf8Path, registry: &CrateRegistry) -> anyhow::Result<RegistryDrift> {
    let on_disk = discover_crates(repo_root, registry.root())?;
    debug!(found = on_disk.len(), registered = registry.len(), "comparing registry with disk");

    let missing = registry
        .crates()
        .iter()
        .filter(|name| !on_disk.contains(name))
        .cloned()
        .collect();
    let unregistered = on_disk
        .into_iter()
        .filter(|name| !registry.contains(name))
        .collect();

    Ok(RegistryDrift {
        missing,
        unregistered,
        overlaps: registry.prefix_overlaps(),
    })
}

pub fn render_drift(drift: &RegistryDrift) -> String {
    let mut out = String::new();
    if drift.is_clean() {
        out.push_str("Registry matches the crates on disk.\n");
    }
    if !drift.missing.is_empty() {
        out.push_str("Registered but not found on disk:\n");
        for name in &drift.missing {
            out.push_str(&format!("  - {}\n", name));
        }
    }
    if !drift.unregistered.is_empty() {
        out.push_str("Found on disk but not registered:\n");
        for name in &drift.unregistered {
            out.push_str(&format!("  - {}\n", name));
        }
    }
    if !drift.overlaps.is_empty() {
        out.push_str("Prefix overlaps (warning):\n");
        for o in &drift.overlaps {
            out.push_str(&format!("  - {} also matches {}\n", o.shorter, o.longer));
        }
    }
    out
}
