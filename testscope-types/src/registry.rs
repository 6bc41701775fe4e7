use crate::job::JobId;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building a [`CrateRegistry`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("crate name at index {index} is empty")]
    EmptyName { index: usize },

    #[error("crate '{name}' is registered more than once")]
    Duplicate { name: String },
}

/// Ordered set of crate identifiers plus the source-tree prefix they live under.
///
/// A changed path belongs to crate `name` when it starts with `root + name`. That is a plain string
/// prefix test, so registering both `sierra` and `sierra-gas` means the former also claims paths of
/// the latter; see [`CrateRegistry::prefix_overlaps`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrateRegistry {
    root: String,
    crates: Vec<String>,
}

impl CrateRegistry {
    /// Build a registry, keeping the given order.
    ///
    /// Rejects empty names and duplicates.
    pub fn new<I, S>(root: impl Into<String>, crates: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let crates: Vec<String> = crates.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        for (index, name) in crates.iter().enumerate() {
            if name.is_empty() {
                return Err(RegistryError::EmptyName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(RegistryError::Duplicate { name: name.clone() });
            }
        }
        Ok(Self {
            root: root.into(),
            crates,
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn crates(&self) -> &[String] {
        &self.crates
    }

    pub fn len(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.crates.iter().any(|c| c == name)
    }

    /// Literal path prefix owned by `name`.
    pub fn prefix(&self, name: &str) -> String {
        format!("{}{}", self.root, name)
    }

    /// Pairs where one crate's prefix is a literal prefix of another's.
    ///
    /// Ordered by the shorter entry's registry position, then the longer one's.
    pub fn prefix_overlaps(&self) -> Vec<PrefixOverlap> {
        let mut out = Vec::new();
        for shorter in &self.crates {
            for longer in &self.crates {
                if shorter != longer && longer.starts_with(shorter.as_str()) {
                    out.push(PrefixOverlap {
                        shorter: shorter.clone(),
                        longer: longer.clone(),
                    });
                }
            }
        }
        out
    }
}

/// `shorter` also claims every path under `longer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixOverlap {
    pub shorter: String,
    pub longer: String,
}

/// Fires one fixed job when any changed path ends with `suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTrigger {
    pub suffix: String,
    pub job: JobId,
}

impl LanguageTrigger {
    pub fn new(suffix: impl Into<String>, job: JobId) -> Self {
        Self {
            suffix: suffix.into(),
            job,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.ends_with(self.suffix.as_str())
    }
}

/// Everything the selector needs besides the change set.
///
/// `native` is always evaluated before `dsl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorConfig {
    pub registry: CrateRegistry,
    pub native: LanguageTrigger,
    pub dsl: LanguageTrigger,
}

impl SelectorConfig {
    /// Upper bound on the number of jobs one selection can produce.
    pub fn max_jobs(&self) -> usize {
        self.registry.len() + 2
    }

    pub fn triggers(&self) -> [&LanguageTrigger; 2] {
        [&self.native, &self.dsl]
    }
}
