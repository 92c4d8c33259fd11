//! Literal search/replace rules and rule files
//!
//! A rules file is YAML, either a bare list:
//!
//! ```yaml
//! - from: "old text"
//!   to: "new text"
//! ```
//!
//! or a mapping with a `rules` key (the same shape as the `patch` section of
//! `assetkit.yaml`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// One literal search/replace pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The replacement text still contains the search text, so every
    /// application matches again.
    ///
    /// A false result says nothing about the whole set: a rule can create
    /// new matches of its own search text (`ab` -> `a` on `aabb`) and earlier
    /// rules can feed later ones. [`PatchSet::is_stable_on`] checks that
    /// exactly for a given text.
    pub fn reinserts_pattern(&self) -> bool {
        self.to.contains(&self.from)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RulesFile {
    List(Vec<Replacement>),
    Table { rules: Vec<Replacement> },
}

/// Ordered list of replacements applied one after another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    rules: Vec<Replacement>,
}

impl PatchSet {
    /// Build a validated patch set
    pub fn new(rules: Vec<Replacement>) -> Result<Self> {
        let set = Self { rules };
        set.validate()?;
        Ok(set)
    }

    /// Parse a rules file body
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let rules = match serde_yaml::from_str::<RulesFile>(yaml)? {
            RulesFile::List(rules) | RulesFile::Table { rules } => rules,
        };
        Self::new(rules)
    }

    /// Load a rules file from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::fs::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| crate::config::with_path(e, path))
    }

    /// Zip `--from` and `--to` values into rules
    pub fn from_pairs(from: &[String], to: &[String]) -> Result<Self> {
        if from.len() != to.len() {
            return Err(error::config::invalid(format!(
                "got {} --from value(s) but {} --to value(s)",
                from.len(),
                to.len()
            )));
        }

        let rules = from
            .iter()
            .zip(to)
            .map(|(f, t)| Replacement::new(f.as_str(), t.as_str()))
            .collect();
        Self::new(rules)
    }

    /// Append the rules of `other` after this set's rules
    pub fn extend(&mut self, other: PatchSet) {
        self.rules.extend(other.rules);
    }

    pub fn rules(&self) -> &[Replacement] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Apply every rule in order; returns the new content and the number of
    /// occurrences each rule replaced.
    ///
    /// Later rules see the output of earlier ones.
    pub fn apply(&self, content: &str) -> (String, Vec<usize>) {
        let mut current = content.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let matches = current.matches(rule.from.as_str()).count();
            if matches > 0 {
                current = current.replace(rule.from.as_str(), &rule.to);
            }
            counts.push(matches);
        }

        (current, counts)
    }

    /// Whether applying the set to `patched` (its own output) changes nothing
    pub fn is_stable_on(&self, patched: &str) -> bool {
        self.apply(patched).0 == patched
    }

    fn validate(&self) -> Result<()> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(error::patch::invalid_rule(
                    i + 1,
                    "'from' must not be empty",
                ));
            }
        }
        Ok(())
    }
}
