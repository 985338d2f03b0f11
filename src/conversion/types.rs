//! Core types for the conversion domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rewrite policy applied to every trigger match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Drop the underscore and upper-case the trigger letter (`foo_bar` -> `fooBar`)
    #[default]
    Camel,
    /// Like `Camel`, but also upper-cases the first character of each match's prefix
    Pascal,
}

impl CasePolicy {
    /// Get the canonical string form of this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            CasePolicy::Camel => "camel",
            CasePolicy::Pascal => "pascal",
        }
    }

    /// Get all supported policies
    pub fn all() -> Vec<CasePolicy> {
        vec![CasePolicy::Camel, CasePolicy::Pascal]
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CasePolicy {
    type Err = crate::core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" | "lower" => Ok(CasePolicy::Camel),
            "pascal" | "pascalcase" | "upper" => Ok(CasePolicy::Pascal),
            _ => Err(crate::core::Error::config(format!(
                "unknown case policy '{s}' (expected one of: camel, pascal)"
            ))),
        }
    }
}

/// A single prefix + trigger match located inside a line.
///
/// All offsets are byte offsets into the scanned line. The prefix spans
/// `start..underscore`, the trigger spans `underscore..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerMatch {
    pub start: usize,
    pub underscore: usize,
    pub end: usize,
    pub letter: char,
}

impl TriggerMatch {
    /// Length of the prefix in bytes
    pub fn prefix_len(&self) -> usize {
        self.underscore - self.start
    }
}

/// Result of converting one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConversion {
    pub text: String,
    pub matches: usize,
}

impl LineConversion {
    /// Whether any trigger fired on this line
    pub fn is_changed(&self) -> bool {
        self.matches > 0
    }
}

/// Aggregate counters over a converted document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    pub lines: usize,
    pub matches: usize,
    pub changed_lines: usize,
}

impl ConversionStats {
    /// Fold one line's result into the running totals
    pub fn record(&mut self, line: &LineConversion) {
        self.lines += 1;
        self.matches += line.matches;
        if line.is_changed() {
            self.changed_lines += 1;
        }
    }
}
