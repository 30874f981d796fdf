// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// How the row normalizer treats records whose field counts disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCountPolicy {
    /// Any mismatch between adjacent records is fatal.
    Strict,
    /// Pad short records with empty fields up to the widest record.
    #[default]
    Lenient,
}

/// Knobs for a single parse. Every field has a default, so a partial YAML
/// document (or none at all) is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Use header labels to pick amount/balance when several numeric columns exist.
    pub header_keyword_matching: bool,
    pub field_count: FieldCountPolicy,
    /// Separator candidates, highest priority first. Ties go to the earlier entry.
    pub separators: Vec<char>,
    /// Number of leading lines inspected when voting on the separator.
    pub separator_sample_lines: usize,
    pub amount_keywords: Vec<String>,
    pub balance_keywords: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            header_keyword_matching: true,
            field_count: FieldCountPolicy::Lenient,
            separators: vec![',', ';', '\t'],
            separator_sample_lines: 20,
            amount_keywords: vec!["amount".into(), "value".into()],
            balance_keywords: vec!["balance".into(), "balancing".into()],
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            field_count: FieldCountPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_header_keyword_matching(mut self, enabled: bool) -> Self {
        self.header_keyword_matching = enabled;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse parse options YAML")
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {:?}", path))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid options file: {:?}", path))
    }
}
