// loci.rs - Locus file discovery

use crate::error::SnpError;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Default file name suffix for locus alignments
pub const DEFAULT_SUFFIX: &str = "nexus";

/// One locus alignment file and its position in the sorted enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocusFile {
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
}

/// Include/exclude selection of names (locus file names or taxa)
#[derive(Debug, Default)]
pub struct NameFilter {
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
}

impl NameFilter {
    pub fn accepts(&self, name: &str) -> bool {
        if let Some(re) = &self.include {
            if !re.is_match(name) {
                return false;
            }
        }
        if let Some(re) = &self.exclude {
            if re.is_match(name) {
                return false;
            }
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.include.is_some() || self.exclude.is_some()
    }
}

/// List files in `dir` whose name ends with `suffix`, sorted by name.
///
/// Locus indices are assigned after sorting and filtering, so they follow file name order.
pub fn discover_loci(dir: &Path, suffix: &str, filter: &NameFilter) -> Result<Vec<LocusFile>, SnpError> {
    let dir_display = dir.display().to_string();

    let entries = std::fs::read_dir(dir).map_err(|e| SnpError::io(dir_display.as_str(), e))?;

    let mut names: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SnpError::io(dir_display.as_str(), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if name.ends_with(suffix) && filter.accepts(name) {
            names.push((name.to_string(), path.clone()));
        }
    }

    if names.is_empty() {
        return Err(SnpError::NoLoci {
            dir: dir_display,
            suffix: suffix.to_string(),
        });
    }

    names.sort();

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(index, (name, path))| LocusFile { index, name, path })
        .collect())
}
