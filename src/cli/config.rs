// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub locus_report: Option<String>,

    // Core settings
    pub linkage: Option<String>,
    pub seed: Option<u64>,
    pub suffix: Option<String>,
    pub name_width: Option<usize>,

    // Locus/taxon filtering
    pub include_loci: Option<String>,
    pub exclude_loci: Option<String>,
    pub include_taxa: Option<String>,
    pub exclude_taxa: Option<String>,

    // Flags
    pub no_progress: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# snpconcat.toml - Configuration file for snpconcat
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory containing the per-locus NEXUS alignments
input = "/path/to/nexus/files"

# Output PHYLIP file (default: snp_concat_<linkage>.phy in the working directory)
# output = "snp_concat_linked.phy"

# Per-locus summary table (TSV)
# locus_report = "loci.tsv"

# =============================================================================
# CORE SETTINGS
# =============================================================================

# Linkage mode: linked keeps every SNP, unlinked keeps one random SNP per locus
linkage = "linked"

# Random seed for unlinked selection (omit for a fresh seed each run)
# seed = 12345

# File name suffix identifying locus files
suffix = "nexus"

# Width of the PHYLIP taxon name field
name_width = 30

# =============================================================================
# LOCUS/TAXON FILTERING
# =============================================================================

# Include only locus files whose name matches regex pattern
# include_loci = "^chr1_.*"

# Exclude locus files whose name matches regex pattern
# exclude_loci = "paralog"

# Include only taxa matching regex pattern
# include_taxa = "^ingroup_"

# Exclude taxa matching regex pattern
# exclude_taxa = "outgroup.*"

# =============================================================================
# FLAGS
# =============================================================================

# Hide the progress bar
no_progress = false

# List the loci that would be processed, then exit
dry_run = false
"#
        .to_string()
    }
}
