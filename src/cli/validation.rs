// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::LinkageMode;
use crate::data::loci::DEFAULT_SUFFIX;
use crate::data::NameFilter;
use crate::output::{default_output_name, PHYLIP_NAME_WIDTH};
use regex::Regex;
use std::path::PathBuf;

/// Narrowest name field that still leaves room for a one-character name and a separator
pub const MIN_NAME_WIDTH: usize = 2;

#[derive(Debug)]
pub struct ValidationResult {
    pub input_dir: PathBuf,
    pub linkage: LinkageMode,
    pub output_path: PathBuf,
    pub suffix: String,
    pub name_width: usize,
    pub seed: Option<u64>,
    pub loci_filter: NameFilter,
    pub taxa_filter: NameFilter,
    pub locus_report: Option<PathBuf>,
}

fn compile(pattern: &Option<String>, what: &str) -> Result<Option<Regex>, String> {
    match pattern {
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|e| format!("Invalid {} regex: {}", what, e)),
        None => Ok(None),
    }
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let (input, linkage_token) = args.positionals()?;

    let input_dir = PathBuf::from(input);
    if !input_dir.is_dir() {
        return Err(format!("Input directory not found: {}", input_dir.display()));
    }

    let linkage = LinkageMode::from_token(linkage_token);

    let suffix = args.suffix.clone().unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
    if suffix.is_empty() {
        return Err("Locus file suffix must not be empty".to_string());
    }

    let name_width = args.name_width.unwrap_or(PHYLIP_NAME_WIDTH);
    if name_width < MIN_NAME_WIDTH {
        return Err(format!("Name width must be at least {}", MIN_NAME_WIDTH));
    }

    let output_path = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_output_name(linkage)));

    let loci_filter = NameFilter {
        include: compile(&args.include_loci, "include_loci")?,
        exclude: compile(&args.exclude_loci, "exclude_loci")?,
    };
    let taxa_filter = NameFilter {
        include: compile(&args.include_taxa, "include_taxa")?,
        exclude: compile(&args.exclude_taxa, "exclude_taxa")?,
    };

    Ok(ValidationResult {
        input_dir,
        linkage,
        output_path,
        suffix,
        name_width,
        seed: args.seed,
        loci_filter,
        taxa_filter,
        locus_report: args.locus_report.as_ref().map(PathBuf::from),
    })
}
