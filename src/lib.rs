// lib.rs - snpconcat library root

//! # snpconcat - SNP extraction and concatenation across loci
//!
//! Reads per-locus NEXUS alignments, keeps the columns where at least two
//! different canonical bases (A, C, G, T) occur, and concatenates them into a
//! single PHYLIP matrix ready for phylogenetic inference.
//!
//! ## Features
//!
//! - **Linked mode**: every SNP column of every locus
//! - **Unlinked mode**: one randomly drawn SNP per locus, reproducible with a seed
//! - **Missing taxa**: padded with `?` so all rows share one length
//! - **Filtering**: locus file and taxon selection by regex
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use snpconcat::prelude::*;
//! use std::path::Path;
//!
//! let loci = discover_loci(Path::new("loci/"), "nexus", &NameFilter::default())?;
//! let mut selector = SiteSelector::new(LinkageMode::Unlinked, Some(42));
//! let pb = locus_progress(loci.len(), false);
//! let output = run_pipeline(&loci, &NameFilter::default(), &mut selector, &pb)?;
//!
//! let taxa = collect_taxa(&output.loci);
//! let matrix = build_concat_matrix(&taxa, &output.loci);
//! write_phylip(Path::new("snp_concat_unlinked.phy"), &matrix, PHYLIP_NAME_WIDTH)?;
//! # Ok::<(), snpconcat::SnpError>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{build_concat_matrix, collect_taxa, find_snps, locus_progress, run_pipeline};
    pub use crate::core::{ConcatenatedMatrix, LinkageMode, PipelineOutput, SiteSelector, SnpLoci};
    pub use crate::data::loaders::parse_nexus;
    pub use crate::data::{discover_loci, AlignmentMatrix, LocusFile, NameFilter, SnpColumnSet};
    pub use crate::error::SnpError;
    pub use crate::output::{write_locus_report, write_phylip, PHYLIP_NAME_WIDTH};
}

// Re-export main types at the root level for convenience
pub use crate::core::{ConcatenatedMatrix, LinkageMode, SiteSelector};
pub use crate::data::{AlignmentMatrix, SnpColumnSet};
pub use crate::error::SnpError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
