// mod.rs - Core logic module

pub mod concat;
pub mod detector;
pub mod pipeline;
pub mod selection;

// Re-export main types for convenience
pub use concat::{build_concat_matrix, collect_taxa, ConcatenatedMatrix, SnpLoci, MISSING_SYMBOL};
pub use detector::{find_snps, is_variable_column, CANONICAL_BASES};
pub use pipeline::{locus_progress, process_locus, run_pipeline, LocusReport, LocusStatus, PipelineOutput};
pub use selection::{LinkageMode, SiteSelector};
