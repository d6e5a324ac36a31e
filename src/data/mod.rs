// mod.rs - Data structures module

pub mod alignment;
pub mod loaders;
pub mod loci;
pub mod snps;

// Re-export main types for convenience
pub use alignment::{AlignmentMatrix, TaxonSequence};
pub use loci::{discover_loci, LocusFile, NameFilter};
pub use snps::SnpColumnSet;
