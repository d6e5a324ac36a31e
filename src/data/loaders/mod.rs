// mod.rs - Alignment file loaders

pub mod nexus;

pub use nexus::parse_nexus;
