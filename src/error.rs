// error.rs - Library error type

use thiserror::Error;

/// Errors raised while reading loci, detecting SNPs or writing the concatenated matrix
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnpError {
    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Parse error in '{file}': {message}")]
    Parse { file: String, message: String },

    #[error("Malformed alignment in '{file}': taxon '{taxon}' has {found} sites, expected {expected}")]
    MalformedAlignment {
        file: String,
        taxon: String,
        expected: usize,
        found: usize,
    },

    #[error("Cannot select an unlinked site from locus {locus}: no SNP columns")]
    EmptySnpSet { locus: usize },

    #[error("Taxon name '{taxon}' does not fit the {width}-character PHYLIP name field")]
    TaxonTooLong { taxon: String, width: usize },

    #[error("No locus files ending in '{suffix}' found in '{dir}'")]
    NoLoci { dir: String, suffix: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SnpError {
    pub fn io<P: Into<String>, M: ToString>(path: P, message: M) -> Self {
        Self::Io {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn parse<F: Into<String>, M: Into<String>>(file: F, message: M) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<SnpError> for String {
    fn from(e: SnpError) -> Self {
        e.to_string()
    }
}
