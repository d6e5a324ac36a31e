// selection.rs - Linked/unlinked site selection

use crate::data::SnpColumnSet;
use crate::error::SnpError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// SNP linkage mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkageMode {
    /// Keep every SNP column of a locus
    Linked,
    /// Keep one randomly drawn SNP column per locus
    Unlinked,
}

impl LinkageMode {
    /// Tokens starting with 'u' (any case) select unlinked mode, anything else is linked
    pub fn from_token(token: &str) -> Self {
        if token.trim_start().to_lowercase().starts_with('u') {
            LinkageMode::Unlinked
        } else {
            LinkageMode::Linked
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkageMode::Linked => "linked",
            LinkageMode::Unlinked => "unlinked",
        }
    }
}

impl std::fmt::Display for LinkageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applies the linkage policy, holding the single random source for a run
#[derive(Debug)]
pub struct SiteSelector {
    mode: LinkageMode,
    seed: u64,
    rng: StdRng,
}

impl SiteSelector {
    /// Without a seed one is drawn from entropy; `seed()` reports it either way
    pub fn new(mode: LinkageMode, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| StdRng::from_entropy().gen());
        Self {
            mode,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn mode(&self) -> LinkageMode {
        self.mode
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one column index in `[0, column_count)`
    pub fn draw_column(&mut self, column_count: usize, locus: usize) -> Result<usize, SnpError> {
        if column_count == 0 {
            return Err(SnpError::EmptySnpSet { locus });
        }
        Ok(self.rng.gen_range(0..column_count))
    }

    /// Apply the linkage policy to one locus
    pub fn select(&mut self, snps: SnpColumnSet, locus: usize) -> Result<SnpColumnSet, SnpError> {
        match self.mode {
            LinkageMode::Linked => Ok(snps),
            LinkageMode::Unlinked => {
                let index = self.draw_column(snps.column_count(), locus)?;
                snps.retain_column(index)
                    .ok_or(SnpError::EmptySnpSet { locus })
            }
        }
    }
}
