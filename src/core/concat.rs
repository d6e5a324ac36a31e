// concat.rs - Cross-locus SNP matrix assembly

use crate::data::SnpColumnSet;
use std::collections::{BTreeMap, HashSet};

/// Symbol written for a taxon missing from a locus
pub const MISSING_SYMBOL: u8 = b'?';

/// Per-locus SNP sets keyed by locus index; iteration is in ascending locus order
pub type SnpLoci = BTreeMap<usize, SnpColumnSet>;

/// Concatenated SNP matrix over every taxon seen in any locus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcatenatedMatrix {
    rows: BTreeMap<String, Vec<u8>>,
    site_count: usize,
}

impl ConcatenatedMatrix {
    pub fn taxon_count(&self) -> usize {
        self.rows.len()
    }

    pub fn site_count(&self) -> usize {
        self.site_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, taxon: &str) -> Option<&[u8]> {
        self.rows.get(taxon).map(|r| r.as_slice())
    }

    /// Rows sorted by taxon identifier
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.rows.iter().map(|(t, r)| (t.as_str(), r.as_slice()))
    }
}

/// All distinct taxa across loci, in first-seen order (ascending locus index)
pub fn collect_taxa(loci: &SnpLoci) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut taxa = Vec::new();
    for snps in loci.values() {
        for taxon in snps.taxa() {
            if seen.insert(taxon) {
                taxa.push(taxon.to_string());
            }
        }
    }
    taxa
}

/// Concatenate per-locus SNP columns for every taxon in `taxa`.
///
/// A taxon absent from a locus receives one `?` per SNP column of that locus.
pub fn build_concat_matrix(taxa: &[String], loci: &SnpLoci) -> ConcatenatedMatrix {
    let mut rows: BTreeMap<String, Vec<u8>> =
        taxa.iter().map(|t| (t.clone(), Vec::new())).collect();
    let mut site_count = 0;

    for snps in loci.values() {
        let width = snps.column_count();
        for (taxon, row) in rows.iter_mut() {
            match snps.get(taxon) {
                Some(symbols) => row.extend_from_slice(symbols),
                None => row.extend(std::iter::repeat(MISSING_SYMBOL).take(width)),
            }
        }
        site_count += width;
    }

    ConcatenatedMatrix { rows, site_count }
}
