// alignment.rs - Per-locus alignment matrix

use crate::error::SnpError;

/// One taxon row of an alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonSequence {
    pub taxon: String,
    pub sequence: Vec<u8>,
}

/// Taxon -> aligned sequence mapping for a single locus, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentMatrix {
    pub source: String,
    pub rows: Vec<TaxonSequence>,
}

impl AlignmentMatrix {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            rows: Vec::new(),
        }
    }

    /// Build a matrix from (taxon, sequence) pairs. Taxa are expected to be unique.
    pub fn from_rows<I, T, S>(source: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: AsRef<[u8]>,
    {
        Self {
            source: source.to_string(),
            rows: rows
                .into_iter()
                .map(|(taxon, seq)| TaxonSequence {
                    taxon: taxon.into(),
                    sequence: seq.as_ref().to_vec(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn taxa(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.taxon.as_str())
    }

    pub fn get(&self, taxon: &str) -> Option<&[u8]> {
        self.rows
            .iter()
            .find(|r| r.taxon == taxon)
            .map(|r| r.sequence.as_slice())
    }

    /// Shared sequence length, failing on the first row that disagrees with the first taxon
    pub fn alignment_length(&self) -> Result<usize, SnpError> {
        let Some(first) = self.rows.first() else {
            return Ok(0);
        };
        let expected = first.sequence.len();

        for row in &self.rows[1..] {
            if row.sequence.len() != expected {
                return Err(SnpError::MalformedAlignment {
                    file: self.source.clone(),
                    taxon: row.taxon.clone(),
                    expected,
                    found: row.sequence.len(),
                });
            }
        }
        Ok(expected)
    }

    /// Keep only the taxa accepted by `keep`
    pub fn retain_taxa<F: FnMut(&str) -> bool>(&mut self, mut keep: F) {
        self.rows.retain(|r| keep(&r.taxon));
    }
}
