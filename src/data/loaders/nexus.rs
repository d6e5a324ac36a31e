// nexus.rs - NEXUS character matrix loader

use crate::data::alignment::{AlignmentMatrix, TaxonSequence};
use crate::error::SnpError;
use std::collections::HashMap;
use std::path::Path;

/// Line that opens the character matrix block (case-sensitive)
pub const MATRIX_MARKER: &str = "matrix";
/// Line that closes the character matrix block
pub const BLOCK_TERMINATOR: &str = ";";

/// Collect the (taxon, fragment) pairs between the `matrix` marker and the closing `;`
fn read_fragments<'a>(text: &'a str, source: &str) -> Result<Vec<(&'a str, &'a str)>, SnpError> {
    let mut in_matrix = false;
    let mut fragments = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();

        if line == MATRIX_MARKER {
            in_matrix = true;
            continue;
        }
        if !in_matrix || line.is_empty() {
            continue;
        }
        if line == BLOCK_TERMINATOR {
            return Ok(fragments);
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(taxon), Some(run), None) => fragments.push((taxon, run)),
            _ => {
                return Err(SnpError::parse(
                    source,
                    format!(
                        "line {}: expected '<taxon> <sequence>', found '{}'",
                        line_num + 1,
                        line
                    ),
                ))
            }
        }
    }

    if in_matrix {
        Err(SnpError::parse(
            source,
            "matrix block is not terminated by a ';' line",
        ))
    } else {
        Err(SnpError::parse(
            source,
            format!("no '{}' line found", MATRIX_MARKER),
        ))
    }
}

/// Parse the character matrix out of NEXUS text.
///
/// Interleaved blocks are supported: a taxon seen again has its run appended to
/// the sequence collected so far. Sequence lengths are not checked here.
pub fn parse_nexus(text: &str, source: &str) -> Result<AlignmentMatrix, SnpError> {
    let fragments = read_fragments(text, source)?;

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<TaxonSequence> = Vec::new();

    for (taxon, run) in fragments {
        let slot = *index.entry(taxon).or_insert_with(|| {
            rows.push(TaxonSequence {
                taxon: taxon.to_string(),
                sequence: Vec::new(),
            });
            rows.len() - 1
        });
        rows[slot].sequence.extend_from_slice(run.as_bytes());
    }

    Ok(AlignmentMatrix {
        source: source.to_string(),
        rows,
    })
}

impl AlignmentMatrix {
    /// Read and parse one NEXUS locus file
    pub fn from_nexus_file(path: &Path) -> Result<Self, SnpError> {
        let source = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| SnpError::io(source.as_str(), e))?;
        parse_nexus(&text, &source)
    }
}
