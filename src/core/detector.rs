// detector.rs - SNP column detection

use crate::data::{AlignmentMatrix, SnpColumnSet};
use crate::error::SnpError;

/// Nucleotides that count towards column variability
pub const CANONICAL_BASES: [u8; 4] = *b"ACGT";

/// One bit per canonical base, zero for everything else
#[inline]
fn base_bit(symbol: u8) -> u8 {
    CANONICAL_BASES
        .iter()
        .position(|&b| b == symbol)
        .map_or(0, |i| 1u8 << i)
}

/// True when at least two different canonical bases occur among `symbols`.
/// Gaps, N, ambiguity codes and lowercase bases are ignored.
pub fn is_variable_column<I: IntoIterator<Item = u8>>(symbols: I) -> bool {
    let seen = symbols.into_iter().fold(0u8, |acc, s| acc | base_bit(s));
    seen.count_ones() > 1
}

/// Extract the variable columns of `matrix` in ascending column order.
///
/// Fails with `MalformedAlignment` when taxa have different sequence lengths.
pub fn find_snps(matrix: &AlignmentMatrix) -> Result<SnpColumnSet, SnpError> {
    let length = matrix.alignment_length()?;
    let mut snps = SnpColumnSet::with_taxa(matrix.taxa());

    for column in 0..length {
        let symbols = matrix.rows.iter().map(|r| r.sequence[column]);
        if is_variable_column(symbols.clone()) {
            snps.push_column(column, symbols);
        }
    }

    Ok(snps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_variable_column() {
        assert!(is_variable_column(*b"AC"));
        assert!(is_variable_column(*b"AAAT"));
        assert!(!is_variable_column(*b"AAAA"));
        // Single canonical base plus non-canonical symbols
        assert!(!is_variable_column(*b"A-NR?"));
        assert!(!is_variable_column(*b"----"));
        // Lowercase is not canonical
        assert!(!is_variable_column(*b"Aa"));
    }

    #[test]
    fn test_find_snps_columns_and_order() {
        let m = AlignmentMatrix::from_rows(
            "l.nexus",
            [("t1", "AACGT-"), ("t2", "AATGTA"), ("t3", "ACCGNC")],
        );
        let snps = find_snps(&m).unwrap();

        // column 1 (A/C), column 2 (C/T), column 5 (- A C)
        assert_eq!(snps.source_columns(), &[1, 2, 5]);
        assert_eq!(snps.get("t1"), Some(&b"AC-"[..]));
        assert_eq!(snps.get("t2"), Some(&b"ATA"[..]));
        assert_eq!(snps.get("t3"), Some(&b"CCC"[..]));
    }

    #[test]
    fn test_non_canonical_symbols_copied_when_column_qualifies() {
        let m = AlignmentMatrix::from_rows("l.nexus", [("a", "A"), ("b", "G"), ("c", "N")]);
        let snps = find_snps(&m).unwrap();
        assert_eq!(snps.column_count(), 1);
        assert_eq!(snps.get("c"), Some(&b"N"[..]));
    }

    #[test]
    fn test_invariant_locus_yields_empty_set() {
        let m = AlignmentMatrix::from_rows("l.nexus", [("a", "ACGT"), ("b", "ACGT")]);
        let snps = find_snps(&m).unwrap();
        assert!(snps.is_empty());
        assert_eq!(snps.taxon_count(), 2);
        assert_eq!(snps.get("a"), Some(&b""[..]));
    }

    #[test]
    fn test_unequal_lengths_fail_fast() {
        let m = AlignmentMatrix::from_rows("l.nexus", [("a", "ACGT"), ("b", "AC")]);
        assert!(matches!(
            find_snps(&m),
            Err(SnpError::MalformedAlignment { .. })
        ));
    }
}
