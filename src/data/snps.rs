// snps.rs - SNP column set extracted from one locus

/// Variable columns of one locus, one row per taxon.
///
/// Every row holds exactly `column_count` symbols, and `source_columns[i]` is the
/// alignment column the i-th symbol of each row came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnpColumnSet {
    taxa: Vec<String>,
    rows: Vec<Vec<u8>>,
    source_columns: Vec<usize>,
}

impl SnpColumnSet {
    /// Empty set over the given taxa
    pub fn with_taxa<I, S>(taxa: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let taxa: Vec<String> = taxa.into_iter().map(Into::into).collect();
        let rows = vec![Vec::new(); taxa.len()];
        Self {
            taxa,
            rows,
            source_columns: Vec::new(),
        }
    }

    /// Append one column; `symbols` must be in taxon order
    pub fn push_column<I: IntoIterator<Item = u8>>(&mut self, source_column: usize, symbols: I) {
        for (row, symbol) in self.rows.iter_mut().zip(symbols) {
            row.push(symbol);
        }
        self.source_columns.push(source_column);
    }

    pub fn column_count(&self) -> usize {
        self.source_columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_columns.is_empty()
    }

    pub fn taxon_count(&self) -> usize {
        self.taxa.len()
    }

    pub fn source_columns(&self) -> &[usize] {
        &self.source_columns
    }

    pub fn taxa(&self) -> impl Iterator<Item = &str> {
        self.taxa.iter().map(|t| t.as_str())
    }

    pub fn get(&self, taxon: &str) -> Option<&[u8]> {
        self.taxa
            .iter()
            .position(|t| t == taxon)
            .map(|i| self.rows[i].as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.taxa
            .iter()
            .zip(self.rows.iter())
            .map(|(t, r)| (t.as_str(), r.as_slice()))
    }

    /// Reduce every row to the single symbol at `index`. Returns `None` if out of range.
    pub fn retain_column(&self, index: usize) -> Option<Self> {
        let source_column = *self.source_columns.get(index)?;
        Some(Self {
            taxa: self.taxa.clone(),
            rows: self.rows.iter().map(|r| vec![r[index]]).collect(),
            source_columns: vec![source_column],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut set = SnpColumnSet::with_taxa(["a", "b"]);
        assert!(set.is_empty());
        set.push_column(3, *b"AC");
        set.push_column(7, *b"GT");

        assert_eq!(set.column_count(), 2);
        assert_eq!(set.source_columns(), &[3, 7]);
        assert_eq!(set.get("a"), Some(&b"AG"[..]));
        assert_eq!(set.get("b"), Some(&b"CT"[..]));
        assert_eq!(set.get("z"), None);
    }

    #[test]
    fn test_retain_column() {
        let mut set = SnpColumnSet::with_taxa(["a", "b"]);
        set.push_column(0, *b"AC");
        set.push_column(5, *b"GT");

        let single = set.retain_column(1).unwrap();
        assert_eq!(single.column_count(), 1);
        assert_eq!(single.source_columns(), &[5]);
        assert_eq!(single.get("a"), Some(&b"G"[..]));
        assert_eq!(single.get("b"), Some(&b"T"[..]));

        assert!(set.retain_column(2).is_none());
    }
}
