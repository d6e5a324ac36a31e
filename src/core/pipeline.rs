// pipeline.rs - Per-locus processing: parse -> detect -> select

use crate::core::concat::SnpLoci;
use crate::core::detector::find_snps;
use crate::core::selection::SiteSelector;
use crate::data::{AlignmentMatrix, LocusFile, NameFilter, SnpColumnSet};
use crate::error::SnpError;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

/// Outcome of one locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocusStatus {
    Included,
    NoSnps,
    NoTaxa,
}

/// Per-locus summary row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocusReport {
    pub locus_index: usize,
    pub file: String,
    pub taxa: usize,
    pub alignment_length: usize,
    pub snp_columns: usize,
    pub selected_columns: String,
    pub status: LocusStatus,
}

/// Everything collected from a full pass over the loci
#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub loci: SnpLoci,
    pub reports: Vec<LocusReport>,
}

impl PipelineOutput {
    pub fn included(&self) -> usize {
        self.loci.len()
    }

    pub fn skipped(&self) -> usize {
        self.reports.len() - self.loci.len()
    }
}

/// Progress bar for locus processing; hidden when `show` is false
pub fn locus_progress(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Run one locus through the parser, taxon filter, detector and selector
pub fn process_locus(
    locus: &LocusFile,
    taxa_filter: &NameFilter,
    selector: &mut SiteSelector,
) -> Result<(Option<SnpColumnSet>, LocusReport), SnpError> {
    let mut matrix = AlignmentMatrix::from_nexus_file(&locus.path)?;
    if taxa_filter.is_active() {
        matrix.retain_taxa(|t| taxa_filter.accepts(t));
    }

    let alignment_length = matrix.alignment_length()?;
    let snps = find_snps(&matrix)?;

    let mut report = LocusReport {
        locus_index: locus.index,
        file: locus.name.clone(),
        taxa: matrix.len(),
        alignment_length,
        snp_columns: snps.column_count(),
        selected_columns: String::new(),
        status: LocusStatus::Included,
    };

    if matrix.is_empty() {
        report.status = LocusStatus::NoTaxa;
        return Ok((None, report));
    }
    if snps.is_empty() {
        report.status = LocusStatus::NoSnps;
        return Ok((None, report));
    }

    let selected = selector.select(snps, locus.index)?;
    report.selected_columns = selected
        .source_columns()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok((Some(selected), report))
}

/// Process every locus in order, keeping the SNP sets of loci that have any
pub fn run_pipeline(
    loci: &[LocusFile],
    taxa_filter: &NameFilter,
    selector: &mut SiteSelector,
    pb: &ProgressBar,
) -> Result<PipelineOutput, SnpError> {
    let mut output = PipelineOutput::default();

    for locus in loci {
        let (selected, report) = process_locus(locus, taxa_filter, selector)?;
        if let Some(snps) = selected {
            output.loci.insert(locus.index, snps);
        }
        output.reports.push(report);

        pb.inc(1);
        pb.set_message(format!("SNP loci: {}", output.loci.len()));
    }

    pb.finish_with_message(format!(
        "✅ Scanned {} loci, {} with SNPs",
        loci.len(),
        output.loci.len()
    ));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::concat::{build_concat_matrix, collect_taxa};
    use crate::core::selection::LinkageMode;
    use crate::data::{discover_loci, loci::DEFAULT_SUFFIX};
    use crate::output::{format_phylip, PHYLIP_NAME_WIDTH};
    use regex::Regex;
    use std::path::Path;

    fn write_locus(dir: &Path, name: &str, rows: &[(&str, &str)]) {
        let mut text = String::from("#NEXUS\nbegin data;\nmatrix\n");
        for (taxon, seq) in rows {
            text.push_str(&format!("{}  {}\n", taxon, seq));
        }
        text.push_str(";\nend;\n");
        std::fs::write(dir.join(name), text).unwrap();
    }

    /// Run the whole chain from directory scan to PHYLIP bytes
    fn render_phylip(dir: &Path, mode: LinkageMode, seed: Option<u64>) -> Vec<u8> {
        let loci = discover_loci(dir, DEFAULT_SUFFIX, &NameFilter::default()).unwrap();
        let mut selector = SiteSelector::new(mode, seed);
        let out = run_pipeline(&loci, &NameFilter::default(), &mut selector, &ProgressBar::hidden())
            .unwrap();
        let m = build_concat_matrix(&collect_taxa(&out.loci), &out.loci);
        let mut buf = Vec::new();
        format_phylip(&mut buf, &m, PHYLIP_NAME_WIDTH, "mem").unwrap();
        buf
    }

    fn write_shuffled_loci(dir: &Path) {
        // Created out of name order
        write_locus(dir, "locus_c.nexus", &[("t2", "ACGTAC"), ("t1", "GCGTTC"), ("t3", "ACCTAA")]);
        write_locus(dir, "locus_a.nexus", &[("t3", "TTAG"), ("t1", "TCAG"), ("t4", "TTAC")]);
        write_locus(dir, "locus_b.nexus", &[("t1", "GGAT"), ("t2", "GAAT")]);
    }

    #[test]
    fn test_two_locus_scenario() {
        let dir = tempfile::tempdir().unwrap();
        write_locus(dir.path(), "locus0.nexus", &[("A", "AAT"), ("B", "AAC")]);
        write_locus(dir.path(), "locus1.nexus", &[("A", "GG"), ("C", "GA")]);
        write_locus(dir.path(), "locus2.nexus", &[("A", "CCC"), ("D", "CCC")]);

        let loci = discover_loci(dir.path(), DEFAULT_SUFFIX, &NameFilter::default()).unwrap();
        let mut selector = SiteSelector::new(LinkageMode::Linked, Some(0));
        let out = run_pipeline(&loci, &NameFilter::default(), &mut selector, &ProgressBar::hidden())
            .unwrap();

        assert_eq!(out.included(), 2);
        assert_eq!(out.skipped(), 1);
        assert_eq!(out.reports[2].status, LocusStatus::NoSnps);
        assert_eq!(out.reports[0].selected_columns, "2");

        let taxa = collect_taxa(&out.loci);
        // D only appears in the invariant locus
        assert!(!taxa.contains(&"D".to_string()));

        let m = build_concat_matrix(&taxa, &out.loci);
        assert_eq!((m.taxon_count(), m.site_count()), (3, 2));
        assert_eq!(m.get("B"), Some(&b"C?"[..]));
    }

    #[test]
    fn test_unlinked_one_site_per_locus() {
        let dir = tempfile::tempdir().unwrap();
        write_locus(dir.path(), "a.nexus", &[("x", "ACGTA"), ("y", "CATGC"), ("z", "AAAAA")]);
        write_locus(dir.path(), "b.nexus", &[("x", "AT"), ("y", "GT")]);

        let loci = discover_loci(dir.path(), DEFAULT_SUFFIX, &NameFilter::default()).unwrap();
        let mut selector = SiteSelector::new(LinkageMode::Unlinked, Some(11));
        let out = run_pipeline(&loci, &NameFilter::default(), &mut selector, &ProgressBar::hidden())
            .unwrap();

        for snps in out.loci.values() {
            assert_eq!(snps.column_count(), 1);
        }
        let m = build_concat_matrix(&collect_taxa(&out.loci), &out.loci);
        assert_eq!(m.site_count(), 2);
        assert_eq!(m.get("z").map(|r| r[1]), Some(b'?'));
    }

    #[test]
    fn test_taxa_filter_applied_before_detection() {
        let dir = tempfile::tempdir().unwrap();
        write_locus(dir.path(), "a.nexus", &[("keep1", "AA"), ("keep2", "AA"), ("outgroup", "CA")]);

        let loci = discover_loci(dir.path(), DEFAULT_SUFFIX, &NameFilter::default()).unwrap();
        let filter = NameFilter {
            include: None,
            exclude: Some(Regex::new("^outgroup$").unwrap()),
        };
        let mut selector = SiteSelector::new(LinkageMode::Linked, None);
        let out = run_pipeline(&loci, &filter, &mut selector, &ProgressBar::hidden()).unwrap();

        assert_eq!(out.included(), 0);
        assert_eq!(out.reports[0].taxa, 2);
        assert_eq!(out.reports[0].status, LocusStatus::NoSnps);
    }

    #[test]
    fn test_malformed_locus_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        write_locus(dir.path(), "good.nexus", &[("x", "AC"), ("y", "AG")]);
        std::fs::write(dir.path().join("open.nexus"), "matrix\nx AC\n").unwrap();

        let loci = discover_loci(dir.path(), DEFAULT_SUFFIX, &NameFilter::default()).unwrap();
        let mut selector = SiteSelector::new(LinkageMode::Linked, None);
        let err = run_pipeline(&loci, &NameFilter::default(), &mut selector, &ProgressBar::hidden())
            .unwrap_err();
        assert!(matches!(err, SnpError::Parse { ref file, .. } if file.ends_with("open.nexus")));
    }

    #[test]
    fn test_linked_output_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        write_shuffled_loci(dir.path());

        let first = render_phylip(dir.path(), LinkageMode::Linked, None);
        let second = render_phylip(dir.path(), LinkageMode::Linked, None);
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // locus_a: cols 1,3; locus_b: col 1; locus_c: cols 0,2,4,5
        assert_eq!(lines[0], "4 7");
        assert!(lines[1].starts_with("t1 "));
        assert!(lines[4].starts_with("t4 "));
        assert!(lines[4].ends_with("TC?????"));
    }

    #[test]
    fn test_seeded_unlinked_output_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        write_shuffled_loci(dir.path());

        let first = render_phylip(dir.path(), LinkageMode::Unlinked, Some(2024));
        let second = render_phylip(dir.path(), LinkageMode::Unlinked, Some(2024));
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert_eq!(text.lines().next(), Some("4 3"));
    }
}
