// mod.rs - Output writers

use crate::core::concat::ConcatenatedMatrix;
use crate::core::pipeline::LocusReport;
use crate::core::selection::LinkageMode;
use crate::error::SnpError;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Fixed width of the taxon name field in PHYLIP output
pub const PHYLIP_NAME_WIDTH: usize = 30;

/// Default output file name for a linkage mode
pub fn default_output_name(mode: LinkageMode) -> String {
    format!("snp_concat_{}.phy", mode.as_str())
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), SnpError> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| SnpError::io(parent.display().to_string(), e))?;
        }
    }
    Ok(())
}

/// Reject taxon names that would leave no padding in the name field
pub fn check_name_width(matrix: &ConcatenatedMatrix, width: usize) -> Result<(), SnpError> {
    match matrix.rows().find(|(taxon, _)| taxon.chars().count() >= width) {
        Some((taxon, _)) => Err(SnpError::TaxonTooLong {
            taxon: taxon.to_string(),
            width,
        }),
        None => Ok(()),
    }
}

/// Serialize the matrix in PHYLIP format: a `<taxa> <sites>` header, then one
/// line per taxon (sorted) with the name padded to `width` followed by its sites.
pub fn format_phylip<W: Write>(
    writer: &mut W,
    matrix: &ConcatenatedMatrix,
    width: usize,
    path: &str,
) -> Result<(), SnpError> {
    check_name_width(matrix, width)?;
    let write_err = |e: std::io::Error| SnpError::io(path, e);

    writeln!(writer, "{} {}", matrix.taxon_count(), matrix.site_count()).map_err(write_err)?;
    for (taxon, sites) in matrix.rows() {
        write!(writer, "{:<width$}", taxon, width = width).map_err(write_err)?;
        writer.write_all(sites).map_err(write_err)?;
        writeln!(writer).map_err(write_err)?;
    }
    Ok(())
}

/// Write the concatenated matrix to `file_path` in PHYLIP format
pub fn write_phylip(file_path: &Path, matrix: &ConcatenatedMatrix, width: usize) -> Result<(), SnpError> {
    let path_str = file_path.display().to_string();
    // Fail before touching the filesystem
    check_name_width(matrix, width)?;

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path).map_err(|e| SnpError::io(path_str.as_str(), e))?;
    let mut writer = BufWriter::new(file);

    format_phylip(&mut writer, matrix, width, &path_str)?;

    writer.flush().map_err(|e| SnpError::io(path_str.as_str(), e))?;
    println!(
        "✅ SNP matrix written to: {} ({} taxa, {} sites)",
        path_str,
        matrix.taxon_count(),
        matrix.site_count()
    );
    Ok(())
}

/// Write the per-locus summary as TSV with a comment header
pub fn write_locus_report(file_path: &Path, reports: &[LocusReport], command_line: &str) -> Result<(), SnpError> {
    let path_str = file_path.display().to_string();
    let io_err = |e: std::io::Error| SnpError::io(path_str.as_str(), e);

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Command: {}", command_line).map_err(io_err)?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(io_err)?;
    writeln!(writer, "# snpconcat v{}", crate::VERSION).map_err(io_err)?;

    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for report in reports {
        tsv.serialize(report)
            .map_err(|e| SnpError::io(path_str.as_str(), e))?;
    }
    tsv.flush().map_err(io_err)?;

    println!("📋 Locus report written to: {} ({} loci)", path_str, reports.len());
    Ok(())
}
