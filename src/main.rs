// main.rs - CLI entry point

use std::time::Instant;

use argh::FromArgs;
use snpconcat::prelude::*;

const USAGE_EXIT_CODE: i32 = 2;

/// How a run ended when it did not fail
enum Outcome {
    Done,
    Usage(String),
}

fn main() {
    match run_main() {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Usage(reason)) => {
            eprintln!("❌ {}", reason);
            print_usage();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("❌ ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    let command = std::env::args().next().unwrap_or_else(|| "snpconcat".to_string());
    match Args::from_args(&[command.as_str()], &["--help"]) {
        Err(early_exit) => eprintln!("{}", early_exit.output),
        Ok(_) => eprintln!("usage: {} /path/to/nexus/files linked|unlinked", command),
    }
}

fn run_main() -> Result<Outcome, String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    if args.generate_config {
        println!("{}", Config::generate_sample());
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(Outcome::Done);
    }

    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    if let Err(reason) = args.positionals() {
        return Ok(Outcome::Usage(reason));
    }

    let validation = validate_args(&args)?;

    println!("🚀 snpconcat v{}", snpconcat::VERSION);
    let total_start = Instant::now();

    println!(
        "📂 Scanning {} for *{} files",
        validation.input_dir.display(),
        validation.suffix
    );
    let loci = discover_loci(&validation.input_dir, &validation.suffix, &validation.loci_filter)?;
    println!("✅ Found {} locus files", loci.len());

    if args.dry_run {
        for locus in &loci {
            println!("   [{}] {}", locus.index, locus.name);
        }
        println!("🔍 Dry run complete - no output written");
        return Ok(Outcome::Done);
    }

    let mut selector = SiteSelector::new(validation.linkage, validation.seed);
    match selector.mode() {
        LinkageMode::Linked => println!("🧬 Mode: linked (all SNPs per locus)"),
        LinkageMode::Unlinked => println!(
            "🧬 Mode: unlinked (one random SNP per locus, seed {})",
            selector.seed()
        ),
    }

    let pb = locus_progress(loci.len(), !args.no_progress);
    let output = run_pipeline(&loci, &validation.taxa_filter, &mut selector, &pb)?;

    if let Some(report_path) = &validation.locus_report {
        write_locus_report(report_path, &output.reports, &command_line)?;
    }

    if output.loci.is_empty() {
        println!("⚠️  No locus contained SNPs - writing an empty matrix");
    }

    let taxa = collect_taxa(&output.loci);
    let matrix = build_concat_matrix(&taxa, &output.loci);
    write_phylip(&validation.output_path, &matrix, validation.name_width)?;

    println!("\n📊 Summary:");
    println!("   Loci scanned:   {}", loci.len());
    println!("   Loci with SNPs: {}", output.included());
    println!("   Loci skipped:   {}", output.skipped());
    println!("   Taxa:           {}", matrix.taxon_count());
    println!("   Sites:          {}", matrix.site_count());
    println!(
        "\n⏱️  Total execution time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );
    Ok(Outcome::Done)
}
