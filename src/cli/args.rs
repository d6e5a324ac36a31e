// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// snpconcat - Concatenate SNPs from per-locus NEXUS alignments into a PHYLIP matrix
pub struct Args {
    /// input directory, then linkage mode: linked (all SNPs per locus) or unlinked (one random SNP per locus)
    #[argh(positional)]
    pub paths: Vec<String>,

    /// output PHYLIP file (default: snp_concat_<mode>.phy in the working directory)
    #[argh(option)]
    pub output: Option<String>,

    /// random seed for unlinked site selection (default: drawn from entropy)
    #[argh(option)]
    pub seed: Option<u64>,

    /// file name suffix identifying locus files (default: nexus)
    #[argh(option)]
    pub suffix: Option<String>,

    /// width of the PHYLIP taxon name field (default: 30)
    #[argh(option)]
    pub name_width: Option<usize>,

    /// include only locus files whose name matches regex pattern
    #[argh(option)]
    pub include_loci: Option<String>,

    /// exclude locus files whose name matches regex pattern
    #[argh(option)]
    pub exclude_loci: Option<String>,

    /// include only taxa matching regex pattern
    #[argh(option)]
    pub include_taxa: Option<String>,

    /// exclude taxa matching regex pattern
    #[argh(option)]
    pub exclude_taxa: Option<String>,

    /// write a per-locus summary (TSV) to this path
    #[argh(option)]
    pub locus_report: Option<String>,

    /// hide the progress bar
    #[argh(switch)]
    pub no_progress: bool,

    /// list the loci that would be processed, then exit
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

/// Number of positional arguments: input directory and linkage mode
pub const POSITIONAL_COUNT: usize = 2;

impl Args {
    /// Input directory and linkage token, or an error unless exactly two positionals were given
    pub fn positionals(&self) -> Result<(&str, &str), String> {
        match self.paths.as_slice() {
            [input, linkage] => Ok((input.as_str(), linkage.as_str())),
            other => Err(format!(
                "expected {} positional arguments (input directory, linkage mode), got {}",
                POSITIONAL_COUNT,
                other.len()
            )),
        }
    }

    /// Fill unset arguments from a configuration file; command line values win
    pub fn with_config_file(mut self, path: &str) -> Result<Self, String> {
        let config = super::Config::from_file(path)?;
        self.apply_config(config);
        Ok(self)
    }

    pub fn apply_config(&mut self, config: super::Config) {
        fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
            if slot.is_none() {
                *slot = value;
            }
        }

        if self.paths.is_empty() {
            self.paths.extend(config.input);
            self.paths.extend(config.linkage);
        }
        fill(&mut self.output, config.output);
        fill(&mut self.seed, config.seed);
        fill(&mut self.suffix, config.suffix);
        fill(&mut self.name_width, config.name_width);
        fill(&mut self.include_loci, config.include_loci);
        fill(&mut self.exclude_loci, config.exclude_loci);
        fill(&mut self.include_taxa, config.include_taxa);
        fill(&mut self.exclude_taxa, config.exclude_taxa);
        fill(&mut self.locus_report, config.locus_report);

        self.no_progress |= config.no_progress.unwrap_or(false);
        self.dry_run |= config.dry_run.unwrap_or(false);
    }
}
