use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vcfframe::{
    commands::{vcfframe_convert, vcfframe_samples},
    error::VcfFrameError,
};

const INFO: &str = "\
vcfframe: load VCF files into tables
usage: vcfframe [--help] <subcommand>

Subcommands:

  convert: convert a VCF file into a table, written as TSV.

  samples: list the sample identifiers in a VCF header.

";

#[derive(Parser)]
#[clap(name = "vcfframe")]
#[clap(about = INFO)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Convert {
        /// an input VCF file (plaintext or gzip-compressed)
        #[arg(required = true)]
        vcf: PathBuf,

        /// comma-separated sample identifiers whose genotypes to keep
        #[arg(long, value_delimiter = ',')]
        samples: Option<Vec<String>>,

        /// keep the genotypes of every sample in the header
        #[arg(long, conflicts_with = "samples")]
        all_samples: bool,

        /// keep every per-genotype FORMAT field (AD, DP, etc.), not just the call
        #[arg(long)]
        format_data: bool,

        /// exclude malformed lines instead of aborting on the first one
        #[arg(long)]
        skip_bad_lines: bool,

        /// an optional output file (standard output will be used if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Samples {
        /// an input VCF file (plaintext or gzip-compressed)
        #[arg(required = true)]
        vcf: PathBuf,
    },
}

fn main() -> Result<(), VcfFrameError> {
    let cli = Cli::parse();
    let report = match cli.command {
        Some(Commands::Convert {
            vcf,
            samples,
            all_samples,
            format_data,
            skip_bad_lines,
            output,
        }) => vcfframe_convert(
            &vcf,
            samples,
            all_samples,
            format_data,
            skip_bad_lines,
            output.as_ref(),
        )?
        .report,
        Some(Commands::Samples { vcf }) => vcfframe_samples(&vcf)?.report,
        None => {
            println!("{}\n", INFO);
            std::process::exit(1);
        }
    };
    if !report.is_empty() {
        report.print();
    }
    Ok(())
}
