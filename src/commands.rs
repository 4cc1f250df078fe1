//! Command functions for the `vcfframe` binary.

use std::path::PathBuf;

use polars::prelude::{CsvWriter, SerWriter};

use crate::error::VcfFrameError;
use crate::frame::{available_samples, vcf_to_dataframe_with_policy, BadLinePolicy, VcfConversion};
use crate::io::file::OutputFile;
use crate::io::tsv::VCF_TSV;
use crate::reporting::{CommandOutput, Report};
use crate::samples::KeepSamples;

/// Convert a VCF file into a table, written as TSV to `output` (gzip-compressed
/// if the path ends in `.gz`) or pretty-printed to standard output.
pub fn vcfframe_convert(
    vcf: &PathBuf,
    samples: Option<Vec<String>>,
    all_samples: bool,
    format_data: bool,
    skip_bad_lines: bool,
    output: Option<&PathBuf>,
) -> Result<CommandOutput<()>, VcfFrameError> {
    let keep = if all_samples {
        KeepSamples::All
    } else {
        samples.into()
    };
    let policy = if skip_bad_lines {
        BadLinePolicy::Skip
    } else {
        BadLinePolicy::FailFast
    };

    let VcfConversion { mut frame, skipped } =
        vcf_to_dataframe_with_policy(vcf, keep, format_data, policy)?;

    let mut report = Report::new();
    if !skipped.is_empty() {
        report.add_issue(format!("skipped {} malformed line(s):", skipped.len()));
        for line in &skipped {
            report.add_issue(format!("  line {}: {}", line.line, line.reason));
        }
    }

    match output {
        Some(path) => {
            let output_file = OutputFile::new(path);
            let mut writer = output_file.writer()?;
            CsvWriter::new(&mut writer)
                .include_header(true)
                .with_separator(b'\t')
                .with_null_value(VCF_TSV.no_value_string.clone())
                .finish(&mut frame)?;
        }
        None => println!("{}", frame),
    }

    Ok(CommandOutput::new((), report))
}

/// List the sample identifiers in a VCF header, one per line.
pub fn vcfframe_samples(vcf: &PathBuf) -> Result<CommandOutput<Vec<String>>, VcfFrameError> {
    let samples = available_samples(vcf)?;
    for sample in &samples {
        println!("{}", sample);
    }
    Ok(CommandOutput::new(samples, Report::new()))
}
