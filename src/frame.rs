//! Converting VCF files into [`DataFrame`]s.

use std::path::PathBuf;

use polars::prelude::DataFrame;

use crate::error::VcfFrameError;
use crate::io::parsers::VcfRecordIterator;
use crate::samples::KeepSamples;
use crate::table::TableBuilder;

/// What to do with a malformed data line.
///
/// Fail-fast is the default everywhere: a genomics pipeline should not
/// quietly work from a shrunken table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BadLinePolicy {
    /// Abort the whole conversion on the first malformed line.
    #[default]
    FailFast,
    /// Exclude malformed lines from the table and report them in
    /// [`VcfConversion::skipped`].
    Skip,
}

/// A malformed line excluded under [`BadLinePolicy::Skip`].
#[derive(Clone, Debug)]
pub struct SkippedLine {
    /// 1-based physical line number in the input file.
    pub line: u64,
    pub reason: String,
}

/// The result of a conversion: the table, plus the lines skipped under
/// [`BadLinePolicy::Skip`] (always empty under fail-fast).
#[derive(Debug)]
pub struct VcfConversion {
    pub frame: DataFrame,
    pub skipped: Vec<SkippedLine>,
}

/// Generate a [`DataFrame`] of the variants present in a VCF, one row per
/// data line, in input order.
///
/// To avoid high consumption of RAM and cycles, the default behavior is
/// not to read any of the genotypes. In case you want to keep the
/// genotypes, you have to set `keep_samples` explicitly with a sample ID
/// or a list of sample IDs.
///
/// If you set `keep_samples` and `keep_format_data`, it will keep the
/// metadata for each genotype call, e.g. AD, DP, GQ, etc., in one
/// `<sample>_<key>` column per FORMAT key. If not, it will only keep the
/// genotype calls (GT), in one column per sample.
///
/// This fails fast: the first malformed data line aborts the conversion
/// and no table is returned. Use [`vcf_to_dataframe_with_policy`] with
/// [`BadLinePolicy::Skip`] to exclude bad lines instead.
pub fn vcf_to_dataframe(
    filepath: impl Into<PathBuf>,
    keep_samples: impl Into<KeepSamples>,
    keep_format_data: bool,
) -> Result<DataFrame, VcfFrameError> {
    let conversion = vcf_to_dataframe_with_policy(
        filepath,
        keep_samples,
        keep_format_data,
        BadLinePolicy::FailFast,
    )?;
    Ok(conversion.frame)
}

/// Like [`vcf_to_dataframe`], with an explicit malformed-line policy.
///
/// Under [`BadLinePolicy::Skip`], malformed lines are excluded from the
/// table and returned in [`VcfConversion::skipped`] with their line
/// numbers, so nothing disappears silently. Header, IO, and unknown-sample
/// errors are fatal under either policy.
pub fn vcf_to_dataframe_with_policy(
    filepath: impl Into<PathBuf>,
    keep_samples: impl Into<KeepSamples>,
    keep_format_data: bool,
    policy: BadLinePolicy,
) -> Result<VcfConversion, VcfFrameError> {
    let keep = keep_samples.into();
    let records = VcfRecordIterator::new(filepath, &keep)?;
    let samples: Vec<String> = records.samples().map(String::from).collect();

    let mut builder = TableBuilder::new(samples, keep_format_data);
    let mut skipped = Vec::new();
    for result in records {
        match result {
            Ok(record) => builder.push_record(record),
            Err(VcfFrameError::MalformedRecord {
                line,
                reason,
                contents,
            }) => match policy {
                BadLinePolicy::FailFast => {
                    return Err(VcfFrameError::MalformedRecord {
                        line,
                        reason,
                        contents,
                    })
                }
                BadLinePolicy::Skip => skipped.push(SkippedLine { line, reason }),
            },
            Err(e) => return Err(e),
        }
    }

    Ok(VcfConversion {
        frame: builder.finish()?,
        skipped,
    })
}

/// Return the sample identifiers present in a VCF header, in header order.
pub fn available_samples(filepath: impl Into<PathBuf>) -> Result<Vec<String>, VcfFrameError> {
    let records = VcfRecordIterator::new(filepath, &KeepSamples::None)?;
    Ok(records.header().samples.clone())
}
