//! # vcfframe
//!
//! `vcfframe` loads the variants of a [VCF
//! file](https://samtools.github.io/hts-specs/VCFv4.2.pdf) into a
//! [`polars::frame::DataFrame`]: one row per data line, with the fixed VCF
//! columns, one column per INFO key seen anywhere in the file, and —
//! optionally — per-sample genotype columns. Input files can be plaintext or
//! gzip-compressed; compression is detected from the file contents, so a
//! misnamed file is still read correctly.
//!
//! By default no genotypes are read at all. To keep them, select samples
//! explicitly with [`KeepSamples`] (a single identifier or a list), and
//! optionally keep every per-genotype FORMAT field rather than just the
//! call:
//!
//! ```no_run
//! use vcfframe::prelude::*;
//!
//! // variants only: no genotype columns
//! let df = vcf_to_dataframe("variants.vcf.gz", KeepSamples::None, false)?;
//!
//! // one genotype column for sample HG00096
//! let df = vcf_to_dataframe("variants.vcf.gz", "HG00096", false)?;
//!
//! // every FORMAT field for two samples, as HG00096_GT, HG00096_DP, etc.
//! let df = vcf_to_dataframe("variants.vcf.gz", vec!["HG00096", "HG00097"], true)?;
//! # Ok::<(), VcfFrameError>(())
//! ```
//!
//! [`KeepSamples`]: crate::samples::KeepSamples
//! [`vcf_to_dataframe`]: crate::frame::vcf_to_dataframe

pub mod commands;
pub mod error;
pub mod frame;
pub mod genotypes;
pub mod io;
pub mod reporting;
pub mod samples;
pub mod table;
pub mod test_utilities;
pub mod variant;

/// A 1-based genomic coordinate.
pub type Position = i64;

pub mod prelude {
    pub use crate::error::VcfFrameError;
    pub use crate::frame::{
        available_samples, vcf_to_dataframe, vcf_to_dataframe_with_policy, BadLinePolicy,
        VcfConversion,
    };
    pub use crate::io::parsers::{VcfHeader, VcfRecordIterator};
    pub use crate::samples::KeepSamples;
    pub use crate::variant::{InfoValue, VariantRecord};
}
