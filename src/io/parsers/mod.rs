//! Parsing of VCF headers and data lines.
//!
//! Reading a VCF happens in two stages that share one open file handle.
//! First the header is consumed: the `##` metadata lines are accumulated
//! raw (their content is not needed downstream), and the single `#CHROM`
//! column-header line is validated and yields the ordered sample
//! identifiers. Then [`VcfRecordIterator`] lazily parses each remaining
//! data line into a [`VariantRecord`], decoding genotype columns only for
//! the samples the caller selected.
//!
//! Parsing errors are classified per line: the iterator yields
//! [`Result`] items, so the caller decides between failing fast and
//! skipping bad lines (see [`BadLinePolicy`]).
//!
//! [`VariantRecord`]: crate::variant::VariantRecord
//! [`BadLinePolicy`]: crate::frame::BadLinePolicy

pub mod header;
pub mod vcf;

pub use header::{VcfHeader, FIXED_COLUMNS};
pub use vcf::VcfRecordIterator;
