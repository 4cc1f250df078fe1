//! Types and methods for reading and parsing input and writing output.

pub mod file;
pub mod parsers;
pub mod tsv;

pub use file::{InputFile, OutputFile};
pub use parsers::{VcfHeader, VcfRecordIterator};
pub use tsv::VCF_TSV;
