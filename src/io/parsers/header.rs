//! VCF header parsing.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::VcfFrameError;

/// The eight fixed VCF column names, in the only order the format allows.
pub const FIXED_COLUMNS: [&str; 8] = [
    "CHROM", "POS", "ID", "REF", "ALT", "QUAL", "FILTER", "INFO",
];

/// A parsed VCF header.
///
/// Holds the raw `##` metadata lines and the ordered sample identifiers
/// from the `#CHROM` column-header line. Sample order is authoritative: it
/// is the order sample selections are resolved against and the order
/// genotype columns are emitted in when all samples are kept.
#[derive(Clone, Debug)]
pub struct VcfHeader {
    /// Raw `##` metadata lines, uninterpreted.
    pub meta: Vec<String>,
    /// Sample identifiers in header order; empty if the file carries no
    /// genotype section.
    pub samples: Vec<String>,
}

impl VcfHeader {
    /// Consume the header from `reader`: all leading `##` metadata lines,
    /// then exactly one `#CHROM` column-header line. Returns the header and
    /// the number of lines consumed.
    ///
    /// # Errors
    /// [`VcfFrameError::MissingHeader`] if a data line or the end of the
    /// file is reached first; [`VcfFrameError::MalformedHeader`] if the
    /// column-header line does not match the VCF layout.
    pub(crate) fn read(reader: &mut impl BufRead) -> Result<(Self, u64), VcfFrameError> {
        let mut meta = Vec::new();
        let mut line = String::new();
        let mut lines_read = 0u64;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(VcfFrameError::MissingHeader);
            }
            lines_read += 1;

            if line.starts_with("##") {
                meta.push(line.trim_end().to_string());
            } else if line.starts_with('#') {
                let header = Self::from_column_line(line.trim_end(), meta)?;
                return Ok((header, lines_read));
            } else {
                // a data line before any column header
                return Err(VcfFrameError::MissingHeader);
            }
        }
    }

    /// Parse the `#CHROM ...` column-header line.
    fn from_column_line(line: &str, meta: Vec<String>) -> Result<Self, VcfFrameError> {
        let stripped = line.strip_prefix('#').unwrap_or(line);
        let columns: Vec<&str> = stripped.split('\t').collect();

        if columns.len() < FIXED_COLUMNS.len() {
            return Err(VcfFrameError::MalformedHeader(format!(
                "expected at least {} columns, found {}",
                FIXED_COLUMNS.len(),
                columns.len()
            )));
        }
        for (found, expected) in columns.iter().zip(FIXED_COLUMNS.iter()) {
            if found != expected {
                return Err(VcfFrameError::MalformedHeader(format!(
                    "expected column '{}', found '{}'",
                    expected, found
                )));
            }
        }

        // sample identifiers only follow a literal FORMAT column
        let samples: Vec<String> = match columns.get(FIXED_COLUMNS.len()) {
            None => Vec::new(),
            Some(&"FORMAT") => columns[FIXED_COLUMNS.len() + 1..]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            Some(other) => {
                return Err(VcfFrameError::MalformedHeader(format!(
                    "expected 'FORMAT' after the fixed columns, found '{}'",
                    other
                )))
            }
        };

        let mut seen = HashSet::new();
        for sample in &samples {
            if !seen.insert(sample.as_str()) {
                return Err(VcfFrameError::MalformedHeader(format!(
                    "duplicated sample '{}'",
                    sample
                )));
            }
        }

        Ok(Self { meta, samples })
    }
}
