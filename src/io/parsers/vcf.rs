//! A lazy parser for VCF data lines.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::VcfFrameError;
use crate::genotypes::{looks_like_genotype, GENOTYPE_KEY};
use crate::io::file::InputFile;
use crate::io::parsers::header::{VcfHeader, FIXED_COLUMNS};
use crate::samples::KeepSamples;
use crate::variant::{InfoValue, VariantRecord, MISSING_FIELD};
use crate::Position;

// line buffer preallocation
pub const PARSE_CAPACITY: usize = 512;

// the column holding the FORMAT field when sample data is present
const FORMAT_COLUMN: usize = FIXED_COLUMNS.len();

/// A lazy parser over the data lines of a VCF file.
///
/// The header is consumed once at construction, and the requested sample
/// selection is resolved against it up front. Iteration then yields one
/// [`VariantRecord`] per data line. A single file handle is held for the
/// duration of the iteration and released when this iterator is dropped.
pub struct VcfRecordIterator {
    reader: BufReader<Box<dyn std::io::Read>>,
    header: VcfHeader,
    samples: Vec<(String, usize)>,
    line_buffer: String,
    line_number: u64,
}

impl std::fmt::Debug for VcfRecordIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VcfRecordIterator").finish_non_exhaustive()
    }
}

impl VcfRecordIterator {
    /// Open `filepath` (plaintext or gzip-compressed), parse its header,
    /// and prepare to iterate over records, decoding genotype data for the
    /// samples selected by `keep`.
    pub fn new(
        filepath: impl Into<PathBuf>,
        keep: &KeepSamples,
    ) -> Result<Self, VcfFrameError> {
        let input_file = InputFile::new(filepath);
        let mut reader = input_file.reader()?;
        let (header, lines_read) = VcfHeader::read(&mut reader)?;
        let samples = keep.resolve(&header)?;
        let line_buffer = String::with_capacity(PARSE_CAPACITY);
        Ok(Self {
            reader,
            header,
            samples,
            line_buffer,
            line_number: lines_read,
        })
    }

    /// The parsed header.
    pub fn header(&self) -> &VcfHeader {
        &self.header
    }

    /// The retained sample identifiers, in selection order.
    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|(name, _)| name.as_str())
    }
}

impl Iterator for VcfRecordIterator {
    type Item = Result<VariantRecord, VcfFrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim_end_matches(['\n', '\r']);
                    if line.trim().is_empty() || line.starts_with('#') {
                        continue;
                    }
                    return Some(parse_vcf_record(line, self.line_number, &self.samples));
                }
                Err(e) => return Some(Err(VcfFrameError::IOError(e))),
            }
        }
    }
}

fn malformed(line_number: u64, reason: String, contents: &str) -> VcfFrameError {
    VcfFrameError::MalformedRecord {
        line: line_number,
        reason,
        contents: contents.to_string(),
    }
}

/// Map the VCF missing token `.` to `None`; anything else is kept verbatim.
fn optional_field(field: &str) -> Option<String> {
    if field == MISSING_FIELD {
        None
    } else {
        Some(field.to_string())
    }
}

/// Parse a single column into `T`, with line context on failure.
fn parse_column<T: FromStr>(
    field: &str,
    name: &str,
    line_number: u64,
    line: &str,
) -> Result<T, VcfFrameError>
where
    <T as FromStr>::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| malformed(line_number, format!("invalid {} field '{}': {}", name, field, e), line))
}

/// Decompose the semicolon-delimited INFO field. Entries without `=` are
/// flags; values containing commas are kept as lists.
fn parse_info(field: &str) -> IndexMap<String, InfoValue> {
    let mut info = IndexMap::new();
    if field == MISSING_FIELD {
        return info;
    }
    for entry in field.split(';') {
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((key, value)) => info.insert(key.to_string(), InfoValue::from_entry(value)),
            None => info.insert(entry.to_string(), InfoValue::Flag),
        };
    }
    info
}

/// Decode the FORMAT field and the retained samples' value columns.
///
/// Each retained sample's colon-separated values must align one-to-one with
/// the FORMAT keys; the only exception is a field of a bare `.`, which
/// stands in for every key. Genotype calls are checked for shape here,
/// while the line content is still at hand for error context.
fn parse_genotype_columns(
    columns: &[&str],
    line_number: u64,
    line: &str,
    samples: &[(String, usize)],
) -> Result<(Vec<String>, IndexMap<String, Vec<String>>), VcfFrameError> {
    let format_field = columns.get(FORMAT_COLUMN).ok_or_else(|| {
        malformed(
            line_number,
            "genotype data requested but the line has no FORMAT field".to_string(),
            line,
        )
    })?;
    let format_keys: Vec<String> = format_field.split(':').map(String::from).collect();
    let genotype_index = format_keys.iter().position(|key| key == GENOTYPE_KEY);

    let mut sample_values = IndexMap::with_capacity(samples.len());
    for (name, sample_index) in samples {
        let field = columns.get(FORMAT_COLUMN + 1 + sample_index).ok_or_else(|| {
            malformed(
                line_number,
                format!("no genotype field for sample '{}'", name),
                line,
            )
        })?;

        let values: Vec<String> = if *field == MISSING_FIELD {
            vec![MISSING_FIELD.to_string(); format_keys.len()]
        } else {
            field.split(':').map(String::from).collect()
        };
        if values.len() != format_keys.len() {
            return Err(malformed(
                line_number,
                format!(
                    "sample '{}' has {} values for {} FORMAT keys",
                    name,
                    values.len(),
                    format_keys.len()
                ),
                line,
            ));
        }
        if let Some(index) = genotype_index {
            if !looks_like_genotype(&values[index]) {
                return Err(malformed(
                    line_number,
                    format!(
                        "'{}' does not look like a genotype call (sample '{}')",
                        values[index], name
                    ),
                    line,
                ));
            }
        }
        sample_values.insert(name.clone(), values);
    }

    Ok((format_keys, sample_values))
}

/// Parse one tab-delimited VCF data line into a [`VariantRecord`],
/// decoding sample columns only for the resolved `samples` selection.
pub(crate) fn parse_vcf_record(
    line: &str,
    line_number: u64,
    samples: &[(String, usize)],
) -> Result<VariantRecord, VcfFrameError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < FIXED_COLUMNS.len() {
        return Err(malformed(
            line_number,
            format!(
                "expected at least {} tab-delimited fields, found {}",
                FIXED_COLUMNS.len(),
                columns.len()
            ),
            line,
        ));
    }

    let pos: Position = parse_column(columns[1], "POS", line_number, line)?;
    let alt: Vec<String> = if columns[4] == MISSING_FIELD {
        Vec::new()
    } else {
        columns[4].split(',').map(String::from).collect()
    };
    let qual: Option<f64> = match optional_field(columns[5]) {
        None => None,
        Some(qual) => Some(parse_column(&qual, "QUAL", line_number, line)?),
    };

    let (format_keys, sample_values) = if samples.is_empty() {
        (Vec::new(), IndexMap::new())
    } else {
        parse_genotype_columns(&columns, line_number, line, samples)?
    };

    Ok(VariantRecord {
        chrom: columns[0].to_string(),
        pos,
        id: optional_field(columns[2]),
        ref_allele: columns[3].to_string(),
        alt,
        qual,
        filter: optional_field(columns[6]),
        info: parse_info(columns[7]),
        format_keys,
        sample_values,
    })
}
