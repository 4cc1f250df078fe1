//! Assembling decoded records into a [`DataFrame`].

use indexmap::{IndexMap, IndexSet};
use polars::prelude::*;

use crate::error::VcfFrameError;
use crate::genotypes::project_genotypes;
use crate::variant::VariantRecord;
use crate::Position;

/// Accumulates decoded records into columnar vectors, then builds the
/// final [`DataFrame`].
///
/// The column schema is the union of everything seen across the whole
/// scan, resolved in one streaming pass: columns discovered mid-file are
/// backfilled with nulls for earlier rows, and rows missing a known column
/// get a null. So an INFO key appearing only in record 500 still produces
/// a column with nulls for rows 1–499. Column order is fixed: the seven
/// fixed variant columns, then INFO keys in first-seen order, then
/// genotype columns sample-major in selection order.
pub struct TableBuilder {
    keep_format_data: bool,
    samples: Vec<String>,
    nrows: usize,
    chrom: Vec<String>,
    pos: Vec<Position>,
    id: Vec<Option<String>>,
    ref_allele: Vec<String>,
    alt: Vec<Option<String>>,
    qual: Vec<Option<f64>>,
    filter: Vec<Option<String>>,
    info_columns: IndexMap<String, Vec<Option<String>>>,
    format_keys: IndexSet<String>,
    genotype_columns: IndexMap<String, Vec<Option<String>>>,
}

impl TableBuilder {
    /// Create a builder for the given retained samples (selection order)
    /// and projection mode.
    pub fn new(samples: Vec<String>, keep_format_data: bool) -> Self {
        Self {
            keep_format_data,
            samples,
            nrows: 0,
            chrom: Vec::new(),
            pos: Vec::new(),
            id: Vec::new(),
            ref_allele: Vec::new(),
            alt: Vec::new(),
            qual: Vec::new(),
            filter: Vec::new(),
            info_columns: IndexMap::new(),
            format_keys: IndexSet::new(),
            genotype_columns: IndexMap::new(),
        }
    }

    /// Add one decoded record as the next row.
    pub fn push_record(&mut self, record: VariantRecord) {
        if !record.sample_values.is_empty() {
            if self.keep_format_data {
                for key in &record.format_keys {
                    self.format_keys.insert(key.clone());
                }
            }
            for (name, value) in project_genotypes(&record, self.keep_format_data) {
                let column = self
                    .genotype_columns
                    .entry(name)
                    .or_insert_with(|| vec![None; self.nrows]);
                column.push(value);
            }
        }

        for (key, value) in &record.info {
            let column = self
                .info_columns
                .entry(key.clone())
                .or_insert_with(|| vec![None; self.nrows]);
            column.push(Some(value.to_cell()));
        }

        self.chrom.push(record.chrom);
        self.pos.push(record.pos);
        self.id.push(record.id);
        self.ref_allele.push(record.ref_allele);
        self.alt.push(if record.alt.is_empty() {
            None
        } else {
            Some(record.alt.join(","))
        });
        self.qual.push(record.qual);
        self.filter.push(record.filter);
        self.nrows += 1;

        // null-fill the columns this record did not touch
        for column in self
            .info_columns
            .values_mut()
            .chain(self.genotype_columns.values_mut())
        {
            if column.len() < self.nrows {
                column.push(None);
            }
        }
    }

    /// Consume the builder and produce the final table. The builder holds
    /// no state afterwards; rows are in input order.
    pub fn finish(self) -> Result<DataFrame, VcfFrameError> {
        let TableBuilder {
            keep_format_data,
            samples,
            nrows,
            chrom,
            pos,
            id,
            ref_allele,
            alt,
            qual,
            filter,
            info_columns,
            format_keys,
            mut genotype_columns,
        } = self;

        let mut columns: Vec<Series> =
            Vec::with_capacity(7 + info_columns.len() + genotype_columns.len());
        columns.push(Series::new("chrom", chrom));
        columns.push(Series::new("pos", pos));
        columns.push(Series::new("id", id));
        columns.push(Series::new("ref", ref_allele));
        columns.push(Series::new("alt", alt));
        columns.push(Series::new("qual", qual));
        columns.push(Series::new("filter", filter));

        for (key, values) in info_columns {
            columns.push(Series::new(&key, values));
        }

        if keep_format_data {
            // sample-major: all of one sample's keys before the next sample,
            // keys in the order they were first seen across the file
            for sample in &samples {
                for key in &format_keys {
                    let name = format!("{}_{}", sample, key);
                    let values = genotype_columns
                        .swap_remove(&name)
                        .unwrap_or_else(|| vec![None; nrows]);
                    columns.push(Series::new(&name, values));
                }
            }
        } else {
            for sample in &samples {
                let values = genotype_columns
                    .swap_remove(sample)
                    .unwrap_or_else(|| vec![None; nrows]);
                columns.push(Series::new(sample, values));
            }
        }

        Ok(DataFrame::new(columns)?)
    }
}
