//! Genotype and FORMAT field projection.
//!
//! Decoded records carry their FORMAT keys and raw per-sample values;
//! this module expands them into the named cells that become table
//! columns. Two modes exist: genotype-only (one `<sample>` column holding
//! just the call) and full FORMAT data (one `<sample>_<key>` column per
//! key). Records whose FORMAT list omits a key yield missing values, not
//! errors — VCF permits this kind of schema drift across a file.

use crate::variant::{VariantRecord, MISSING_FIELD};

/// The conventional genotype-call FORMAT key.
pub const GENOTYPE_KEY: &str = "GT";

/// One projected table cell: the column name and its (possibly missing)
/// value.
pub(crate) type GenotypeCell = (String, Option<String>);

/// Check that a call is shaped like a genotype: allele indices (digits) or
/// the missing token, separated by `/` or `|`, e.g. `0/1`, `.|.`, `2`.
pub(crate) fn looks_like_genotype(call: &str) -> bool {
    !call.is_empty()
        && call
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '/' || c == '|')
}

/// Map a raw sample value to a table cell value, treating the VCF missing
/// token as a missing cell.
fn cell_value(value: &str) -> Option<String> {
    if value == MISSING_FIELD {
        None
    } else {
        Some(value.to_string())
    }
}

/// Expand a record's FORMAT/sample data into named table cells, in sample
/// selection order.
///
/// With `keep_format_data`, every key in the record's FORMAT list becomes a
/// `<sample>_<key>` cell. Otherwise only the genotype call is kept, in a
/// column named after the sample; records without a `GT` key yield a
/// missing value for every sample on that row.
pub(crate) fn project_genotypes(
    record: &VariantRecord,
    keep_format_data: bool,
) -> Vec<GenotypeCell> {
    let mut cells = Vec::new();

    if keep_format_data {
        for (sample, values) in &record.sample_values {
            for (key, value) in record.format_keys.iter().zip(values.iter()) {
                cells.push((format!("{}_{}", sample, key), cell_value(value)));
            }
        }
    } else {
        let genotype_index = record
            .format_keys
            .iter()
            .position(|key| key == GENOTYPE_KEY);
        for (sample, values) in &record.sample_values {
            let call = genotype_index.and_then(|index| cell_value(&values[index]));
            cells.push((sample.clone(), call));
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::{looks_like_genotype, project_genotypes};
    use crate::variant::VariantRecord;
    use indexmap::IndexMap;

    fn record(format_keys: &[&str], samples: &[(&str, &[&str])]) -> VariantRecord {
        let mut sample_values = IndexMap::new();
        for (name, values) in samples {
            sample_values.insert(
                name.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            );
        }
        VariantRecord {
            chrom: "chr1".to_string(),
            pos: 100,
            id: None,
            ref_allele: "A".to_string(),
            alt: vec!["T".to_string()],
            qual: None,
            filter: None,
            info: IndexMap::new(),
            format_keys: format_keys.iter().map(|k| k.to_string()).collect(),
            sample_values,
        }
    }

    #[test]
    fn test_genotype_shapes() {
        for call in ["0/1", "1|1", "./.", ".", "0", "0/1/2", "10|11"] {
            assert!(looks_like_genotype(call), "rejected {call}");
        }
        for call in ["", "A/T", "0_1", "PASS"] {
            assert!(!looks_like_genotype(call), "accepted {call}");
        }
    }

    #[test]
    fn test_genotype_only_projection() {
        let record = record(
            &["GT", "DP"],
            &[("HG00096", &["0/1", "15"]), ("HG00097", &["0/0", "20"])],
        );
        let cells = project_genotypes(&record, false);
        assert_eq!(
            cells,
            vec![
                ("HG00096".to_string(), Some("0/1".to_string())),
                ("HG00097".to_string(), Some("0/0".to_string())),
            ]
        );
    }

    #[test]
    fn test_missing_genotype_key_gives_missing_cell() {
        let record = record(&["DP"], &[("HG00096", &["15"])]);
        let cells = project_genotypes(&record, false);
        assert_eq!(cells, vec![("HG00096".to_string(), None)]);
    }

    #[test]
    fn test_format_data_projection() {
        let record = record(
            &["GT", "AD"],
            &[("HG00096", &["0/1", "10,5"]), ("HG00097", &["0/0", "."])],
        );
        let cells = project_genotypes(&record, true);
        assert_eq!(
            cells,
            vec![
                ("HG00096_GT".to_string(), Some("0/1".to_string())),
                ("HG00096_AD".to_string(), Some("10,5".to_string())),
                ("HG00097_GT".to_string(), Some("0/0".to_string())),
                ("HG00097_AD".to_string(), None),
            ]
        );
    }
}
