//! Variant records and the INFO value model.

use indexmap::IndexMap;

use crate::Position;

/// The VCF missing-value token.
pub const MISSING_FIELD: &str = ".";

/// A single INFO entry value.
///
/// VCF INFO entries come in three shapes: presence-only flags (no `=`),
/// scalars, and comma-separated lists. These are kept distinct rather than
/// collapsed to a single string, so downstream consumers can decide whether
/// to explode lists or keep them joined.
#[derive(Clone, Debug, PartialEq)]
pub enum InfoValue {
    /// A key present without a value, e.g. `DB`.
    Flag,
    Scalar(String),
    List(Vec<String>),
}

impl InfoValue {
    /// Parse the value part of one `key=value` INFO entry.
    pub(crate) fn from_entry(value: &str) -> Self {
        if value.contains(',') {
            InfoValue::List(value.split(',').map(String::from).collect())
        } else {
            InfoValue::Scalar(value.to_string())
        }
    }

    /// Render this value as a single table cell. Flags become the literal
    /// `true`; lists keep their comma-joined text.
    pub fn to_cell(&self) -> String {
        match self {
            InfoValue::Flag => "true".to_string(),
            InfoValue::Scalar(value) => value.clone(),
            InfoValue::List(values) => values.join(","),
        }
    }
}

/// One decoded VCF data line.
///
/// `format_keys` and `sample_values` are only populated when genotype
/// extraction was requested; each retained sample's values are aligned
/// positionally with `format_keys`, and that alignment is checked at parse
/// time.
#[derive(Clone, Debug)]
pub struct VariantRecord {
    pub chrom: String,
    /// 1-based position.
    pub pos: Position,
    pub id: Option<String>,
    pub ref_allele: String,
    /// Alternate alleles; empty if the ALT field was the missing token.
    /// Multi-allelic sites keep all alleles in order; genotype calls are
    /// left as opaque strings, so allele-index interpretation is the
    /// caller's.
    pub alt: Vec<String>,
    pub qual: Option<f64>,
    pub filter: Option<String>,
    /// Decomposed INFO entries, in the order they appear on the line.
    pub info: IndexMap<String, InfoValue>,
    /// The record's FORMAT keys, e.g. `GT`, `AD`, `DP`.
    pub format_keys: Vec<String>,
    /// Raw per-key values for each retained sample, in selection order.
    pub sample_values: IndexMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::InfoValue;

    #[test]
    fn test_info_value_shapes() {
        assert_eq!(
            InfoValue::from_entry("50"),
            InfoValue::Scalar("50".to_string())
        );
        assert_eq!(
            InfoValue::from_entry("0.25,0.5"),
            InfoValue::List(vec!["0.25".to_string(), "0.5".to_string()])
        );
    }

    #[test]
    fn test_info_value_cells() {
        assert_eq!(InfoValue::Flag.to_cell(), "true");
        assert_eq!(InfoValue::Scalar("50".to_string()).to_cell(), "50");
        assert_eq!(
            InfoValue::List(vec!["10".to_string(), "5".to_string()]).to_cell(),
            "10,5"
        );
    }
}
