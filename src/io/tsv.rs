//! TSV serializing helpers, functionality, etc.

use lazy_static::lazy_static;

lazy_static! {
    /// The standard VCF TSV output configuration: missing values are
    /// written as the format's own missing token.
    pub static ref VCF_TSV: TsvConfig = TsvConfig {
        no_value_string: ".".to_string(),
    };
}

/// This is an extensible type to handle common
/// TSV output configurations, e.g. what to print
/// for missing values.
pub struct TsvConfig {
    pub no_value_string: String,
}
