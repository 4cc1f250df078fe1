//! Sample selection for genotype extraction.

use crate::error::VcfFrameError;
use crate::io::parsers::VcfHeader;

/// Which samples' genotype data to decode.
///
/// [`KeepSamples::None`] means variant-only output: no genotype columns
/// appear at all, regardless of any FORMAT data in the file. A single
/// sample identifier and a list of identifiers both convert into this type,
/// so callers can pass `"HG00096"` or `vec!["HG00096", "HG00097"]`
/// directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum KeepSamples {
    /// Keep no genotype data.
    #[default]
    None,
    /// Keep every sample in the header, in header order.
    All,
    /// Keep the named samples, in the given order.
    Samples(Vec<String>),
}

impl KeepSamples {
    /// Resolve this selection against the header into ordered
    /// `(identifier, sample index)` pairs.
    ///
    /// Identifiers match header samples case-sensitively and exactly. The
    /// resolution happens once per file, so per-record decoding never
    /// re-scans the header and column order is stable.
    ///
    /// # Errors
    /// [`VcfFrameError::UnknownSample`], naming the offending identifier,
    /// if a requested sample is not in the header.
    pub(crate) fn resolve(
        &self,
        header: &VcfHeader,
    ) -> Result<Vec<(String, usize)>, VcfFrameError> {
        match self {
            KeepSamples::None => Ok(Vec::new()),
            KeepSamples::All => Ok(header
                .samples
                .iter()
                .enumerate()
                .map(|(index, name)| (name.clone(), index))
                .collect()),
            KeepSamples::Samples(names) => names
                .iter()
                .map(|name| {
                    header
                        .samples
                        .iter()
                        .position(|sample| sample == name)
                        .map(|index| (name.clone(), index))
                        .ok_or_else(|| VcfFrameError::UnknownSample(name.clone()))
                })
                .collect(),
        }
    }
}

impl From<&str> for KeepSamples {
    fn from(sample: &str) -> Self {
        KeepSamples::Samples(vec![sample.to_string()])
    }
}

impl From<String> for KeepSamples {
    fn from(sample: String) -> Self {
        KeepSamples::Samples(vec![sample])
    }
}

impl From<Vec<String>> for KeepSamples {
    fn from(samples: Vec<String>) -> Self {
        KeepSamples::Samples(samples)
    }
}

impl From<Vec<&str>> for KeepSamples {
    fn from(samples: Vec<&str>) -> Self {
        KeepSamples::Samples(samples.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for KeepSamples {
    fn from(samples: &[&str]) -> Self {
        KeepSamples::Samples(samples.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<KeepSamples>> From<Option<T>> for KeepSamples {
    fn from(samples: Option<T>) -> Self {
        match samples {
            None => KeepSamples::None,
            Some(samples) => samples.into(),
        }
    }
}
