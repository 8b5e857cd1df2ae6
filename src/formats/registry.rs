//! The process-wide format registry.

use std::sync::OnceLock;

use super::error::CodecError;
use super::{csv, dat, fir_fit, int, DocumentFormat, FormatDescriptor};

static GLOBAL: OnceLock<FormatRegistry> = OnceLock::new();

/// An immutable mapping from format names (and aliases) to codecs.
///
/// The registry is built once, at first use, and never changes afterwards;
/// lookups are lock-free reads against that stable snapshot, so resolving
/// formats from multiple threads needs no coordination.
pub struct FormatRegistry {
    codecs: Vec<Box<dyn DocumentFormat>>,
}

impl FormatRegistry {
    /// The shared registry holding every built-in codec.
    pub fn global() -> &'static FormatRegistry {
        GLOBAL.get_or_init(FormatRegistry::builtin)
    }

    /// A fresh registry holding every built-in codec.
    ///
    /// [`global`](FormatRegistry::global) is the usual entry point; this
    /// exists for callers that want an isolated instance.
    pub fn builtin() -> FormatRegistry {
        FormatRegistry {
            codecs: vec![
                Box::new(dat::dat_3_column()),
                Box::new(dat::dat_2_column()),
                Box::new(dat::dat_4_column()),
                Box::new(fir_fit::fir_4_column()),
                Box::new(fir_fit::fit_3_column()),
                Box::new(fir_fit::fit_4_column()),
                Box::new(fir_fit::fit_5_column()),
                Box::new(int::codec()),
                Box::new(csv::CsvCodec),
            ],
        }
    }

    /// Resolve a format name or historical alias, case-insensitively.
    pub fn resolve(&self, name: &str) -> Result<&dyn DocumentFormat, CodecError> {
        self.codecs
            .iter()
            .find(|c| c.descriptor().matches_name(name))
            .map(|c| c.as_ref())
            .ok_or_else(|| CodecError::UnknownFormat(name.to_string()))
    }

    /// The first codec claiming the given file extension, e.g. `"dat"`.
    ///
    /// Extensions are ambiguous for the `.fit` family; callers that know
    /// the producing program should resolve by name instead.
    pub fn find_by_extension(&self, ext: &str) -> Option<&dyn DocumentFormat> {
        self.codecs
            .iter()
            .find(|c| c.descriptor().claims_extension(ext))
            .map(|c| c.as_ref())
    }

    /// Iterate over the descriptors of all registered codecs, in
    /// registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.codecs.iter().map(|c| c.descriptor())
    }

    /// Number of registered codecs.
    pub fn format_count(&self) -> usize {
        self.codecs.len()
    }
}
