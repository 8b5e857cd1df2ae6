//! # Format-Specific Codecs
//!
//! This module contains one codec per concrete on-disk layout, all behind
//! the [`DocumentFormat`] trait, plus the registry that resolves a format
//! name (or historical alias) to its codec:
//!
//! - `dat` - EMBL-Hamburg `.dat` experimental data (2/3/4-column variants)
//! - `fir`/`fit` - ATSAS fit results in their 3/4/5-column variants
//! - `int` - CRYSOL theoretical intensities
//! - `csv` - comma separated values
//!
//! Codecs are pure functions of their input: decode consumes a complete
//! in-memory buffer and returns a [`Document`], encode does the reverse.
//! Neither touches the file system, and the registry is immutable after its
//! one-time initialization, so independent calls may run concurrently
//! without shared state.

mod columns;
mod csv;
mod dat;
mod descriptor;
mod error;
mod fir_fit;
mod int;
mod numeric;
mod registry;


pub use descriptor::{ColumnRole, CurveDecl, FormatDescriptor};
pub use error::CodecError;
pub use numeric::{COLUMN_WIDTH, SIGNIFICANT_DECIMALS};
pub use registry::FormatRegistry;

use crate::document::Document;

/// A paired decoder/encoder for one concrete file layout.
///
/// Implementations are stateless and [`Send`]`+`[`Sync`]; both operations
/// are all-or-nothing and never partially populate their output.
pub trait DocumentFormat: Send + Sync {
    /// The schema of this layout.
    fn descriptor(&self) -> &FormatDescriptor;

    /// Parse raw bytes into a document.
    fn decode(&self, data: &[u8]) -> Result<Document, CodecError>;

    /// Serialize a document into raw bytes, validating it against the
    /// descriptor first.
    fn encode(&self, doc: &Document) -> Result<Vec<u8>, CodecError>;
}

/// Decode `data` with the codec registered under `format`.
///
/// Convenience wrapper over [`FormatRegistry::resolve`] on the global
/// registry.
pub fn decode(format: &str, data: &[u8]) -> Result<Document, CodecError> {
    FormatRegistry::global().resolve(format)?.decode(data)
}

/// Encode `doc` with the codec registered under `format`.
///
/// Convenience wrapper over [`FormatRegistry::resolve`] on the global
/// registry.
pub fn encode(format: &str, doc: &Document) -> Result<Vec<u8>, CodecError> {
    FormatRegistry::global().resolve(format)?.encode(doc)
}
