//! # saxsdoc - SAXS Curve Documents and Their File Formats
//!
//! `saxsdoc` is a document model and codec layer for small-angle X-ray
//! scattering (SAXS) curve files: numeric scattering measurements plus
//! free-form metadata, stored in a family of closely related
//! column-delimited text formats (experimental `.dat` files, `.fir`/`.fit`
//! fit results, CRYSOL `.int` intensities, CSV exports).
//!
//! ## Key Features
//!
//! - **Format-agnostic document model**: A [`document::Document`] holds an
//!   ordered collection of curves (each an ordered sequence of
//!   `(x, intensity, error)` triples) and an ordered property table of
//!   string metadata.
//!
//! - **Pluggable codecs**: Each concrete on-disk layout is one codec behind
//!   the [`formats::DocumentFormat`] trait, resolved by name (or historical
//!   alias) through an immutable [`formats::FormatRegistry`].
//!
//! - **Lossless metadata**: Header properties found in a source file survive
//!   a decode→encode round trip, in encounter order.
//!
//! - **Value-stable numerics**: Encoded values use a fixed scientific
//!   notation layout so that decoding an encoded document reproduces every
//!   value within the declared precision.
//!
//! ## Quick Start
//!
//! ```rust
//! use saxsdoc::document::{CurveBuilder, CurveKind, Document};
//!
//! // Build a document from scratch
//! let mut doc = Document::new();
//! doc.properties_mut().insert("Sample code", "BSA");
//!
//! let mut curve = CurveBuilder::new("data", CurveKind::Experimental);
//! curve.push(0.0741270, 26046.5, 32.1129);
//! curve.push(0.0745670, 25950.1, 31.9842);
//! doc.add_curve(curve.build());
//!
//! // Encode it as a three-column experimental data file
//! let bytes = saxsdoc::encode("dat", &doc)?;
//!
//! // ... and read it back
//! let round = saxsdoc::decode("dat", &bytes)?;
//! assert_eq!(round.curve_count(), 1);
//! assert_eq!(round.properties().get_text("Sample code").as_deref(), Some("BSA"));
//! # Ok::<(), saxsdoc::formats::CodecError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`document`]: the in-memory model — curves, measurements, properties
//! - [`formats`]: the codec family, format descriptors and the registry
//!
//! Reading raw bytes from disk, character-set detection, command-line
//! front-ends and plotting are deliberately left to callers: codecs consume
//! and produce complete in-memory buffers and nothing else.
//!
//! ## Supported Formats
//!
//! | Name                  | Alias  | Layout                                  |
//! |-----------------------|--------|-----------------------------------------|
//! | `atsas-dat`           | `dat`  | x, I, err (EMBL-Hamburg experimental)   |
//! | `atsas-dat-2-column`  | `dat2` | x, I (no errors)                        |
//! | `atsas-dat-4-column`  | `dat4` | x, I, err, Gaussian err                 |
//! | `atsas-fir-4-column`  | `fir`  | x, I, err, Ifit                         |
//! | `atsas-fit-3-column`  | `fit`  | x, I, Ifit (DAMMIN, DAMMIF, ...)        |
//! | `atsas-fit-4-column`  | `fit4` | x, I, err, Ifit (SASREF, ...)           |
//! | `atsas-fit-5-column`  | `fit5` | x, I, Ifit, err, diff (OLIGOMER, ...)   |
//! | `atsas-int`           | `int`  | s, Ifull, Iat, Iexv, Ish (CRYSOL)       |
//! | `csv`                 | —      | x, I, err as comma separated values     |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod formats;

pub use formats::{decode, encode};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::document::{
        Curve, CurveBuilder, CurveKind, Document, Measurement, Property, PropertyError,
        PropertyTable, PropertyValue,
    };
    pub use crate::formats::{
        decode, encode, CodecError, ColumnRole, CurveDecl, DocumentFormat, FormatDescriptor,
        FormatRegistry,
    };
}
