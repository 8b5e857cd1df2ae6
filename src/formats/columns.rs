//! The shared engine for column-delimited text layouts.
//!
//! Every ATSAS-family codec is a thin instantiation of this engine: a
//! [`FormatDescriptor`] tells it how many columns a data row has and how the
//! columns map to curves, an optional metadata handler gives a format its
//! header quirks. The engine owns the line classification, the strict
//! column-count and numeric checks, and the property/data emission order on
//! encode.
//!
//! ## Line classification
//!
//! After trimming, a line is
//!
//! - skipped if blank,
//! - a metadata candidate if it starts with a `#` comment marker (markers
//!   stripped) or if its first whitespace-delimited token does not parse as
//!   a number,
//! - a data row otherwise.
//!
//! Metadata candidates are parsed as `key: value` at the first colon; the
//! first candidate that is not a `key: value` pair becomes the `title`
//! property. Malformed candidates are ignored, never fatal — the permissive
//! policy the historical readers had, kept here as an explicit, tested rule.

use std::borrow::Cow;

use crate::document::{Curve, CurveBuilder, Document, PropertyTable};

use super::descriptor::{ColumnRole, FormatDescriptor};
use super::error::CodecError;
use super::numeric;
use super::DocumentFormat;

/// Hook for format-specific header conventions.
///
/// Called once per metadata candidate line, already stripped of comment
/// markers and surrounding whitespace, and never with an empty line.
pub(crate) type MetadataHandler = fn(&str, &mut PropertyTable);

/// A codec for one column-delimited layout, driven by its descriptor.
pub(crate) struct ColumnCodec {
    descriptor: FormatDescriptor,
    metadata: MetadataHandler,
}

impl ColumnCodec {
    pub(crate) fn new(descriptor: FormatDescriptor, metadata: MetadataHandler) -> Self {
        ColumnCodec {
            descriptor,
            metadata,
        }
    }
}

impl DocumentFormat for ColumnCodec {
    fn descriptor(&self) -> &FormatDescriptor {
        &self.descriptor
    }

    fn decode(&self, data: &[u8]) -> Result<Document, CodecError> {
        let text = String::from_utf8_lossy(data);
        decode_text(&self.descriptor, self.metadata, &text)
    }

    fn encode(&self, doc: &Document) -> Result<Vec<u8>, CodecError> {
        encode_text(&self.descriptor, doc).map(String::into_bytes)
    }
}

/// Normalize line endings to `\n`.
///
/// These files come from three decades of platforms; LF, CRLF and bare CR
/// all occur in the wild. Physical row numbers are preserved: every line
/// terminator maps to exactly one `\n`.
pub(crate) fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Strip leading comment markers, returning `Some(rest)` if there were any.
pub(crate) fn strip_comment(line: &str) -> Option<&str> {
    if line.starts_with('#') {
        Some(line.trim_start_matches('#').trim())
    } else {
        None
    }
}

/// `true` if the line's first whitespace-delimited token parses as a number.
pub(crate) fn is_data_row(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map(|t| t.parse::<f64>().is_ok())
        .unwrap_or(false)
}

/// Split a metadata candidate into key and value at the first colon.
///
/// Returns `None` if there is no colon, or if key or value are empty.
pub(crate) fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// The default header convention: `key: value` pairs plus a bare title line.
pub(crate) fn default_metadata(line: &str, properties: &mut PropertyTable) {
    match split_key_value(line) {
        Some((key, value)) => {
            if !properties.insert_if_absent(key, value) {
                log::debug!("ignoring duplicate header key '{key}'");
            }
        }
        None => {
            // The first non-empty free-form header line is the title.
            if !properties.insert_if_absent("title", line) {
                log::debug!("ignoring header line '{line}'");
            }
        }
    }
}

/// Decode column-delimited text into a document.
///
/// All-or-nothing: any malformed data row or column-count mismatch aborts
/// the decode with no document returned.
pub(crate) fn decode_text(
    desc: &FormatDescriptor,
    metadata: MetadataHandler,
    text: &str,
) -> Result<Document, CodecError> {
    let mut builders: Vec<CurveBuilder> = desc
        .curves
        .iter()
        .map(|c| CurveBuilder::new(c.label, c.kind))
        .collect();
    let mut properties = PropertyTable::new();
    let expected = desc.column_count();
    let text = normalize_line_endings(text);

    for (i, raw) in text.lines().enumerate() {
        let row = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_comment(line) {
            if !rest.is_empty() {
                metadata(rest, &mut properties);
            }
            continue;
        }

        if !is_data_row(line) {
            metadata(line, &mut properties);
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != expected {
            return Err(CodecError::ColumnCountMismatch {
                row,
                expected,
                actual: tokens.len(),
            });
        }

        let mut values = Vec::with_capacity(expected);
        for token in &tokens {
            values.push(numeric::parse_value(token, row)?);
        }

        let x = values[desc.x_column()];
        for (schema_index, builder) in builders.iter_mut().enumerate() {
            let y = match desc.y_column(schema_index) {
                Some(column) => values[column],
                None => continue,
            };
            let y_err = desc
                .y_error_column(schema_index)
                .map(|column| values[column])
                .unwrap_or(0.0);
            builder.push(x, y, y_err);
        }
    }

    let mut doc = Document::new();
    *doc.properties_mut() = properties;
    for builder in builders {
        doc.add_curve(builder.build());
    }
    Ok(doc)
}

/// Encode a document as column-delimited text.
///
/// Validates the document against the descriptor first; on success emits
/// property lines in insertion order, a blank separator, then one row per
/// measurement index with columns in role order.
pub(crate) fn encode_text(desc: &FormatDescriptor, doc: &Document) -> Result<String, CodecError> {
    validate(desc, doc)?;

    let mut out = String::new();
    for property in doc.properties() {
        out.push_str(&property.key);
        out.push_str(": ");
        out.push_str(&property.value.to_string());
        out.push('\n');
    }
    if !doc.properties().is_empty() {
        out.push('\n');
    }

    let curves = doc.curves();
    let rows = curves.first().map(Curve::len).unwrap_or(0);
    for i in 0..rows {
        for (k, role) in desc.roles.iter().enumerate() {
            if k > 0 {
                out.push(' ');
            }
            let value = match *role {
                ColumnRole::X => curves[0][i].x,
                ColumnRole::Y { curve } => curves[curve][i].y,
                ColumnRole::YError { curve } => curves[curve][i].y_err,
                ColumnRole::Residual { data, fit } => curves[data][i].y - curves[fit][i].y,
                ColumnRole::Ignored => 0.0,
            };
            out.push_str(&numeric::format_value(value));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Check curve count, curve lengths and the shared x-sequence.
pub(crate) fn validate(desc: &FormatDescriptor, doc: &Document) -> Result<(), CodecError> {
    if doc.curve_count() != desc.curve_count() {
        return Err(CodecError::CurveCountMismatch {
            format: desc.name.to_string(),
            expected: desc.curve_count(),
            actual: doc.curve_count(),
        });
    }

    let lengths: Vec<usize> = doc.curves().iter().map(Curve::len).collect();
    if lengths.windows(2).any(|w| w[0] != w[1]) {
        return Err(CodecError::CurveLengthMismatch { lengths });
    }

    // Co-indexing by a shared x-sequence is a checked invariant here, not
    // an assumption: the source formats enforce it only by construction.
    if let Some(first) = doc.curve(0) {
        for other in &doc.curves()[1..] {
            for (index, (a, b)) in first.iter().zip(other.iter()).enumerate() {
                if a.x != b.x {
                    return Err(CodecError::SharedAxisMismatch {
                        index,
                        expected: a.x,
                        actual: b.x,
                    });
                }
            }
        }
    }

    Ok(())
}
