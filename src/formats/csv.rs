//! Comma-separated `x, I, err` export layout.
//!
//! Data rows are plain CSV records of three numeric fields; metadata travels
//! in `# key: value` comment lines so that properties survive a round trip
//! through this layout too. Quoting and field trimming follow standard CSV
//! conventions via the `csv` crate.

use crate::document::{CurveBuilder, CurveKind, Document, PropertyTable};

use super::columns::{self, validate};
use super::descriptor::{ColumnRole, CurveDecl, FormatDescriptor};
use super::error::CodecError;
use super::numeric;
use super::DocumentFormat;

const DESCRIPTOR: FormatDescriptor = FormatDescriptor {
    name: "csv",
    aliases: &[],
    description: "Comma separated x, I, err columns",
    extensions: &["csv"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::YError { curve: 0 },
    ],
    curves: &[CurveDecl {
        label: "data",
        kind: CurveKind::Experimental,
    }],
    errors_mandatory: true,
};

/// Codec for the comma-separated layout.
pub(crate) struct CsvCodec;

impl DocumentFormat for CsvCodec {
    fn descriptor(&self) -> &FormatDescriptor {
        &DESCRIPTOR
    }

    fn decode(&self, data: &[u8]) -> Result<Document, CodecError> {
        let text = String::from_utf8_lossy(data);
        let text = columns::normalize_line_endings(&text);

        // Comment lines carry the metadata; the CSV reader below skips them.
        let mut properties = PropertyTable::new();
        for line in text.lines() {
            if let Some(rest) = columns::strip_comment(line.trim()) {
                if !rest.is_empty() {
                    columns::default_metadata(rest, &mut properties);
                }
            }
        }

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(::csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(text.as_bytes());

        let mut builder = CurveBuilder::new("data", CurveKind::Experimental);
        for record in reader.records() {
            let record = record?;
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(builder.len() + 1);

            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            if record.len() != DESCRIPTOR.column_count() {
                return Err(CodecError::ColumnCountMismatch {
                    row,
                    expected: DESCRIPTOR.column_count(),
                    actual: record.len(),
                });
            }

            let x = numeric::parse_value(record.get(0).unwrap_or_default(), row)?;
            let y = numeric::parse_value(record.get(1).unwrap_or_default(), row)?;
            let y_err = numeric::parse_value(record.get(2).unwrap_or_default(), row)?;
            builder.push(x, y, y_err);
        }

        let mut doc = Document::new();
        *doc.properties_mut() = properties;
        doc.add_curve(builder.build());
        Ok(doc)
    }

    fn encode(&self, doc: &Document) -> Result<Vec<u8>, CodecError> {
        validate(&DESCRIPTOR, doc)?;

        let mut out = Vec::new();
        for property in doc.properties() {
            out.extend_from_slice(format!("# {}: {}\n", property.key, property.value).as_bytes());
        }

        {
            let mut writer = ::csv::WriterBuilder::new().from_writer(&mut out);
            for m in &doc.curves()[0] {
                writer.write_record(&[
                    numeric::format_value(m.x).trim().to_string(),
                    numeric::format_value(m.y).trim().to_string(),
                    numeric::format_value(m.y_err).trim().to_string(),
                ])?;
            }
            writer.flush().map_err(::csv::Error::from)?;
        }

        Ok(out)
    }
}
