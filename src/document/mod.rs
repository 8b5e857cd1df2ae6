//! # The In-Memory Document Model
//!
//! A [`Document`] is the unit of I/O for every codec: an ordered list of
//! [`Curve`]s plus exactly one [`PropertyTable`]. Documents are created
//! either empty (by a caller who appends curves and properties before
//! encoding) or by decoding raw bytes, and they own their contents outright
//! — there is no aliasing and no external resource handle to release.
//!
//! Several curves in one document may share the same x-sequence, e.g. the
//! experimental and the fitted intensity of a fit-result file. The model
//! itself does not enforce that convention; codecs that need it check it
//! when encoding.

mod curve;
mod property;

#[cfg(test)]
mod tests;

pub use curve::{Curve, CurveBuilder, CurveKind, Measurement};
pub use property::{Property, PropertyError, PropertyTable, PropertyValue};

use serde::{Deserialize, Serialize};

/// An ordered collection of curves plus a property table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    curves: Vec<Curve>,
    properties: PropertyTable,
}

impl Document {
    /// Create an empty document: no curves, no properties.
    pub fn new() -> Self {
        Document::default()
    }

    /// Append a curve. Curves keep the order they were added in.
    pub fn add_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    /// All curves, in schema/insertion order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// The curve at `index`, or `None` past the end.
    pub fn curve(&self, index: usize) -> Option<&Curve> {
        self.curves.get(index)
    }

    /// Number of curves.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// The first curve of the given kind, if any.
    pub fn find_curve(&self, kind: CurveKind) -> Option<&Curve> {
        self.curves.iter().find(|c| c.kind() == kind)
    }

    /// Read access to the property table.
    pub fn properties(&self) -> &PropertyTable {
        &self.properties
    }

    /// Write access to the property table.
    pub fn properties_mut(&mut self) -> &mut PropertyTable {
        &mut self.properties
    }

    /// Serialize the document to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
