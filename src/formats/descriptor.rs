//! Format descriptors: the schema of one concrete on-disk layout.

use crate::document::CurveKind;

/// Semantic role of one column within a layout.
///
/// Roles are listed in on-disk column order and are the single source of
/// truth for both directions: decoding maps tokens to curves through them,
/// encoding emits columns in role order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// The shared independent variable (momentum transfer).
    X,
    /// Intensity of the curve at the given schema index.
    Y {
        /// Index into [`FormatDescriptor::curves`].
        curve: usize,
    },
    /// One-sigma intensity error of the curve at the given schema index.
    YError {
        /// Index into [`FormatDescriptor::curves`].
        curve: usize,
    },
    /// Difference column `y[data] - y[fit]`, as written by OLIGOMER.
    ///
    /// Validated as numeric on decode but not stored; recomputed on encode.
    Residual {
        /// Schema index of the experimental curve.
        data: usize,
        /// Schema index of the fitted curve.
        fit: usize,
    },
    /// A column the model does not represent, e.g. the Gaussian error
    /// estimates of four-column `.dat` files.
    ///
    /// Validated as numeric on decode but not stored; zero-filled on encode,
    /// the "no value supplied" convention of the error columns.
    Ignored,
}

/// Declaration of one curve a layout carries, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDecl {
    /// Label given to the decoded curve, e.g. `"data"` or `"fit"`.
    pub label: &'static str,
    /// Whether the curve holds experimental or fitted intensities.
    pub kind: CurveKind,
}

/// Describes one concrete on-disk layout.
///
/// A descriptor identifies a codec to the registry (by name and historical
/// aliases) and tells the shared column engine how tokens map to curves.
#[derive(Debug, Clone, Copy)]
pub struct FormatDescriptor {
    /// Canonical format name, stable across versions.
    pub name: &'static str,
    /// Historical aliases the registry also accepts.
    pub aliases: &'static [&'static str],
    /// Human-readable one-line description.
    pub description: &'static str,
    /// File extensions conventionally used for this layout.
    pub extensions: &'static [&'static str],
    /// The column schema, in on-disk order.
    pub roles: &'static [ColumnRole],
    /// The curves this layout carries, in schema order.
    pub curves: &'static [CurveDecl],
    /// `true` if the layout has a mandatory intensity-error column.
    pub errors_mandatory: bool,
}

impl FormatDescriptor {
    /// Number of columns a data row must have.
    pub fn column_count(&self) -> usize {
        self.roles.len()
    }

    /// Number of curves a document must have to be encoded in this layout.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// `true` if `name` is the canonical name or a known alias
    /// (case-insensitive).
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// `true` if files with this extension conventionally use this layout.
    pub fn claims_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Column index of the independent variable.
    pub(crate) fn x_column(&self) -> usize {
        self.roles
            .iter()
            .position(|r| matches!(r, ColumnRole::X))
            .unwrap_or(0)
    }

    /// Column index of the intensity of curve `curve`, if declared.
    pub(crate) fn y_column(&self, curve: usize) -> Option<usize> {
        self.roles
            .iter()
            .position(|r| matches!(r, ColumnRole::Y { curve: c } if *c == curve))
    }

    /// Column index of the intensity error of curve `curve`, if declared.
    pub(crate) fn y_error_column(&self, curve: usize) -> Option<usize> {
        self.roles
            .iter()
            .position(|r| matches!(r, ColumnRole::YError { curve: c } if *c == curve))
    }
}
