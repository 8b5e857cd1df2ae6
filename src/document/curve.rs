//! Curves and the measurements they are built from.

use serde::{Deserialize, Serialize};

/// A single scattering measurement.
///
/// `x` is the scattering variable (usually the momentum transfer `s` or `q`),
/// `y` the measured or computed intensity at that point, and `y_err` the
/// one-sigma uncertainty of the intensity. An error of `0.0` means "no error
/// supplied" — fitted curves and formats without an error column use it
/// throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Scattering variable (momentum transfer).
    pub x: f64,
    /// Intensity.
    pub y: f64,
    /// One-sigma intensity uncertainty; `0.0` if none was supplied.
    pub y_err: f64,
}

/// What a curve represents.
///
/// The distinction matters to codecs: fit-result layouts place the
/// experimental curve and the fitted curve in fixed schema positions, and a
/// fitted curve never carries an independent uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    /// Measured scattering data, usually with per-point errors.
    Experimental,
    /// A theoretical or fitted intensity; its error column is zero-filled.
    Fitted,
}

/// An ordered sequence of measurements.
///
/// A curve is immutable once built: decoding populates it through a
/// [`CurveBuilder`] and afterwards only read access is possible. Row order
/// equals on-disk row order in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    label: String,
    kind: CurveKind,
    data: Vec<Measurement>,
}

impl Curve {
    /// Short label for the curve, e.g. `"data"` or `"fit"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this curve holds experimental or fitted intensities.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the curve holds no measurements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The measurement at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Measurement> {
        self.data.get(index)
    }

    /// Iterate over the measurements in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.data.iter()
    }
}

impl std::ops::Index<usize> for Curve {
    type Output = Measurement;

    fn index(&self, index: usize) -> &Measurement {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Append-only builder used to populate a [`Curve`].
#[derive(Debug)]
pub struct CurveBuilder {
    label: String,
    kind: CurveKind,
    data: Vec<Measurement>,
}

impl CurveBuilder {
    /// Start a new curve with the given label and kind.
    pub fn new(label: impl Into<String>, kind: CurveKind) -> Self {
        CurveBuilder {
            label: label.into(),
            kind,
            data: Vec::new(),
        }
    }

    /// Append one measurement triple.
    pub fn push(&mut self, x: f64, y: f64, y_err: f64) {
        self.data.push(Measurement { x, y, y_err });
    }

    /// Append an existing measurement.
    pub fn push_measurement(&mut self, m: Measurement) {
        self.data.push(m);
    }

    /// Number of measurements appended so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if nothing was appended yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Finalize the curve.
    pub fn build(self) -> Curve {
        Curve {
            label: self.label,
            kind: self.kind,
            data: self.data,
        }
    }
}
