/// Errors that can occur while decoding or encoding a document.
///
/// Every failure is terminal for the operation that raised it: decode either
/// returns a fully populated document or one of these, encode either returns
/// complete bytes or one of these. Row numbers are 1-based and refer to the
/// physical line in the input.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The requested format name is not registered.
    #[error("unknown format '{0}'")]
    UnknownFormat(String),

    /// A token in a data row failed to parse as a floating-point value.
    #[error("row {row}: cannot parse '{token}': {reason}")]
    MalformedRow {
        /// 1-based row number of the offending line.
        row: usize,
        /// The exact token text that failed to parse.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// A data row does not have the column count the layout requires.
    #[error("row {row}: expected {expected} columns, found {actual}")]
    ColumnCountMismatch {
        /// 1-based row number of the offending line.
        row: usize,
        /// Column count the layout requires.
        expected: usize,
        /// Column count actually found.
        actual: usize,
    },

    /// The document's curve count does not match the target layout.
    #[error("format '{format}' encodes {expected} curve(s), document holds {actual}")]
    CurveCountMismatch {
        /// Name of the target format.
        format: String,
        /// Curve count the layout requires.
        expected: usize,
        /// Curve count the document holds.
        actual: usize,
    },

    /// Curves that must share an x-sequence differ in length.
    #[error("curves sharing an x-sequence differ in length: {lengths:?}")]
    CurveLengthMismatch {
        /// The curve lengths, in schema order.
        lengths: Vec<usize>,
    },

    /// Curves that must share an x-sequence disagree on an x-value.
    #[error("curves disagree on x at index {index}: {expected} vs {actual}")]
    SharedAxisMismatch {
        /// First measurement index at which the x-values disagree.
        index: usize,
        /// x-value of the first curve.
        expected: f64,
        /// Disagreeing x-value.
        actual: f64,
    },

    /// Error from the CSV reader/writer machinery.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
