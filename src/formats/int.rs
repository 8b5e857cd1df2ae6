//! The CRYSOL `.int` theoretical intensity layout.
//!
//! Five columns: s, the final fitted intensity, and its atomic,
//! excluded-volume and hydration-shell contributions. All four intensity
//! columns decode to separate fitted curves sharing the x-sequence, none of
//! them carrying errors.

use crate::document::CurveKind;

use super::columns::{default_metadata, ColumnCodec};
use super::descriptor::{ColumnRole, CurveDecl, FormatDescriptor};

const DESCRIPTOR: FormatDescriptor = FormatDescriptor {
    name: "atsas-int",
    aliases: &["int"],
    description: "CRYSOL theoretical intensities",
    extensions: &["int"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::Y { curve: 1 },
        ColumnRole::Y { curve: 2 },
        ColumnRole::Y { curve: 3 },
    ],
    curves: &[
        CurveDecl {
            label: "final",
            kind: CurveKind::Fitted,
        },
        CurveDecl {
            label: "atomic",
            kind: CurveKind::Fitted,
        },
        CurveDecl {
            label: "excluded volume",
            kind: CurveKind::Fitted,
        },
        CurveDecl {
            label: "hydration shell",
            kind: CurveKind::Fitted,
        },
    ],
    errors_mandatory: false,
};

pub(crate) fn codec() -> ColumnCodec {
    ColumnCodec::new(DESCRIPTOR, default_metadata)
}
