//! The ATSAS `.fir`/`.fit` fit-result layouts.
//!
//! Generally, `.fit`-files come with 3 columns (s, I, Ifit) and `.fir`-files
//! with 4 columns (s, I, err, Ifit). However, SASREF writes `.fit`-files
//! with 4 columns (identical to `.fir`-files for other apps), and OLIGOMER
//! writes a fifth column (the difference of I and Ifit) in yet another
//! column order (s, I, Ifit, err, diff). Each variant is its own codec with
//! its own registered name, so callers pick the layout explicitly.
//!
//! All variants decode to two curves sharing the x-sequence: the
//! experimental data first, the fitted intensity second. The fitted curve's
//! error column is always zero-filled — fitted intensities carry no
//! independent uncertainty.

use crate::document::CurveKind;

use super::columns::{default_metadata, ColumnCodec};
use super::descriptor::{ColumnRole, CurveDecl, FormatDescriptor};

const FIT_CURVES: &[CurveDecl] = &[
    CurveDecl {
        label: "data",
        kind: CurveKind::Experimental,
    },
    CurveDecl {
        label: "fit",
        kind: CurveKind::Fitted,
    },
];

const FIR_4_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-fir-4-column",
    aliases: &["fir"],
    description: "ATSAS fit against experimental data",
    extensions: &["fir"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::YError { curve: 0 },
        ColumnRole::Y { curve: 1 },
    ],
    curves: FIT_CURVES,
    errors_mandatory: true,
};

const FIT_3_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-fit-3-column",
    aliases: &["fit"],
    description: "ATSAS fit against data (3 column; DAMMIN, DAMMIF, ...)",
    extensions: &["fit"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::Y { curve: 1 },
    ],
    curves: FIT_CURVES,
    errors_mandatory: false,
};

const FIT_4_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-fit-4-column",
    aliases: &["fit4"],
    description: "ATSAS fit against data (4 column; SASREF, ...)",
    extensions: &["fit"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::YError { curve: 0 },
        ColumnRole::Y { curve: 1 },
    ],
    curves: FIT_CURVES,
    errors_mandatory: true,
};

const FIT_5_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-fit-5-column",
    aliases: &["fit5"],
    description: "ATSAS fit against data (5 column; OLIGOMER, ...)",
    extensions: &["fit"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::Y { curve: 1 },
        ColumnRole::YError { curve: 0 },
        ColumnRole::Residual { data: 0, fit: 1 },
    ],
    curves: FIT_CURVES,
    errors_mandatory: true,
};

pub(crate) fn fir_4_column() -> ColumnCodec {
    ColumnCodec::new(FIR_4_COLUMN, default_metadata)
}

pub(crate) fn fit_3_column() -> ColumnCodec {
    ColumnCodec::new(FIT_3_COLUMN, default_metadata)
}

pub(crate) fn fit_4_column() -> ColumnCodec {
    ColumnCodec::new(FIT_4_COLUMN, default_metadata)
}

pub(crate) fn fit_5_column() -> ColumnCodec {
    ColumnCodec::new(FIT_5_COLUMN, default_metadata)
}
