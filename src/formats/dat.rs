//! The EMBL-Hamburg `.dat` experimental data layouts.
//!
//! Whitespace-separated columns: momentum transfer, intensity and the
//! Poisson error estimate. Two-column files carry no errors; four-column
//! files add Gaussian error estimates in a fourth column, which is read
//! past — the model carries the Poisson estimate only. Each column count is
//! its own codec with its own registered name, like the `.fit` family.
//!
//! Header lines carry free-form metadata; besides the generic `key: value`
//! convention these codecs understand the historical sample line
//!
//! ```text
//! Sample:           water  c=  0.000 mg/ml Code:      h2o
//! ```
//!
//! from which they derive the `sample-description`, `sample-concentration`
//! and `sample-code` properties.

use crate::document::{CurveKind, PropertyTable};

use super::columns::{default_metadata, ColumnCodec};
use super::descriptor::{ColumnRole, CurveDecl, FormatDescriptor};

const DAT_CURVES: &[CurveDecl] = &[CurveDecl {
    label: "data",
    kind: CurveKind::Experimental,
}];

const DAT_3_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-dat",
    aliases: &["dat"],
    description: "EMBL-Hamburg three column experimental data",
    extensions: &["dat"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::YError { curve: 0 },
    ],
    curves: DAT_CURVES,
    errors_mandatory: true,
};

const DAT_2_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-dat-2-column",
    aliases: &["dat2"],
    description: "EMBL-Hamburg experimental data without errors",
    extensions: &["dat"],
    roles: &[ColumnRole::X, ColumnRole::Y { curve: 0 }],
    curves: DAT_CURVES,
    errors_mandatory: false,
};

const DAT_4_COLUMN: FormatDescriptor = FormatDescriptor {
    name: "atsas-dat-4-column",
    aliases: &["dat4"],
    description: "EMBL-Hamburg experimental data with Poisson and Gaussian errors",
    extensions: &["dat"],
    roles: &[
        ColumnRole::X,
        ColumnRole::Y { curve: 0 },
        ColumnRole::YError { curve: 0 },
        ColumnRole::Ignored,
    ],
    curves: DAT_CURVES,
    errors_mandatory: true,
};

pub(crate) fn dat_3_column() -> ColumnCodec {
    ColumnCodec::new(DAT_3_COLUMN, dat_metadata)
}

pub(crate) fn dat_2_column() -> ColumnCodec {
    ColumnCodec::new(DAT_2_COLUMN, dat_metadata)
}

pub(crate) fn dat_4_column() -> ColumnCodec {
    ColumnCodec::new(DAT_4_COLUMN, dat_metadata)
}

/// Header handling with the sample-line convention on top of the default.
///
/// The convention applies only to lines carrying the `Sample:` prefix. The
/// description may contain whitespace, so anything between the first colon
/// and the `c=` marker is taken as the description; the concentration is the
/// first token after `c=`, the code follows the next colon.
fn dat_metadata(line: &str, properties: &mut PropertyTable) {
    if is_sample_line(line) && parse_sample_line(line, properties) {
        return;
    }
    default_metadata(line, properties);
}

fn is_sample_line(line: &str) -> bool {
    line.get(..7)
        .map(|prefix| prefix.eq_ignore_ascii_case("sample:"))
        .unwrap_or(false)
}

/// Returns `true` if the sample properties were derived from `line`.
fn parse_sample_line(line: &str, properties: &mut PropertyTable) -> bool {
    let conc_pos = match line.find("c=") {
        Some(pos) => pos,
        None => return false,
    };
    let before = &line[..conc_pos];
    let after = &line[conc_pos + 2..];

    let concentration = match after.split_whitespace().next() {
        Some(token) => token,
        None => return false,
    };

    let description = before
        .split_once(':')
        .map(|(_, d)| d.trim())
        .unwrap_or("");
    properties.insert_if_absent("sample-description", description);
    properties.insert_if_absent("sample-concentration", concentration);

    if let Some((_, code)) = after.split_once(':') {
        let code = code.trim();
        if !code.is_empty() {
            properties.insert_if_absent("sample-code", code);
        }
    }
    true
}
