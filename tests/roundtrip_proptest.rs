//! Property-based round-trip tests.
//!
//! For documents built purely from finite triples and unique property keys,
//! decode(encode(d)) must reproduce the properties exactly and every value
//! within the declared encoding precision (seven significant figures).

use proptest::prelude::*;

use saxsdoc::document::{CurveBuilder, CurveKind, Document};

const REL_TOLERANCE: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    // Relative tolerance at the encoding precision, with an absolute floor
    // for values near the subnormal range.
    (a - b).abs() <= a.abs() * REL_TOLERANCE + 1e-12
}

fn triples() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec(
        (
            0.0..1.0e3_f64,     // x: momentum transfer
            -1.0e9..1.0e9_f64,  // y: intensity, negative after subtraction
            0.0..1.0e6_f64,     // y_err
        ),
        1..64,
    )
}

fn single_curve_doc(rows: &[(f64, f64, f64)]) -> Document {
    let mut doc = Document::new();
    doc.properties_mut().insert("Sample code", "BSA");
    doc.properties_mut().insert("parent", "bsa_016.dat");
    let mut curve = CurveBuilder::new("data", CurveKind::Experimental);
    for &(x, y, y_err) in rows {
        curve.push(x, y, y_err);
    }
    doc.add_curve(curve.build());
    doc
}

fn two_curve_doc(rows: &[(f64, f64, f64)]) -> Document {
    let mut doc = Document::new();
    let mut data = CurveBuilder::new("data", CurveKind::Experimental);
    let mut fit = CurveBuilder::new("fit", CurveKind::Fitted);
    for &(x, y, y_err) in rows {
        data.push(x, y, y_err);
        fit.push(x, y * 0.99, 0.0);
    }
    doc.add_curve(data.build());
    doc.add_curve(fit.build());
    doc
}

proptest! {
    #[test]
    fn dat_roundtrip_within_precision(rows in triples()) {
        let doc = single_curve_doc(&rows);
        let bytes = saxsdoc::encode("dat", &doc).unwrap();
        let round = saxsdoc::decode("dat", &bytes).unwrap();

        prop_assert_eq!(round.properties(), doc.properties());
        prop_assert_eq!(round.curve_count(), 1);
        let curve = &round.curves()[0];
        prop_assert_eq!(curve.len(), rows.len());
        for (m, &(x, y, y_err)) in curve.iter().zip(rows.iter()) {
            prop_assert!(close(x, m.x));
            prop_assert!(close(y, m.y));
            prop_assert!(close(y_err, m.y_err));
        }
    }

    #[test]
    fn csv_roundtrip_within_precision(rows in triples()) {
        let doc = single_curve_doc(&rows);
        let bytes = saxsdoc::encode("csv", &doc).unwrap();
        let round = saxsdoc::decode("csv", &bytes).unwrap();

        prop_assert_eq!(round.properties(), doc.properties());
        let curve = &round.curves()[0];
        prop_assert_eq!(curve.len(), rows.len());
        for (m, &(x, y, y_err)) in curve.iter().zip(rows.iter()) {
            prop_assert!(close(x, m.x));
            prop_assert!(close(y, m.y));
            prop_assert!(close(y_err, m.y_err));
        }
    }

    #[test]
    fn fir_roundtrip_keeps_two_curves_coindexed(rows in triples()) {
        let doc = two_curve_doc(&rows);
        let bytes = saxsdoc::encode("fir", &doc).unwrap();
        let round = saxsdoc::decode("fir", &bytes).unwrap();

        prop_assert_eq!(round.curve_count(), 2);
        let data = &round.curves()[0];
        let fit = &round.curves()[1];
        prop_assert_eq!(data.len(), rows.len());
        prop_assert_eq!(fit.len(), rows.len());
        for (a, b) in data.iter().zip(fit.iter()) {
            prop_assert!(a.x == b.x);
            prop_assert!(b.y_err == 0.0);
        }
    }

    #[test]
    fn fit5_roundtrip_residual_is_consistent(rows in triples()) {
        let doc = two_curve_doc(&rows);
        let bytes = saxsdoc::encode("fit5", &doc).unwrap();
        let round = saxsdoc::decode("fit5", &bytes).unwrap();

        prop_assert_eq!(round.curve_count(), 2);
        for (m, &(_, y, y_err)) in round.curves()[0].iter().zip(rows.iter()) {
            prop_assert!(close(y, m.y));
            prop_assert!(close(y_err, m.y_err));
        }
        for (m, &(_, y, _)) in round.curves()[1].iter().zip(rows.iter()) {
            prop_assert!(close(y * 0.99, m.y));
        }
    }
}
