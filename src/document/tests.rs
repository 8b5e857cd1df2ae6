use super::*;

#[test]
fn test_curve_builder_preserves_row_order() {
    let mut builder = CurveBuilder::new("data", CurveKind::Experimental);
    builder.push(0.1, 100.0, 1.0);
    builder.push(0.2, 90.0, 0.9);
    builder.push(0.3, 80.0, 0.8);
    let curve = builder.build();

    assert_eq!(curve.len(), 3);
    assert_eq!(curve.label(), "data");
    assert_eq!(curve.kind(), CurveKind::Experimental);
    assert_eq!(curve[0].x, 0.1);
    assert_eq!(curve[2].y, 80.0);
    assert_eq!(curve.get(3), None);

    let xs: Vec<f64> = curve.iter().map(|m| m.x).collect();
    assert_eq!(xs, vec![0.1, 0.2, 0.3]);
}

#[test]
fn test_property_table_preserves_insertion_order() {
    let mut table = PropertyTable::new();
    table.insert("title", "lysozyme");
    table.insert("Sample code", "BSA");
    table.insert("parent", "lys_014.dat");

    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(keys, vec!["title", "Sample code", "parent"]);
}

#[test]
fn test_property_insert_replaces_in_place() {
    let mut table = PropertyTable::new();
    table.insert("a", "1");
    table.insert("b", "2");
    table.insert("a", "3");

    assert_eq!(table.len(), 2);
    assert_eq!(table.get_text("a").as_deref(), Some("3"));
    // Replacement keeps the original position.
    assert_eq!(table.keys().next(), Some("a"));
}

#[test]
fn test_property_insert_if_absent_first_wins() {
    let mut table = PropertyTable::new();
    assert!(table.insert_if_absent("a", "first"));
    assert!(!table.insert_if_absent("a", "second"));
    assert_eq!(table.get_text("a").as_deref(), Some("first"));
}

#[test]
fn test_property_keys_are_case_preserving_and_exact() {
    let mut table = PropertyTable::new();
    table.insert("Sample code", "BSA");

    assert!(table.contains_key("Sample code"));
    assert!(!table.contains_key("sample code"));
    assert_eq!(table.get("sample code"), None);
}

#[test]
fn test_typed_accessors_on_typed_variants() {
    let mut table = PropertyTable::new();
    table.insert("concentration", 4.27);
    table.insert("merged", true);

    assert_eq!(table.get_f64("concentration").unwrap(), 4.27);
    assert!(table.get_bool("merged").unwrap());
}

#[test]
fn test_typed_accessors_parse_text_on_demand() {
    let mut table = PropertyTable::new();
    table.insert("concentration", "4.27");
    table.insert("merged", "yes");

    assert_eq!(table.get_f64("concentration").unwrap(), 4.27);
    assert!(table.get_bool("merged").unwrap());
}

#[test]
fn test_typed_accessor_type_mismatch() {
    let mut table = PropertyTable::new();
    table.insert("Sample code", "BSA");

    match table.get_f64("Sample code") {
        Err(PropertyError::TypeMismatch {
            key,
            requested,
            value,
        }) => {
            assert_eq!(key, "Sample code");
            assert_eq!(requested, "number");
            assert_eq!(value, "BSA");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }

    assert!(matches!(
        table.get_f64("missing"),
        Err(PropertyError::KeyNotFound(_))
    ));
}

#[test]
fn test_document_owns_curves_in_order() {
    let mut doc = Document::new();
    assert_eq!(doc.curve_count(), 0);

    let mut data = CurveBuilder::new("data", CurveKind::Experimental);
    data.push(0.1, 100.0, 1.0);
    doc.add_curve(data.build());

    let mut fit = CurveBuilder::new("fit", CurveKind::Fitted);
    fit.push(0.1, 99.0, 0.0);
    doc.add_curve(fit.build());

    assert_eq!(doc.curve_count(), 2);
    assert_eq!(doc.curve(0).map(Curve::label), Some("data"));
    assert_eq!(doc.curve(1).map(Curve::label), Some("fit"));
    assert_eq!(
        doc.find_curve(CurveKind::Fitted).map(Curve::label),
        Some("fit")
    );
    assert_eq!(doc.curve(2), None);
}

#[test]
fn test_document_json_roundtrip() {
    let mut doc = Document::new();
    doc.properties_mut().insert("Sample code", "BSA");
    doc.properties_mut().insert("concentration", 4.27);

    let mut curve = CurveBuilder::new("data", CurveKind::Experimental);
    curve.push(0.0741270, 26046.5, 32.1129);
    doc.add_curve(curve.build());

    let json = doc.to_json().unwrap();
    let restored = Document::from_json(&json).unwrap();
    assert_eq!(restored, doc);
}
