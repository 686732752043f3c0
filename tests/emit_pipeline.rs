//! Integration tests for the emit pipeline

use pretty_assertions::assert_eq;

use circuit_scribe::{
    emit, emit_with_config, Catalog, DefaultPolicy, EmitConfig, EmitError, EmitRequest, Location,
    ResolveError,
};

#[test]
fn test_pin_at_location() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Pin")
        .with_override("type=input")
        .with_override("facing=east")
        .at(Location::new(10, 10));

    let emission = emit(&catalog, &request).expect("Should emit");
    assert_eq!(emission.pins.len(), 1);
    let pin = &emission.pins[0];
    assert_eq!(pin.direction.as_str(), "input");
    assert_eq!(pin.absolute, Location::new(10, 10));
    assert_eq!(pin.offset, (0, 0));
}

#[test]
fn test_and_gate_three_inputs() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("AND Gate").with_override("inputs=3");

    let emission = emit(&catalog, &request).expect("Should emit");
    assert_eq!(emission.pins.len(), 4);

    let mut locations: Vec<(i32, i32)> = emission
        .pins
        .iter()
        .map(|p| (p.absolute.x, p.absolute.y))
        .collect();
    locations.sort_unstable();
    locations.dedup();
    assert_eq!(locations.len(), 4, "pin locations must be distinct");
}

#[test]
fn test_emitted_xml_fragment() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("AND Gate")
        .with_override("inputs=3")
        .at(Location::new(40, 30));

    let emission = emit(&catalog, &request).expect("Should emit");
    assert_eq!(
        emission.xml,
        r#"<comp lib="1" loc="(40,30)" name="AND Gate"><a name="inputs" val="3"/></comp>"#
    );
}

#[test]
fn test_emitted_xml_pretty() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("AND Gate")
        .with_override("inputs=3")
        .at(Location::new(40, 30));
    let config = EmitConfig::new().with_pretty_xml(true);

    let emission = emit_with_config(&catalog, &request, &config).expect("Should emit");
    assert_eq!(
        emission.xml,
        "<comp lib=\"1\" loc=\"(40,30)\" name=\"AND Gate\">\n  <a name=\"inputs\" val=\"3\"/>\n</comp>"
    );
}

#[test]
fn test_default_emission_has_classic_appearance() {
    let catalog = Catalog::builtin();
    let emission = emit(&catalog, &EmitRequest::new("Pin")).expect("Should emit");
    assert!(emission.xml.contains(r#"<a name="appearance" val="classic"/>"#));
}

#[test]
fn test_explicit_appearance_wins_over_fallback() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Pin").with_override("appearance=evolution");
    let emission = emit(&catalog, &request).expect("Should emit");
    // Evolution is the factory default, so nothing is emitted for it.
    assert!(!emission.xml.contains("appearance"));
}

#[test]
fn test_empty_policy_drops_fallback() {
    let catalog = Catalog::builtin();
    let config = EmitConfig::new().with_policy(DefaultPolicy::empty());
    let emission =
        emit_with_config(&catalog, &EmitRequest::new("Pin"), &config).expect("Should emit");
    assert!(!emission.xml.contains("appearance"));
}

#[test]
fn test_override_values_serialized_canonically() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Pin")
        .with_override("facing = WEST")
        .with_override("width= 8");
    let emission = emit(&catalog, &request).expect("Should emit");
    assert!(emission.xml.contains(r#"<a name="facing" val="west"/>"#));
    assert!(emission.xml.contains(r#"<a name="width" val="8"/>"#));
}

#[test]
fn test_unknown_component_error() {
    let catalog = Catalog::builtin();
    let err = emit(&catalog, &EmitRequest::new("Warp Core")).unwrap_err();
    match err {
        EmitError::FactoryNotFound { name, available } => {
            assert_eq!(name, "Warp Core");
            assert!(available.iter().any(|n| n == "AND Gate"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_override_without_equals_fails_early() {
    let catalog = Catalog::builtin();
    let err = emit(&catalog, &EmitRequest::new("Pin").with_override("bogus")).unwrap_err();
    assert!(matches!(
        err,
        EmitError::Resolve(ResolveError::InvalidOverrideSyntax { .. })
    ));
}

#[test]
fn test_unknown_attribute_error() {
    let catalog = Catalog::builtin();
    let err = emit(&catalog, &EmitRequest::new("Pin").with_override("frobnicate=1")).unwrap_err();
    assert!(matches!(
        err,
        EmitError::Resolve(ResolveError::UnknownAttribute { .. })
    ));
}

#[test]
fn test_invalid_attribute_value_error() {
    let catalog = Catalog::builtin();
    let err = emit(&catalog, &EmitRequest::new("Pin").with_override("width=0")).unwrap_err();
    match err {
        EmitError::Resolve(ResolveError::InvalidAttributeValue { name, value, .. }) => {
            assert_eq!(name, "width");
            assert_eq!(value, "0");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_report_json_is_byte_identical_across_runs() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Splitter")
        .with_override("fanout=3")
        .with_override("incoming=8")
        .at(Location::new(120, 80));

    let first = emit(&catalog, &request).unwrap().report_json().unwrap();
    let second = emit(&catalog, &request).unwrap().report_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_report_json_field_order() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Clock").at(Location::new(10, 20));
    let json = emit(&catalog, &request).unwrap().report_json().unwrap();

    let component = json.find(r#""component":"#).unwrap();
    let location = json.find(r#""location":"#).unwrap();
    let xml = json.find(r#""componentXml":"#).unwrap();
    let bbox = json.find(r#""bbox":"#).unwrap();
    let pins = json.find(r#""pins":"#).unwrap();
    assert!(component < location && location < xml && xml < bbox && bbox < pins);
}

#[test]
fn test_report_bbox_offsets_are_point_pairs() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Pin").at(Location::new(10, 10));
    let json = emit(&catalog, &request).unwrap().report_json().unwrap();
    // East-facing pin body extends west of the anchor.
    assert!(json.contains(r#""topLeft":"(-20,-10)""#));
    assert!(json.contains(r#""bottomRight":"(0,10)""#));
    assert!(json.contains(r#""absolute":{"left":-10,"top":0,"right":10,"bottom":20}"#));
}

#[test]
fn test_pins_json_is_bare_array() {
    let catalog = Catalog::builtin();
    let request = EmitRequest::new("Tunnel").at(Location::new(5, 5));
    let emission = emit(&catalog, &request).unwrap();
    let pins = emission.pins_json().unwrap();
    assert!(pins.starts_with('['));
    assert!(pins.ends_with(']'));
    assert!(pins.contains(r#""direction":"inout""#));
}
