//! Integration tests for the ODF length datatype.

use vellum_odf::{Length, LengthUnit, ParseError};

#[test]
fn test_parse_point_length() {
    let len = Length::parse("0.5pt").unwrap();
    assert_eq!(len.value(), 0.5);
    assert_eq!(len.unit(), LengthUnit::Pt);
}

#[test]
fn test_parse_every_unit() {
    assert_eq!(Length::parse("1cm").unwrap().unit(), LengthUnit::Cm);
    assert_eq!(Length::parse("1mm").unwrap().unit(), LengthUnit::Mm);
    assert_eq!(Length::parse("1in").unwrap().unit(), LengthUnit::In);
    assert_eq!(Length::parse("1pt").unwrap().unit(), LengthUnit::Pt);
    assert_eq!(Length::parse("1pc").unwrap().unit(), LengthUnit::Pc);
    assert_eq!(Length::parse("1px").unwrap().unit(), LengthUnit::Px);
}

#[test]
fn test_parse_number_forms() {
    assert_eq!(Length::parse(".5pt").unwrap().value(), 0.5);
    assert_eq!(Length::parse("-2cm").unwrap().value(), -2.0);
    assert_eq!(Length::parse("  1.27cm ").unwrap().value(), 1.27);
}

#[test]
fn test_parse_missing_number() {
    assert_eq!(
        Length::parse("pt"),
        Err(ParseError::InvalidLength("pt".to_string()))
    );
    assert_eq!(
        Length::parse(""),
        Err(ParseError::InvalidLength(String::new()))
    );
}

#[test]
fn test_parse_missing_or_unknown_unit() {
    assert_eq!(
        Length::parse("17"),
        Err(ParseError::UnknownUnit(String::new()))
    );
    assert_eq!(
        Length::parse("1.5zz"),
        Err(ParseError::UnknownUnit("zz".to_string()))
    );
    // Unit keywords are lowercase.
    assert_eq!(
        Length::parse("1PT"),
        Err(ParseError::UnknownUnit("PT".to_string()))
    );
}

#[test]
fn test_to_pt_conversions() {
    assert_eq!(Length::new(1.0, LengthUnit::In).to_pt(), 72.0);
    assert_eq!(Length::new(1.0, LengthUnit::Pc).to_pt(), 12.0);
    assert_eq!(Length::new(1.0, LengthUnit::Px).to_pt(), 0.75);
    assert_eq!(Length::new(0.5, LengthUnit::Pt).to_pt(), 0.5);
    assert_eq!(Length::new(2.54, LengthUnit::Cm).to_pt(), 72.0);
}

#[test]
fn test_to_cm_conversions() {
    assert_eq!(Length::new(1.0, LengthUnit::In).to_cm(), 2.54);
    assert_eq!(Length::new(72.0, LengthUnit::Pt).to_cm(), 2.54);
    let mm = Length::new(10.0, LengthUnit::Mm).to_cm();
    assert!((mm - 1.0).abs() < 1e-12);
}

#[test]
fn test_display_is_value_then_unit() {
    assert_eq!(Length::new(0.5, LengthUnit::Pt).to_string(), "0.5pt");
    assert_eq!(Length::new(1.0, LengthUnit::Pt).to_string(), "1pt");
    assert_eq!(Length::new(2.0, LengthUnit::Cm).to_string(), "2cm");
}

#[test]
fn test_parse_format_round_trip() {
    for text in ["0.5pt", "1pt", "1.27cm", "10mm", "1in", "6pc", "96px"] {
        assert_eq!(Length::parse(text).unwrap().to_string(), text);
    }
}

#[test]
fn test_equality_is_structural_not_metric() {
    // 10mm and 1cm measure the same distance but are different values.
    let mm = Length::new(10.0, LengthUnit::Mm);
    let cm = Length::new(1.0, LengthUnit::Cm);
    assert_ne!(mm, cm);
    assert!((mm.to_cm() - cm.to_cm()).abs() < 1e-12);
}

#[test]
fn test_default_is_zero_points() {
    let len = Length::default();
    assert_eq!(len.value(), 0.0);
    assert_eq!(len.unit(), LengthUnit::Pt);
}
