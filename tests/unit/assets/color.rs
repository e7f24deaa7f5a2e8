use serde_json::json;

use super::*;

#[test]
fn named_colors_map_to_fixed_rgb() {
    assert_eq!(NamedColor::White.rgb(), Rgb8::new(255, 255, 255));
    assert_eq!(NamedColor::Black.rgb(), Rgb8::new(0, 0, 0));
    assert_eq!(NamedColor::Yellow.rgb(), Rgb8::new(255, 255, 0));
    assert_eq!(NamedColor::Cyan.rgb(), Rgb8::new(0, 255, 255));
    assert_eq!(NamedColor::Magenta.rgb(), Rgb8::new(255, 0, 255));
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!("RED".parse::<NamedColor>().unwrap(), NamedColor::Red);
    assert_eq!(" Blue ".parse::<NamedColor>().unwrap(), NamedColor::Blue);
    assert!("orange".parse::<NamedColor>().is_err());
}

#[test]
fn outline_none_disables_color() {
    let c: OutlineColor = "None".parse().unwrap();
    assert_eq!(c, OutlineColor::None);
    assert_eq!(c.rgb(), None);
    assert_eq!(
        "green".parse::<OutlineColor>().unwrap().rgb(),
        Some(Rgb8::new(0, 255, 0))
    );
}

#[test]
fn serde_uses_lowercase_names() {
    let c: NamedColor = serde_json::from_value(json!("magenta")).unwrap();
    assert_eq!(c, NamedColor::Magenta);
    assert_eq!(serde_json::to_value(NamedColor::Green).unwrap(), json!("green"));

    let o: OutlineColor = serde_json::from_value(json!("none")).unwrap();
    assert_eq!(o, OutlineColor::None);
    assert_eq!(serde_json::to_value(o).unwrap(), json!("none"));

    let err = serde_json::from_value::<NamedColor>(json!("none")).unwrap_err();
    assert!(err.to_string().contains("unknown color"));
}
