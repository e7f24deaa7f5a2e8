use std::io::Cursor;

use super::*;

#[test]
fn defaults_match_host_schema() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.font_size, 32);
    assert_eq!(cfg.font_color, NamedColor::White);
    assert_eq!(cfg.h_position, Anchor::Start);
    assert_eq!(cfg.v_position, Anchor::Start);
    assert_eq!((cfg.h_padding, cfg.v_padding), (20, 20));
    assert_eq!(cfg.num_padding, 3);
    assert_eq!(cfg.prefix, "Frame");
    assert!(!cfg.outline.enabled);
    assert_eq!(cfg.outline.color, OutlineColor::Named(NamedColor::Black));
    assert_eq!(cfg.outline.stroke_width, 1);
    cfg.validate().unwrap();
}

#[test]
fn json_fields_are_optional_and_aliases_resolve() {
    let json = r#"{
        "font_size": 48,
        "font_color": "Yellow",
        "h_position": "right",
        "v_position": "bottom",
        "prefix_text": "Shot",
        "outline": { "enabled": true, "stroke_width": 3 }
    }"#;
    let cfg = RenderConfig::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(cfg.font_size, 48);
    assert_eq!(cfg.font_color, NamedColor::Yellow);
    assert_eq!(cfg.h_position, Anchor::End);
    assert_eq!(cfg.v_position, Anchor::End);
    assert_eq!(cfg.prefix, "Shot");
    assert_eq!(cfg.num_padding, 3);
    assert_eq!(
        cfg.outline.effective(),
        Some((Rgb8::new(0, 0, 0), 3))
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RenderConfig::from_reader(Cursor::new(r#"{ "font_sise": 10 }"#)).unwrap_err();
    assert!(matches!(err, AnnotateError::Serde(_)));
}

#[test]
fn out_of_range_values_fail_validation() {
    let cases: [(&str, fn(&mut RenderConfig)); 5] = [
        ("font_size", |c| c.font_size = 7),
        ("h_padding", |c| c.h_padding = 1001),
        ("v_padding", |c| c.v_padding = 5000),
        ("num_padding", |c| c.num_padding = 0),
        ("outline.stroke_width", |c| c.outline.stroke_width = 6),
    ];
    for (field, mutate) in cases {
        let mut cfg = RenderConfig::default();
        mutate(&mut cfg);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, AnnotateError::Config(_)));
        assert!(err.to_string().contains(field), "{err}");
    }
}

#[test]
fn json_range_errors_surface_from_reader() {
    let err = RenderConfig::from_reader(Cursor::new(r#"{ "num_padding": 9 }"#)).unwrap_err();
    assert!(err.to_string().contains("num_padding"));
}

#[test]
fn outline_effective_requires_all_three_conditions() {
    let mut o = OutlineConfig {
        enabled: true,
        color: OutlineColor::Named(NamedColor::Red),
        stroke_width: 2,
    };
    assert_eq!(o.effective(), Some((Rgb8::new(255, 0, 0), 2)));

    o.enabled = false;
    assert_eq!(o.effective(), None);

    o.enabled = true;
    o.color = OutlineColor::None;
    assert_eq!(o.effective(), None);

    o.color = OutlineColor::Named(NamedColor::Red);
    o.stroke_width = 0;
    assert_eq!(o.effective(), None);
}

#[test]
fn anchor_parses_host_names() {
    assert_eq!("left".parse::<Anchor>().unwrap(), Anchor::Start);
    assert_eq!("TOP".parse::<Anchor>().unwrap(), Anchor::Start);
    assert_eq!("center".parse::<Anchor>().unwrap(), Anchor::Center);
    assert_eq!("bottom".parse::<Anchor>().unwrap(), Anchor::End);
    assert!("middle".parse::<Anchor>().is_err());
}
