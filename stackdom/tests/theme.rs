use stackdom::{Breakpoint, Color, DefaultTheme, Error, Length, Theme};

#[test]
fn test_default_theme() {
    let theme = DefaultTheme::new();
    assert_eq!(theme.space(2.0), Length::Rem(0.5));
    assert_eq!(theme.space(0.0), Length::ZERO);
    assert_eq!(theme.breakpoint(Breakpoint::Base), None);
    assert_eq!(theme.breakpoint(Breakpoint::Md), Some("48em"));
    assert!(theme.color("border").is_some());
    assert!(theme.color("nope").is_none());
}

#[test]
fn test_from_json_overrides() {
    let theme = DefaultTheme::from_json(
        r##"{
            "space_unit_rem": 0.5,
            "breakpoints": { "md": "40em", "2xl": "120em" },
            "colors": { "border": "#cccccc" }
        }"##,
    )
    .unwrap();

    assert_eq!(theme.space(2.0), Length::Rem(1.0));
    assert_eq!(theme.breakpoint(Breakpoint::Md), Some("40em"));
    assert_eq!(theme.breakpoint(Breakpoint::Xxl), Some("120em"));
    assert_eq!(theme.breakpoint(Breakpoint::Lg), Some("62em"));
    assert_eq!(theme.color("border"), Some(&Color::rgb(0xcc, 0xcc, 0xcc)));
}

#[test]
fn test_from_json_empty_object_keeps_defaults() {
    let theme = DefaultTheme::from_json("{}").unwrap();
    assert_eq!(theme.space_unit_rem, 0.25);
}

#[test]
fn test_from_json_errors() {
    assert!(matches!(
        DefaultTheme::from_json("not json"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        DefaultTheme::from_json(r#"{ "breakpoints": { "huge": "1em" } }"#),
        Err(Error::UnknownBreakpoint(name)) if name == "huge"
    ));
    assert!(matches!(
        DefaultTheme::from_json(r#"{ "colors": { "border": "red" } }"#),
        Err(Error::InvalidColor(_))
    ));
}
