use crate::theme::Theme;
use crate::types::{BorderLine, Color, Length, Prop, Value};

/// Format a number without a trailing `.0`.
fn number(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

pub(crate) fn length(length: &Length, theme: &dyn Theme) -> String {
    match length {
        Length::Space(units) => match theme.space(*units) {
            // A theme that hands back another token gets no second lookup.
            Length::Space(v) => number(v),
            resolved => self::length(&resolved, theme),
        },
        Length::Px(v) if *v == 0.0 => "0".to_string(),
        Length::Px(v) => format!("{}px", number(*v)),
        Length::Rem(v) => format!("{}rem", number(*v)),
        Length::Percent(v) => format!("{}%", number(*v)),
        Length::Auto => "auto".to_string(),
    }
}

pub(crate) fn color(color: &Color, theme: &dyn Theme) -> Option<String> {
    let color = match color {
        Color::Var(name) => theme.color(name)?,
        other => other,
    };

    match color {
        Color::Var(_) => None,
        Color::Oklch { a, .. } if *a < 1.0 => {
            let rgb = color.to_rgb();
            Some(format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, number(*a)))
        }
        _ => Some(color.to_rgb().to_hex()),
    }
}

fn border(border: &BorderLine, theme: &dyn Theme) -> String {
    let mut out = format!("{} {}", length(&border.width, theme), border.style.as_css());
    if let Some(c) = border.color.as_ref().and_then(|c| color(c, theme)) {
        out.push(' ');
        out.push_str(&c);
    }
    out
}

pub(crate) fn value(value: &Value, theme: &dyn Theme) -> Option<String> {
    let css = match value {
        Value::Length(l) => length(l, theme),
        Value::Border(b) => border(b, theme),
        Value::None => "none".to_string(),
        Value::Display(v) => v.as_css().to_string(),
        Value::Direction(v) => v.as_css().to_string(),
        Value::Align(v) => v.as_css().to_string(),
        Value::Justify(v) => v.as_css().to_string(),
        Value::Wrap(v) => v.as_css().to_string(),
        Value::Color(c) => color(c, theme)?,
        Value::Keyword(k) => k.clone(),
    };
    Some(css)
}

/// `name: value` pairs for one property. Unresolvable values yield nothing.
pub(crate) fn declarations(prop: Prop, v: &Value, theme: &dyn Theme) -> Vec<String> {
    let Some(css) = value(v, theme) else {
        log::trace!("[render] dropping unresolved {prop:?} value {v:?}");
        return Vec::new();
    };

    prop.css_names()
        .iter()
        .map(|name| format!("{name}: {css}"))
        .collect()
}
