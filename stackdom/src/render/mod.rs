//! Serialize an element tree to HTML plus a generated stylesheet.
//!
//! Used for snapshots and debugging; it is not a layout engine. Each
//! element with a non-empty style gets a class derived from its id,
//! responsive values become `min-width` media queries and nested rules
//! substitute `&` with the element's class selector.

mod css;

use std::collections::BTreeMap;

use crate::element::{Content, Element};
use crate::responsive::Breakpoint;
use crate::theme::Theme;
use crate::types::Style;

#[derive(Debug, Default)]
struct StyleSheet {
    rules: BTreeMap<Breakpoint, Vec<(String, Vec<String>)>>,
}

impl StyleSheet {
    fn push(&mut self, bp: Breakpoint, selector: &str, mut declarations: Vec<String>) {
        let rules = self.rules.entry(bp).or_default();
        match rules.iter_mut().find(|(s, _)| s == selector) {
            Some((_, existing)) => existing.append(&mut declarations),
            None => rules.push((selector.to_string(), declarations)),
        }
    }

    fn collect(&mut self, style: &Style, selector: &str, theme: &dyn Theme) {
        for (prop, value) in style.props() {
            for (bp, value) in value.entries() {
                let declarations = css::declarations(prop, value, theme);
                if !declarations.is_empty() {
                    self.push(bp, selector, declarations);
                }
            }
        }

        for (nested, style) in style.nested_rules() {
            let nested_selector = nested.as_css().replace('&', selector);
            self.collect(style, &nested_selector, theme);
        }
    }

    fn write(&self, theme: &dyn Theme, out: &mut String) {
        for (bp, rules) in &self.rules {
            let media = match bp {
                Breakpoint::Base => None,
                bp => match theme.breakpoint(*bp) {
                    Some(width) => Some(width),
                    None => {
                        log::trace!("[render] theme has no width for {bp}, skipping rules");
                        continue;
                    }
                },
            };

            if let Some(width) = media {
                out.push_str(&format!("@media (min-width: {width}){{"));
            }
            for (selector, declarations) in rules {
                out.push_str(selector);
                out.push('{');
                out.push_str(&declarations.join(";"));
                out.push('}');
            }
            if media.is_some() {
                out.push('}');
            }
        }
    }
}

/// Render `root` to an HTML string with a leading `<style>` block.
///
/// Mounting binds every [`crate::NodeRef`] in the tree to its element id.
pub fn to_html(root: &Element, theme: &dyn Theme) -> String {
    let mut sheet = StyleSheet::default();
    let mut body = String::new();
    let mut count = 0usize;
    write_element(root, theme, &mut sheet, &mut body, &mut count);

    let mut out = String::new();
    if !sheet.rules.is_empty() {
        out.push_str("<style>");
        sheet.write(theme, &mut out);
        out.push_str("</style>");
    }
    out.push_str(&body);

    log::debug!(
        "[render] {} elements, {} stylesheet breakpoints, {} bytes",
        count,
        sheet.rules.len(),
        out.len()
    );
    out
}

/// Class name generated for an element id.
pub fn class_name(id: &str) -> String {
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("s-{safe}")
}

fn write_element(
    element: &Element,
    theme: &dyn Theme,
    sheet: &mut StyleSheet,
    out: &mut String,
    count: &mut usize,
) {
    *count += 1;
    if let Some(node_ref) = &element.node_ref {
        node_ref.bind(&element.id);
    }

    out.push('<');
    out.push_str(&element.tag);
    push_attr(out, "id", &element.id);
    if !element.style.is_empty() {
        let class = class_name(&element.id);
        sheet.collect(&element.style, &format!(".{class}"), theme);
        push_attr(out, "class", &class);
    }
    if let Some(key) = &element.key {
        push_attr(out, "data-key", key);
    }
    for (name, value) in &element.attrs {
        push_attr(out, name, value);
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, theme, sheet, out, count);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
